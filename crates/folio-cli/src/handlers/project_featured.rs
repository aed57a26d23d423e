use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;

pub async fn handle(context: &ExecutionContext, count: usize, format: OutputFormat) -> Result<()> {
    let projects = context.client()?.projects().featured(count).await?;

    let view_model = presenters::present_featured_projects(projects);
    render(&view_model, format)
}
