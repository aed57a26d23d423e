use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;

pub async fn handle(context: &ExecutionContext, id: &str, format: OutputFormat) -> Result<()> {
    let project = context.client()?.projects().get(id).await?;

    let view_model = presenters::present_project_detail(project);
    render(&view_model, format)
}
