use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;

pub async fn handle(context: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let categories = context.client()?.projects().categories().await?;

    let view_model = presenters::present_categories(categories);
    render(&view_model, format)
}
