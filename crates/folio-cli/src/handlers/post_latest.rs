use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;

pub async fn handle(context: &ExecutionContext, limit: usize, format: OutputFormat) -> Result<()> {
    let posts = context.client()?.posts().latest(limit).await?;

    let view_model = presenters::present_latest_posts(posts);
    render(&view_model, format)
}
