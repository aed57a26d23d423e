use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;

pub async fn handle(context: &ExecutionContext, slug: &str, format: OutputFormat) -> Result<()> {
    let post = context.client()?.posts().get(slug).await?;

    let view_model = presenters::present_post_detail(post);
    render(&view_model, format)
}
