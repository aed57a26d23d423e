use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;
use folio_engine::{CollectionView, SortOrder};

pub async fn handle(
    context: &ExecutionContext,
    category: Option<String>,
    page: usize,
    page_size: usize,
    format: OutputFormat,
) -> Result<()> {
    let projects = context.client()?.projects().list().await?;

    let mut view = CollectionView::new(projects, page_size, SortOrder::Source);
    if let Some(category) = category {
        view.set_category(category);
    }
    view.set_page(page);

    let view_model = presenters::present_project_list(&view);
    render(&view_model, format)
}
