use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::Result;
use folio_engine::{CollectionView, SortOrder};

pub async fn handle(
    context: &ExecutionContext,
    search: Option<String>,
    page: usize,
    page_size: usize,
    format: OutputFormat,
) -> Result<()> {
    let posts = context.client()?.posts().list().await?;

    // Blog listing is always newest first; the search filter resets the
    // page, so the requested page applies to the filtered set.
    let mut view = CollectionView::new(posts, page_size, SortOrder::NewestFirst);
    if let Some(query) = search {
        view.set_search_query(query);
    }
    view.set_page(page);

    let view_model = presenters::present_post_list(&view);
    render(&view_model, format)
}
