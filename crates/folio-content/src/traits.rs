use crate::Result;
use async_trait::async_trait;
use folio_types::{Post, Project};

/// A backend that supplies portfolio content.
///
/// Responsibilities:
/// - Fetch the full post/project sets (one fetch per view, no caching)
/// - Resolve single records, reporting a missing one as `Error::NotFound`
///   (distinct from transport/status failures)
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Unique source ID (e.g., "strapi", "static")
    fn id(&self) -> &'static str;

    /// Fetch all posts, in source order.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Fetch one post by slug, including its body.
    async fn fetch_post(&self, slug: &str) -> Result<Post>;

    /// Fetch all projects, in source order.
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Fetch one project by id (or document id).
    async fn fetch_project(&self, id: &str) -> Result<Project>;
}
