use crate::error::{Error, Result};
use crate::normalize;
use crate::traits::ContentSource;
use async_trait::async_trait;
use folio_types::{Post, Project};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Posts index file inside a static content directory.
pub const POSTS_INDEX: &str = "posts-meta.json";

/// Optional projects index file inside a static content directory.
pub const PROJECTS_INDEX: &str = "projects.json";

/// Content source backed by a static directory:
///
/// ```text
/// <root>/posts-meta.json   post metadata index (required)
/// <root>/posts/<slug>.md   markdown bodies, one per post
/// <root>/projects.json     project index (optional; absent = no projects)
/// ```
pub struct StaticSource {
    root: PathBuf,
}

impl StaticSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_index(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        Ok(tokio::fs::read_to_string(&path).await?)
    }

    async fn read_body(&self, slug: &str) -> Result<Option<String>> {
        let path = self.root.join("posts").join(format!("{}.md", slug));
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(Some(body)),
            // A listed post without a body file still renders its metadata.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    fn id(&self) -> &'static str {
        "static"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let payload = self.read_index(POSTS_INDEX).await?;
        normalize::parse_posts(&payload, None)
    }

    async fn fetch_post(&self, slug: &str) -> Result<Post> {
        let posts = self.fetch_posts().await?;
        let mut post = posts
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| Error::NotFound(format!("post '{}'", slug)))?;

        if post.body.is_none() {
            post.body = self.read_body(slug).await?;
        }

        Ok(post)
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        match self.read_index(PROJECTS_INDEX).await {
            Ok(payload) => normalize::parse_projects(&payload, None),
            Err(Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    async fn fetch_project(&self, id: &str) -> Result<Project> {
        let projects = self.fetch_projects().await?;
        projects
            .into_iter()
            .find(|p| p.id == id || p.document_id == id)
            .ok_or_else(|| Error::NotFound(format!("project '{}'", id)))
    }
}
