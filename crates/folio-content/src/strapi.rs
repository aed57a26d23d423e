use crate::error::{Error, Result};
use crate::normalize;
use crate::traits::ContentSource;
use async_trait::async_trait;
use folio_types::{Post, Project};

/// Content source backed by a Strapi-style HTTP API.
///
/// Collection endpoints: `GET {base}/posts`, `GET {base}/projects`.
/// Single-record endpoint: `GET {base}/projects/{id}`, where a 404 maps to
/// `Error::NotFound`. Posts have no per-slug endpoint; `fetch_post` resolves
/// through the posts index.
pub struct StrapiSource {
    http: reqwest::Client,
    base_url: String,
    asset_base: Option<String>,
}

impl StrapiSource {
    pub fn new(base_url: impl Into<String>, asset_base: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            asset_base,
        }
    }

    fn asset_base(&self) -> Option<&str> {
        // Asset URLs default to the API host unless an explicit base is set.
        self.asset_base.as_deref().or(Some(self.base_url.as_str()))
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ContentSource for StrapiSource {
    fn id(&self) -> &'static str {
        "strapi"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let payload = self.get_text("posts").await?;
        normalize::parse_posts(&payload, self.asset_base())
    }

    async fn fetch_post(&self, slug: &str) -> Result<Post> {
        let posts = self.fetch_posts().await?;
        posts
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| Error::NotFound(format!("post '{}'", slug)))
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let payload = self.get_text("projects").await?;
        normalize::parse_projects(&payload, self.asset_base())
    }

    async fn fetch_project(&self, id: &str) -> Result<Project> {
        let payload = match self.get_text(&format!("projects/{}", id)).await {
            Err(Error::Status { status: 404, .. }) => {
                return Err(Error::NotFound(format!("project '{}'", id)));
            }
            other => other?,
        };

        normalize::parse_project(&payload, self.asset_base())
    }
}
