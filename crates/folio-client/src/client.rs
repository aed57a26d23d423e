use crate::config::Config;
use crate::error::{Error, Result};
use folio_content::{ContentSource, EmailRelay, StaticSource, StrapiSource};
use folio_engine::{derive_categories, featured_projects, latest_posts, validate};
use folio_types::{ContactMessage, Post, Project};

/// Entry point to the content backend selected by configuration.
pub struct Client {
    source: Box<dyn ContentSource>,
    relay_url: Option<String>,
}

impl Client {
    /// Select the content source: an explicit API URL wins, then a static
    /// content directory. Having neither is the fatal configuration error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source: Box<dyn ContentSource> = if let Some(api_url) = &config.api_url {
            Box::new(StrapiSource::new(api_url, config.asset_base.clone()))
        } else if let Some(content_dir) = &config.content_dir {
            Box::new(StaticSource::new(content_dir))
        } else {
            return Err(Error::Config(
                "no content source configured; set --api-url (or FOLIO_API_URL) or --content-dir"
                    .to_string(),
            ));
        };

        Ok(Self {
            source,
            relay_url: config.relay_url.clone(),
        })
    }

    /// Which backend was selected ("strapi" or "static").
    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts {
            source: self.source.as_ref(),
        }
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects {
            source: self.source.as_ref(),
        }
    }

    /// Contact handle using the configured relay endpoint.
    pub fn contact(&self) -> Result<Contact> {
        let endpoint = self.relay_url.as_deref().ok_or_else(|| {
            Error::Config(
                "no email relay configured; set --relay-url or FOLIO_RELAY_URL".to_string(),
            )
        })?;
        Ok(Contact {
            relay: EmailRelay::new(endpoint),
        })
    }
}

pub struct Posts<'a> {
    source: &'a dyn ContentSource,
}

impl Posts<'_> {
    pub async fn list(&self) -> Result<Vec<Post>> {
        Ok(self.source.fetch_posts().await?)
    }

    pub async fn get(&self, slug: &str) -> Result<Post> {
        Ok(self.source.fetch_post(slug).await?)
    }

    pub async fn latest(&self, limit: usize) -> Result<Vec<Post>> {
        let posts = self.source.fetch_posts().await?;
        Ok(latest_posts(&posts, limit).into_iter().cloned().collect())
    }
}

pub struct Projects<'a> {
    source: &'a dyn ContentSource,
}

impl Projects<'_> {
    pub async fn list(&self) -> Result<Vec<Project>> {
        Ok(self.source.fetch_projects().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Project> {
        Ok(self.source.fetch_project(id).await?)
    }

    pub async fn featured(&self, count: usize) -> Result<Vec<Project>> {
        let projects = self.source.fetch_projects().await?;
        Ok(featured_projects(&projects, count)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Selectable categories derived from the full project set, "All" first.
    pub async fn categories(&self) -> Result<Vec<String>> {
        let projects = self.source.fetch_projects().await?;
        Ok(derive_categories(&projects))
    }
}

pub struct Contact {
    relay: EmailRelay,
}

impl Contact {
    /// Validate, then relay. Validation failures never reach the network;
    /// relay failures leave the caller's message untouched for a retry.
    pub async fn send(&self, message: &ContactMessage) -> Result<()> {
        let errors = validate(message);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        self.relay.send(message).await?;
        Ok(())
    }
}
