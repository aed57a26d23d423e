//! Client facade for folio.
//!
//! Wires a [`folio_content::ContentSource`] (Strapi HTTP API or static
//! content directory, chosen by configuration) and the email relay behind
//! typed handles:
//!
//! ```no_run
//! # async fn run() -> folio_client::Result<()> {
//! let config = folio_client::Config {
//!     api_url: Some("https://cms.example.com/api".to_string()),
//!     ..Default::default()
//! };
//! let client = folio_client::Client::from_config(&config)?;
//! let posts = client.posts().list().await?;
//! println!("{} posts", posts.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

pub use client::{Client, Contact, Posts, Projects};
pub use config::{Config, Overrides};
pub use error::{Error, Result};

pub use folio_types as types;
