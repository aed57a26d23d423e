use serde::{Deserialize, Serialize};

/// A blog post as exposed by the content layer.
///
/// `slug` is the unique, URL-safe identifier within a fetched set. `date` is
/// an ISO-8601 string used only for ordering (see [`crate::parse_iso_date`]).
/// `body` is populated by single-record lookups and left empty in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub image: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// A portfolio project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub document_id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub url: Option<String>,
    pub date: String,
    pub category: String,
    pub featured: bool,
}

/// A contact-form submission, relayed verbatim to the email endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
