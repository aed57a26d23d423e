use serde::Deserialize;

/// Collection payloads arrive either Strapi-wrapped (`{"data": [...]}`) or
/// as a bare JSON array, depending on the endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Collection<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Collection<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Collection::Wrapped { data } => data,
            Collection::Bare(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Single<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Single<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Single::Wrapped { data } => data,
            Single::Bare(record) => record,
        }
    }
}

/// Ids arrive as numbers from Strapi and as strings from static indexes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Num(i64),
    Str(String),
}

impl RawId {
    pub(crate) fn into_string(self) -> String {
        match self {
            RawId::Num(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

/// Images are plain URL strings in static indexes and asset objects in
/// Strapi responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawImage {
    Url(String),
    Asset(RawAsset),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAsset {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub formats: Option<RawFormats>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawFormats {
    #[serde(default)]
    pub thumbnail: Option<RawFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawFormat {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPost {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: Option<RawImage>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProject {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default, alias = "documentID")]
    pub document_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<RawImage>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}
