//! Total mapping from raw CMS payloads to domain records.
//!
//! Every field has a documented default so a partially-filled CMS entry
//! normalizes instead of failing:
//! - missing text fields -> `""`
//! - missing project category -> [`DEFAULT_PROJECT_CATEGORY`]
//! - missing image -> [`PLACEHOLDER_IMAGE`]
//! - relative image URLs -> resolved against the CMS asset base

use crate::Result;
use crate::schema::{Collection, RawId, RawImage, RawPost, RawProject, Single};
use folio_types::{Post, Project};

/// Served from the site's own static assets when the CMS has no image.
pub const PLACEHOLDER_IMAGE: &str = "/images/no-image.png";

/// Category label for project entries published without one.
pub const DEFAULT_PROJECT_CATEGORY: &str = "Uncategorized";

/// Parse a posts collection payload (wrapped or bare) into domain records.
pub fn parse_posts(payload: &str, asset_base: Option<&str>) -> Result<Vec<Post>> {
    let raw: Collection<RawPost> = serde_json::from_str(payload)?;
    Ok(raw
        .into_vec()
        .into_iter()
        .map(|p| normalize_post(p, asset_base))
        .collect())
}

/// Parse a single-post payload into a domain record.
pub fn parse_post(payload: &str, asset_base: Option<&str>) -> Result<Post> {
    let raw: Single<RawPost> = serde_json::from_str(payload)?;
    Ok(normalize_post(raw.into_inner(), asset_base))
}

/// Parse a projects collection payload (wrapped or bare) into domain records.
pub fn parse_projects(payload: &str, asset_base: Option<&str>) -> Result<Vec<Project>> {
    let raw: Collection<RawProject> = serde_json::from_str(payload)?;
    Ok(raw
        .into_vec()
        .into_iter()
        .map(|p| normalize_project(p, asset_base))
        .collect())
}

/// Parse a single-project payload into a domain record.
pub fn parse_project(payload: &str, asset_base: Option<&str>) -> Result<Project> {
    let raw: Single<RawProject> = serde_json::from_str(payload)?;
    Ok(normalize_project(raw.into_inner(), asset_base))
}

fn normalize_post(raw: RawPost, asset_base: Option<&str>) -> Post {
    Post {
        id: raw.id.map(RawId::into_string).unwrap_or_default(),
        slug: raw.slug.unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        excerpt: raw.excerpt.unwrap_or_default(),
        date: raw.date.unwrap_or_default(),
        image: resolve_image(raw.image, asset_base),
        body: raw.body,
    }
}

fn normalize_project(raw: RawProject, asset_base: Option<&str>) -> Project {
    Project {
        id: raw.id.map(RawId::into_string).unwrap_or_default(),
        document_id: raw.document_id.unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        image: resolve_image(raw.image, asset_base),
        url: raw.url.filter(|u| !u.is_empty()),
        date: raw.date.unwrap_or_default(),
        category: raw
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_CATEGORY.to_string()),
        featured: raw.featured,
    }
}

fn resolve_image(image: Option<RawImage>, asset_base: Option<&str>) -> String {
    let url = match image {
        Some(RawImage::Url(url)) => Some(url),
        Some(RawImage::Asset(asset)) => asset
            .url
            .or_else(|| asset.formats.and_then(|f| f.thumbnail).and_then(|t| t.url)),
        None => None,
    };

    match url.filter(|u| !u.is_empty()) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
        Some(url) => match asset_base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/')),
            None => url,
        },
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}
