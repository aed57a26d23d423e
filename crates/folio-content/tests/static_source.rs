//! Static-directory source tests.
//!
//! Exercises the file layout the blog actually ships with: a
//! `posts-meta.json` index plus one markdown body per slug, and an optional
//! `projects.json`.

use anyhow::Result;
use folio_content::{ContentSource, Error, StaticSource};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const POSTS_INDEX: &str = r#"[
    {"id": "1", "slug": "first-post", "title": "First Post", "excerpt": "Opening words", "date": "2024-01-10", "image": "/images/first.png"},
    {"id": "2", "slug": "second-post", "title": "Second Post", "excerpt": "More words", "date": "2024-02-20", "image": "/images/second.png"}
]"#;

fn content_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("posts-meta.json"), POSTS_INDEX)?;
    fs::create_dir(dir.path().join("posts"))?;
    fs::write(
        dir.path().join("posts").join("first-post.md"),
        "# First Post\n\nHello from markdown.\n",
    )?;
    Ok(dir)
}

fn write_projects(root: &Path) -> Result<()> {
    fs::write(
        root.join("projects.json"),
        r#"[{"id": "p1", "documentID": "doc-1", "title": "Site", "category": "Web", "featured": true, "date": "2024-03-01"}]"#,
    )?;
    Ok(())
}

#[tokio::test]
async fn lists_posts_in_source_order() -> Result<()> {
    let dir = content_dir()?;
    let source = StaticSource::new(dir.path());

    let posts = source.fetch_posts().await?;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].slug, "first-post");
    assert_eq!(posts[1].slug, "second-post");
    assert!(posts[0].body.is_none());
    Ok(())
}

#[tokio::test]
async fn post_lookup_loads_markdown_body() -> Result<()> {
    let dir = content_dir()?;
    let source = StaticSource::new(dir.path());

    let post = source.fetch_post("first-post").await?;
    assert_eq!(post.title, "First Post");
    let body = post.body.expect("body file should be loaded");
    assert!(body.contains("Hello from markdown."));
    Ok(())
}

#[tokio::test]
async fn post_without_body_file_keeps_metadata() -> Result<()> {
    let dir = content_dir()?;
    let source = StaticSource::new(dir.path());

    let post = source.fetch_post("second-post").await?;
    assert_eq!(post.title, "Second Post");
    assert!(post.body.is_none());
    Ok(())
}

#[tokio::test]
async fn missing_slug_is_not_found() -> Result<()> {
    let dir = content_dir()?;
    let source = StaticSource::new(dir.path());

    match source.fetch_post("no-such-post").await {
        Err(Error::NotFound(msg)) => assert!(msg.contains("no-such-post")),
        other => panic!("expected NotFound, got {:?}", other.map(|p| p.slug)),
    }
    Ok(())
}

#[tokio::test]
async fn absent_projects_index_yields_empty_set() -> Result<()> {
    let dir = content_dir()?;
    let source = StaticSource::new(dir.path());

    let projects = source.fetch_projects().await?;
    assert!(projects.is_empty());
    Ok(())
}

#[tokio::test]
async fn project_lookup_matches_id_or_document_id() -> Result<()> {
    let dir = content_dir()?;
    write_projects(dir.path())?;
    let source = StaticSource::new(dir.path());

    let by_id = source.fetch_project("p1").await?;
    assert_eq!(by_id.title, "Site");

    let by_document = source.fetch_project("doc-1").await?;
    assert_eq!(by_document.id, "p1");

    match source.fetch_project("missing").await {
        Err(Error::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|p| p.id)),
    }
    Ok(())
}

#[tokio::test]
async fn missing_posts_index_is_an_io_error() -> Result<()> {
    let dir = TempDir::new()?;
    let source = StaticSource::new(dir.path());

    match source.fetch_posts().await {
        Err(Error::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|p| p.len())),
    }
    Ok(())
}
