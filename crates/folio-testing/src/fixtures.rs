//! Sample record builders for static content fixtures.

use serde_json::{Value, json};

/// Post index entry in the shape `posts-meta.json` ships with.
pub fn post(slug: &str, title: &str, date: &str) -> Value {
    json!({
        "id": slug,
        "slug": slug,
        "title": title,
        "excerpt": format!("About {}", title),
        "date": date,
        "image": format!("/images/{}.png", slug),
    })
}

/// Project index entry in the shape `projects.json` ships with.
pub fn project(id: &str, title: &str, category: &str, featured: bool) -> Value {
    json!({
        "id": id,
        "documentID": format!("doc-{}", id),
        "title": title,
        "description": format!("{} description", title),
        "image": format!("/images/{}.png", id),
        "date": "2024-01-01",
        "category": category,
        "featured": featured,
    })
}

/// `count` posts with strictly increasing dates, oldest first, so a
/// newest-first listing shows the highest number first.
pub fn numbered_posts(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            let month = (i - 1) / 28 + 1;
            let day = (i - 1) % 28 + 1;
            post(
                &format!("post-{}", i),
                &format!("Post {}", i),
                &format!("2024-{:02}-{:02}", month, day),
            )
        })
        .collect()
}
