//! Blog listing tests: newest-first ordering, search, paging and the
//! compressed page strip.

use anyhow::Result;
use folio_testing::{TestWorld, fixtures};
use serde_json::json;

fn world_with_posts(count: usize) -> TestWorld {
    TestWorld::new().with_posts(&fixtures::numbered_posts(count))
}

#[test]
fn lists_newest_first_with_default_page_size() -> Result<()> {
    // Given: 7 posts dated oldest-to-newest
    let world = world_with_posts(7);

    // When: listing with defaults (page 1, size 3)
    let result = world.run(&["post", "list", "--format", "json"])?;

    // Then: the newest three posts fill page 1 of 3
    assert!(result.success(), "stderr: {}", result.stderr());
    let output = result.json()?;
    assert_eq!(output["page"]["page_count"], 3);
    assert_eq!(output["page"]["total_matches"], 7);
    let slugs: Vec<&str> = output["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["post-7", "post-6", "post-5"]);
    Ok(())
}

#[test]
fn last_page_holds_the_remainder() -> Result<()> {
    let world = world_with_posts(7);

    let result = world.run(&["post", "list", "--page", "3", "--format", "json"])?;

    let output = result.json()?;
    assert_eq!(output["page"]["current_page"], 3);
    assert_eq!(output["entries"].as_array().unwrap().len(), 1);
    Ok(())
}

#[test]
fn out_of_range_page_clamps_to_the_last_page() -> Result<()> {
    let world = world_with_posts(7);

    let result = world.run(&["post", "list", "--page", "999", "--format", "json"])?;

    let output = result.json()?;
    assert_eq!(output["page"]["current_page"], 3);
    assert_eq!(output["entries"].as_array().unwrap().len(), 1);
    Ok(())
}

#[test]
fn search_is_case_insensitive() -> Result<()> {
    let world = TestWorld::new().with_posts(&[
        fixtures::post("react-app", "My React App", "2024-01-01"),
        fixtures::post("other", "Something Else", "2024-01-02"),
    ]);

    let result = world.run(&["post", "list", "--search", "REACT", "--format", "json"])?;

    let output = result.json()?;
    assert_eq!(output["search"], json!("REACT"));
    assert_eq!(output["page"]["total_matches"], 1);
    assert_eq!(output["entries"][0]["slug"], json!("react-app"));
    Ok(())
}

#[test]
fn hopeless_search_reports_no_results() -> Result<()> {
    let world = world_with_posts(7);

    let result = world.run(&["post", "list", "--search", "zzz"])?;

    assert!(result.success());
    assert!(result.stdout().contains("No posts found"));

    let json_result = world.run(&["post", "list", "--search", "zzz", "--format", "json"])?;
    let output = json_result.json()?;
    assert_eq!(output["page"]["page_count"], 0);
    assert_eq!(output["entries"].as_array().unwrap().len(), 0);
    Ok(())
}

#[test]
fn page_strip_compresses_long_runs() -> Result<()> {
    // 30 posts at size 3 -> 10 pages
    let world = world_with_posts(30);

    let result = world.run(&[
        "post", "list", "--page", "5", "--page-size", "3", "--format", "json",
    ])?;

    let output = result.json()?;
    assert_eq!(
        output["page"]["window"],
        json!([1, "...", 3, 4, 5, 6, 7, "...", 10])
    );

    let first = world.run(&["post", "list", "--page", "1", "--format", "json"])?;
    assert_eq!(first.json()?["page"]["window"], json!([1, 2, 3, "...", 10]));

    let last = world.run(&["post", "list", "--page", "10", "--format", "json"])?;
    assert_eq!(last.json()?["page"]["window"], json!([1, "...", 8, 9, 10]));
    Ok(())
}

#[test]
fn plain_listing_shows_the_page_strip_only_when_needed() -> Result<()> {
    let world = world_with_posts(7);

    let paged = world.run(&["post", "list"])?;
    assert!(paged.stdout().contains("Blog posts (7 found)"));
    assert!(paged.stdout().contains("Page 1 of 3"));

    let single = world.run(&["post", "list", "--page-size", "10"])?;
    assert!(!single.stdout().contains("Page 1 of 1"));
    Ok(())
}

#[test]
fn show_includes_the_markdown_body() -> Result<()> {
    let world = world_with_posts(3).with_post_body("post-2", "# Post 2\n\nBody text here.\n");

    let result = world.run(&["post", "show", "post-2"])?;

    assert!(result.success());
    assert!(result.stdout().contains("Post 2"));
    assert!(result.stdout().contains("Body text here."));
    Ok(())
}

#[test]
fn show_of_a_missing_slug_is_not_found() -> Result<()> {
    let world = world_with_posts(3);

    let result = world.run(&["post", "show", "no-such-post"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Not found"));
    assert!(result.stderr().contains("no-such-post"));
    Ok(())
}

#[test]
fn latest_returns_the_most_recent_posts() -> Result<()> {
    let world = world_with_posts(5);

    let result = world.run(&["post", "latest", "--limit", "2", "--format", "json"])?;

    let output = result.json()?;
    let slugs: Vec<&str> = output["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["post-5", "post-4"]);
    Ok(())
}
