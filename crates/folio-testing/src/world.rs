//! Fluent test environment for CLI integration tests.

use anyhow::{Context, Result};
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A sandboxed home plus a static content directory the binary can read.
///
/// `HOME`/`XDG_CONFIG_HOME` point into the sandbox so a developer's real
/// `config.toml` can never leak into a test, and the relevant `FOLIO_*`
/// variables are cleared per run.
pub struct TestWorld {
    temp_dir: TempDir,
    content_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let content_dir = temp_dir.path().join("content");
        fs::create_dir_all(content_dir.join("posts")).expect("Failed to create content dir");

        Self {
            temp_dir,
            content_dir,
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Write `posts-meta.json` from fixture values.
    pub fn with_posts(self, posts: &[Value]) -> Self {
        let payload = Value::Array(posts.to_vec());
        fs::write(
            self.content_dir.join("posts-meta.json"),
            serde_json::to_string_pretty(&payload).expect("serializable fixtures"),
        )
        .expect("Failed to write posts index");
        self
    }

    /// Write `projects.json` from fixture values.
    pub fn with_projects(self, projects: &[Value]) -> Self {
        let payload = Value::Array(projects.to_vec());
        fs::write(
            self.content_dir.join("projects.json"),
            serde_json::to_string_pretty(&payload).expect("serializable fixtures"),
        )
        .expect("Failed to write projects index");
        self
    }

    /// Write a markdown body for one slug.
    pub fn with_post_body(self, slug: &str, markdown: &str) -> Self {
        fs::write(
            self.content_dir.join("posts").join(format!("{}.md", slug)),
            markdown,
        )
        .expect("Failed to write post body");
        self
    }

    /// Run the binary against the sandbox content dir.
    pub fn run(&self, args: &[&str]) -> Result<RunResult> {
        let content_dir = self.content_dir.to_str().expect("utf-8 temp path");
        let mut full_args = vec!["--content-dir", content_dir];
        full_args.extend_from_slice(args);
        self.run_without_content_dir(&full_args)
    }

    /// Run the binary with only the sandboxed environment (no content dir
    /// flag), for exercising configuration errors.
    pub fn run_without_content_dir(&self, args: &[&str]) -> Result<RunResult> {
        let home = self.temp_dir.path();
        let output = Command::cargo_bin("folio")
            .context("folio binary not built")?
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("FOLIO_API_URL")
            .env_remove("FOLIO_ASSET_BASE")
            .env_remove("FOLIO_CONTENT_DIR")
            .env_remove("FOLIO_RELAY_URL")
            .args(args)
            .output()
            .context("failed to run folio")?;

        Ok(RunResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

pub struct RunResult {
    success: bool,
    stdout: String,
    stderr: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Parse stdout as a JSON view-model.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON: {}", self.stdout))
    }
}
