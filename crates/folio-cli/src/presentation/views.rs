//! Plain-text console layouts for the view-models.

use super::view_models::{
    CategoryListViewModel, ContactResultViewModel, ContactStatus, FeaturedProjectsViewModel,
    LatestPostsViewModel, PageMetaViewModel, PostDetailViewModel, PostEntryViewModel,
    PostListViewModel, ProjectDetailViewModel, ProjectEntryViewModel, ProjectListViewModel,
    WindowSlot,
};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Console layout for a view-model. Implementations print directly, the
/// way the renderer drives them.
pub trait PlainView {
    fn render_plain(&self);
}

fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// `Page 2 of 5   1 [2] 3 ... 5` - only shown when there is more than one
/// page, mirroring the site's pagination controls.
fn print_page_strip(page: &PageMetaViewModel) {
    if page.page_count <= 1 {
        return;
    }

    let strip: Vec<String> = page
        .window
        .iter()
        .map(|slot| match slot {
            WindowSlot::Page(n) if *n == page.current_page => format!("[{}]", n),
            WindowSlot::Page(n) => n.to_string(),
            WindowSlot::Ellipsis => "...".to_string(),
        })
        .collect();

    println!();
    println!(
        "Page {} of {}   {}",
        page.current_page,
        page.page_count,
        strip.join(" ")
    );
}

fn print_post_rows(entries: &[PostEntryViewModel]) {
    println!("{:<24} {:<12} TITLE", "SLUG", "DATE");
    println!("{}", "-".repeat(72));
    for entry in entries {
        println!("{:<24} {:<12} {}", entry.slug, entry.date, entry.title);
    }
}

fn print_project_rows(entries: &[ProjectEntryViewModel]) {
    println!("{:<10} {:<16} {:<10} TITLE", "ID", "CATEGORY", "DATE");
    println!("{}", "-".repeat(72));
    for entry in entries {
        let marker = if entry.featured { " *" } else { "" };
        println!(
            "{:<10} {:<16} {:<10} {}{}",
            entry.id, entry.category, entry.date, entry.title, marker
        );
    }
}

impl PlainView for PostListViewModel {
    fn render_plain(&self) {
        match &self.search {
            Some(query) => println!(
                "{}",
                heading(&format!(
                    "Blog posts matching '{}' ({} found)",
                    query, self.page.total_matches
                ))
            ),
            None => println!(
                "{}",
                heading(&format!("Blog posts ({} found)", self.page.total_matches))
            ),
        }
        println!();

        if self.entries.is_empty() {
            println!("No posts found");
            return;
        }

        print_post_rows(&self.entries);
        print_page_strip(&self.page);
    }
}

impl PlainView for PostDetailViewModel {
    fn render_plain(&self) {
        println!("{}", heading(&self.title));
        println!();
        println!("Slug:  {}", self.slug);
        println!("Date:  {}", self.date);
        println!("Image: {}", self.image);
        if !self.excerpt.is_empty() {
            println!();
            println!("{}", self.excerpt);
        }
        if let Some(body) = &self.body {
            println!();
            println!("{}", body.trim_end());
        }
    }
}

impl PlainView for LatestPostsViewModel {
    fn render_plain(&self) {
        println!("{}", heading("Latest from the blog"));
        println!();

        if self.entries.is_empty() {
            println!("No posts found");
            return;
        }

        print_post_rows(&self.entries);
    }
}

impl PlainView for ProjectListViewModel {
    fn render_plain(&self) {
        if self.category == "All" {
            println!(
                "{}",
                heading(&format!("Projects ({} found)", self.page.total_matches))
            );
        } else {
            println!(
                "{}",
                heading(&format!(
                    "Projects in '{}' ({} found)",
                    self.category, self.page.total_matches
                ))
            );
        }
        println!();

        if self.entries.is_empty() {
            println!("No projects found");
            return;
        }

        print_project_rows(&self.entries);
        print_page_strip(&self.page);
    }
}

impl PlainView for ProjectDetailViewModel {
    fn render_plain(&self) {
        println!("{}", heading(&self.title));
        println!();
        println!("ID:       {}", self.id);
        println!("Category: {}", self.category);
        println!("Date:     {}", self.date);
        println!("Image:    {}", self.image);
        if let Some(url) = &self.url {
            println!("URL:      {}", url);
        }
        println!("Featured: {}", if self.featured { "yes" } else { "no" });
        if !self.description.is_empty() {
            println!();
            println!("{}", self.description);
        }
    }
}

impl PlainView for FeaturedProjectsViewModel {
    fn render_plain(&self) {
        println!("{}", heading("Featured projects"));
        println!();

        if self.entries.is_empty() {
            println!("No projects found");
            return;
        }

        print_project_rows(&self.entries);
    }
}

impl PlainView for CategoryListViewModel {
    fn render_plain(&self) {
        for category in &self.categories {
            println!("{}", category);
        }
    }
}

impl PlainView for ContactResultViewModel {
    fn render_plain(&self) {
        match self.status {
            ContactStatus::Sent => println!("Form submitted successfully!"),
            ContactStatus::Invalid => {
                println!("Contact message not sent:");
                for error in &self.errors {
                    println!("  {}: {}", error.field, error.message);
                }
            }
            ContactStatus::Failed => {
                if let Some(reason) = &self.reason {
                    println!("Message not delivered: {}", reason);
                } else {
                    println!("Message not delivered");
                }
                println!("Your input was kept; run the same command again to retry.");
            }
        }
    }
}
