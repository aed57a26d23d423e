use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse portfolio content and send contact messages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Base URL of the Strapi-style content API")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Static content directory (posts-meta.json, posts/, projects.json)")]
    pub content_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Base URL for resolving relative CMS asset paths")]
    pub asset_base: Option<String>,

    #[arg(long, global = true, help = "Email-relay endpoint for contact submissions")]
    pub relay_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Post {
        #[command(subcommand)]
        command: PostCommand,
    },

    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    Contact {
        #[command(subcommand)]
        command: ContactCommand,
    },
}

#[derive(Subcommand)]
pub enum PostCommand {
    /// List blog posts, newest first
    List {
        #[arg(long, help = "Case-insensitive title search")]
        search: Option<String>,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, default_value = "3")]
        page_size: usize,
    },

    /// Show one post, including its body
    Show { slug: String },

    /// The most recent posts (home-page selection)
    Latest {
        #[arg(long, default_value = "3")]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// List projects
    List {
        #[arg(long, help = "Exact category, or 'All'")]
        category: Option<String>,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, default_value = "10")]
        page_size: usize,
    },

    /// Show one project by id or document id
    Show { id: String },

    /// Featured projects (home-page selection)
    Featured {
        #[arg(long, default_value = "4")]
        count: usize,
    },

    /// Selectable categories, "All" first
    Categories,
}

#[derive(Subcommand)]
pub enum ContactCommand {
    /// Validate and relay a contact message
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}
