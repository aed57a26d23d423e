use super::args::{Cli, Commands, ContactCommand, PostCommand, ProjectCommand};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;

pub async fn run(cli: Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        show_guidance();
        return Ok(());
    };

    let format = cli.format;
    let context = ExecutionContext::new(&cli)?;

    match command {
        Commands::Post { command } => match command {
            PostCommand::List {
                search,
                page,
                page_size,
            } => {
                handlers::post_list::handle(&context, search.clone(), *page, *page_size, format)
                    .await
            }
            PostCommand::Show { slug } => {
                handlers::post_show::handle(&context, slug, format).await
            }
            PostCommand::Latest { limit } => {
                handlers::post_latest::handle(&context, *limit, format).await
            }
        },

        Commands::Project { command } => match command {
            ProjectCommand::List {
                category,
                page,
                page_size,
            } => {
                handlers::project_list::handle(
                    &context,
                    category.clone(),
                    *page,
                    *page_size,
                    format,
                )
                .await
            }
            ProjectCommand::Show { id } => {
                handlers::project_show::handle(&context, id, format).await
            }
            ProjectCommand::Featured { count } => {
                handlers::project_featured::handle(&context, *count, format).await
            }
            ProjectCommand::Categories => {
                handlers::project_categories::handle(&context, format).await
            }
        },

        Commands::Contact { command } => match command {
            ContactCommand::Send {
                name,
                email,
                subject,
                message,
            } => {
                handlers::contact_send::handle(
                    &context,
                    folio_types::ContactMessage {
                        name: name.clone(),
                        email: email.clone(),
                        subject: subject.clone(),
                        message: message.clone(),
                    },
                    format,
                )
                .await
            }
        },
    }
}

fn show_guidance() {
    println!("folio - Portfolio content browser\n");
    println!("Quick commands:");
    println!("  folio post list                   # Browse blog posts");
    println!("  folio post show <SLUG>            # Read one post");
    println!("  folio project list                # Browse projects");
    println!("  folio project categories          # List project categories");
    println!("  folio contact send ...            # Send a contact message\n");
    println!("Content comes from --api-url (Strapi-style API) or --content-dir");
    println!("(a static directory with posts-meta.json). Environment variables");
    println!("FOLIO_API_URL, FOLIO_CONTENT_DIR and FOLIO_RELAY_URL work too.\n");
    println!("For all commands:");
    println!("  folio --help");
}
