use super::context::Context;
use super::render::{print_document, topic_mode};
use anyhow::{anyhow, Context as _, Result};
use clap::Args;
use colored::Colorize;
use essay_sync::{create_document, list_library, SyncGateway};
use std::path::Path;

#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn types(args: TypesArgs, cwd: &Path) -> Result<()> {
    let ctx = Context::load(cwd)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(ctx.registry.all())?);
        return Ok(());
    }

    for doc_type in ctx.registry.all() {
        let repeatable = if doc_type.supports_repeatable_groups() {
            format!("+ {}", doc_type.body_template.map(|t| t.label).unwrap_or_default())
        } else {
            String::new()
        };
        println!(
            "{:<18} {}  {}",
            doc_type.id.bright_white().bold(),
            doc_type.title,
            repeatable.dimmed()
        );
        println!("{:<18} {}", "", doc_type.description.dimmed());
    }

    Ok(())
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Document type id (see `essay types`)
    pub document_type: String,

    /// Essay topic
    #[arg(short, long, default_value = "")]
    pub topic: String,

    /// Treat the topic as a pasted assignment prompt
    #[arg(long)]
    pub prompt: bool,
}

pub async fn new(args: NewArgs, cwd: &Path) -> Result<()> {
    let ctx = Context::load(cwd)?;

    let open = create_document(
        ctx.gateway.as_ref(),
        &ctx.registry,
        &ctx.config.owner_id,
        &args.document_type,
        &args.topic,
        topic_mode(args.prompt),
    )
    .await
    .with_context(|| format!("Cannot start a {} essay", args.document_type))?;

    println!("{} Created {}", "✓".green(), open.record.id.bright_white());
    println!();
    print_document(&open.record.title, open.session.doc_type(), open.session.document());

    Ok(())
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Essay id
    pub id: Option<String>,

    /// Print the stored record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn show(args: ShowArgs, cwd: &Path) -> Result<()> {
    let id = args
        .id
        .ok_or_else(|| anyhow!("No essay id given. Start a new essay with `essay new <type>`"))?;
    let ctx = Context::load(cwd)?;
    let open = ctx.open(&id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&open.record)?);
        return Ok(());
    }

    print_document(&open.record.title, open.session.doc_type(), open.session.document());
    Ok(())
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Owner to list (defaults to the configured owner)
    #[arg(short, long)]
    pub owner: Option<String>,
}

pub async fn list(args: ListArgs, cwd: &Path) -> Result<()> {
    let ctx = Context::load(cwd)?;
    let owner = args.owner.unwrap_or_else(|| ctx.config.owner_id.clone());

    let shelves = list_library(ctx.gateway.as_ref(), &ctx.registry, &owner).await?;
    if shelves.is_empty() {
        println!("{}", "No essays yet".yellow());
        return Ok(());
    }

    for shelf in shelves {
        println!("{} ({})", shelf.title.bright_blue().bold(), shelf.records.len());
        for record in shelf.records {
            println!(
                "  {}  {}  {}",
                record.id.dimmed(),
                record.title,
                record.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
            );
        }
    }

    Ok(())
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Essay id
    pub id: String,
}

pub async fn delete(args: DeleteArgs, cwd: &Path) -> Result<()> {
    let ctx = Context::load(cwd)?;
    ctx.gateway
        .delete(&args.id)
        .await
        .with_context(|| format!("Cannot delete essay {}", args.id))?;

    println!("{} Deleted {}", "✓".green(), args.id);
    Ok(())
}
