use super::context::Context;
use super::render::{describe_change, topic_mode};
use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use essay_assist::{build_assist, finish_generation, prepare_generation};
use essay_editor::{EditSession, EditorError, GenerationOutcome, MutationResult};
use std::path::Path;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Essay id
    pub id: String,

    /// Section id (see `essay show <id>`)
    pub section: String,

    /// New text for the section
    pub text: String,
}

#[derive(Debug, Args)]
pub struct TopicArgs {
    /// Essay id
    pub id: String,

    /// New topic text
    pub topic: String,

    /// Treat the topic as a pasted assignment prompt
    #[arg(long)]
    pub prompt: bool,
}

#[derive(Debug, Args)]
pub struct AddGroupArgs {
    /// Essay id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct RemoveGroupArgs {
    /// Essay id
    pub id: String,

    /// Key of the group to remove (see `essay show <id>`)
    pub key: String,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Essay id
    pub id: String,

    /// Section id to draft
    pub section: String,
}

pub async fn edit(args: EditArgs, cwd: &Path) -> Result<()> {
    mutate(cwd, &args.id, |session| session.update_section(&args.section, &args.text)).await
}

pub async fn topic(args: TopicArgs, cwd: &Path) -> Result<()> {
    let mode = topic_mode(args.prompt);
    mutate(cwd, &args.id, |session| session.set_topic(&args.topic, mode)).await
}

pub async fn add_group(args: AddGroupArgs, cwd: &Path) -> Result<()> {
    mutate(cwd, &args.id, |session| session.add_group()).await
}

pub async fn remove_group(args: RemoveGroupArgs, cwd: &Path) -> Result<()> {
    mutate(cwd, &args.id, |session| session.remove_group(&args.key)).await
}

pub async fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let ctx = Context::load(cwd)?;
    let assist = build_assist(&ctx.config.assist)?;
    let mut open = ctx.open(&args.id).await?;
    let mut writer = ctx.writer(&open.record.id);

    println!(
        "{} Drafting {} with {}...",
        "✎".bright_blue(),
        args.section.bright_white(),
        assist.name()
    );

    let pending = prepare_generation(&mut open.session, &args.section)?;
    let produced = assist.generate(&pending.request).await;
    let outcome = finish_generation(&mut open.session, &pending.ticket, produced)
        .with_context(|| format!("Generation failed for {}; existing text kept", args.section))?;

    match outcome {
        GenerationOutcome::Applied(result) => {
            report(&result);
            writer.push(&open.session, &result);
            println!();
            println!("{}", open.session.document().text(&args.section));
        }
        GenerationOutcome::Stale { section_id, .. } => {
            println!("{} {} changed meanwhile; result dropped", "⚠️".yellow(), section_id);
        }
    }

    writer.flush().await;
    Ok(())
}

/// Load, apply one mutation, persist, and report
async fn mutate<F>(cwd: &Path, id: &str, apply: F) -> Result<()>
where
    F: FnOnce(&mut EditSession) -> Result<MutationResult, EditorError>,
{
    let ctx = Context::load(cwd)?;
    let mut open = ctx.open(id).await?;
    let mut writer = ctx.writer(&open.record.id);

    let result = apply(&mut open.session)?;
    report(&result);
    writer.push(&open.session, &result);
    writer.flush().await;

    if writer.failures() > 0 {
        println!("{} Change could not be saved; see logs (ESSAY_LOG=warn)", "⚠️".yellow());
    }
    Ok(())
}

fn report(result: &MutationResult) {
    let line = describe_change(&result.change);
    if result.change.is_noop() {
        println!("{} {}", "⚠️".yellow(), line);
    } else {
        println!("{} {} (version {})", "✓".green(), line, result.version);
    }
}
