mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add_group, delete, edit, generate, init, list, new, remove_group, show, topic, types,
    AddGroupArgs, DeleteArgs, EditArgs, GenerateArgs, InitArgs, ListArgs, NewArgs,
    RemoveGroupArgs, ShowArgs, TopicArgs, TypesArgs,
};
use tracing_subscriber::EnvFilter;

/// Essay composer - structured essay drafting from the terminal
#[derive(Parser, Debug)]
#[command(name = "essay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an essay.config.json in the current directory
    Init(InitArgs),

    /// List the available essay types
    Types(TypesArgs),

    /// Start a new essay
    New(NewArgs),

    /// Show an essay's outline and text
    Show(ShowArgs),

    /// Replace the text of one section
    Edit(EditArgs),

    /// Change the topic
    Topic(TopicArgs),

    /// Add a repeatable group before the last group
    AddGroup(AddGroupArgs),

    /// Remove a group you added
    RemoveGroup(RemoveGroupArgs),

    /// Draft one section with the configured assist provider
    Generate(GenerateArgs),

    /// List your essays by type
    List(ListArgs),

    /// Delete an essay
    Delete(DeleteArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ESSAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match std::env::current_dir() {
        Ok(cwd) => match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Types(args) => types(args, &cwd),
            Command::New(args) => new(args, &cwd).await,
            Command::Show(args) => show(args, &cwd).await,
            Command::Edit(args) => edit(args, &cwd).await,
            Command::Topic(args) => topic(args, &cwd).await,
            Command::AddGroup(args) => add_group(args, &cwd).await,
            Command::RemoveGroup(args) => remove_group(args, &cwd).await,
            Command::Generate(args) => generate(args, &cwd).await,
            Command::List(args) => list(args, &cwd).await,
            Command::Delete(args) => delete(args, &cwd).await,
        },
        Err(e) => Err(anyhow::anyhow!("Cannot get current directory: {}", e)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
