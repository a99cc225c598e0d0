use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use essay_assist::AssistSettings;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Owner id recorded on new essays
    #[arg(short, long, default_value = "local")]
    pub owner: String,

    /// Directory for stored essays
    #[arg(short, long, default_value = ".essays")]
    pub store_dir: String,

    /// Content assist provider (gemini, placeholder)
    #[arg(short, long, default_value = "gemini")]
    pub provider: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing essay workspace...".bright_blue().bold());

    let store_dir = cwd.join(&args.store_dir);
    if !store_dir.exists() {
        fs::create_dir_all(&store_dir)?;
        println!("  {} Created {}/", "✓".green(), args.store_dir);
    }

    let config = Config {
        store_dir: args.store_dir.clone(),
        owner_id: args.owner.clone(),
        assist: AssistSettings {
            provider: args.provider.clone(),
            ..AssistSettings::default()
        },
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: essay types");
    println!("  2. Run: essay new argumentative --topic \"Your topic\"");
    if config.assist.provider == "gemini" {
        println!("  3. Export {} to enable generation", config.assist.api_key_env);
    }

    Ok(())
}
