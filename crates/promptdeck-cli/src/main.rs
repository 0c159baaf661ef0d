//! PromptDeck CLI - Browse, search, add and copy prompts
//!
//! Talks to a PromptDeck server over HTTP and copies prompt bodies to the
//! system clipboard.

mod api;
mod browse;
mod clipboard;
mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use promptdeck::{CatalogView, Category, CopyOutcome, RecordId};

use api::{PromptDeckClient, PromptResponse};
use browse::{copy_prompt, run_form, show_notice, FormInput};
use clipboard::SystemClipboard;
use config::Config;

type CliView = CatalogView<PromptDeckClient, SystemClipboard>;

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "PromptDeck CLI - Browse, search, add and copy prompts", long_about = None)]
#[command(version)]
struct Cli {
    /// Server URL (overrides the configured one)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List prompts, newest first
    List {
        /// Case-insensitive text to match against title, use case and body
        #[arg(short, long)]
        search: Option<String>,
        /// Category filter (all, admin, copywriting, coding, marketing, research)
        #[arg(short, long)]
        category: Option<Category>,
        /// Print the matching prompts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a prompt (missing fields are asked for)
    Add {
        #[arg(short, long)]
        title: Option<String>,
        /// Prompt body (or use -f for file)
        #[arg(short, long)]
        body: Option<String>,
        /// Read the body from a file
        #[arg(short, long)]
        file: Option<String>,
        #[arg(short, long)]
        use_case: Option<String>,
        /// Comma-separated tags, at most 3 are kept (e.g., "admin, email")
        #[arg(long)]
        tags: Option<String>,
    },

    /// Copy a prompt body to the clipboard
    Copy {
        /// Prompt ID
        id: RecordId,
    },

    /// Browse the catalog interactively
    Browse {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show or update configuration
    Config {
        /// Save a new server URL
        #[arg(long = "set-base-url")]
        set_base_url: Option<String>,
        /// Save the category used when none is given
        #[arg(long)]
        default_category: Option<Category>,
        /// Save how long "Copied!" is shown, in milliseconds
        #[arg(long)]
        feedback_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match cli.command {
        Commands::List { search, category, json } => cmd_list(&config, search, category, json).await,
        Commands::Add { title, body, file, use_case, tags } => {
            cmd_add(&config, title, body, file, use_case, tags).await
        }
        Commands::Copy { id } => cmd_copy(&config, id).await,
        Commands::Browse { search, category } => cmd_browse(&config, search, category).await,
        Commands::Config { set_base_url, default_category, feedback_ms } => {
            cmd_config(config, set_base_url, default_category, feedback_ms).await
        }
    }
}

/// Initialize tracing subscriber with environment filter (logs go to stderr)
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("promptdeck=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn load_view(config: &Config) -> Result<CliView> {
    let client = Arc::new(PromptDeckClient::new(&config.base_url));
    let clipboard = Arc::new(SystemClipboard::detect());

    CatalogView::load(client, clipboard, config.view_config())
        .await
        .with_context(|| format!("Could not load prompts from {}", config.base_url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_list(config: &Config, search: Option<String>, category: Option<Category>, json: bool) -> Result<()> {
    let mut view = load_view(config).await?;

    view.set_category(category.unwrap_or(config.default_category));
    if let Some(term) = search {
        view.set_search(term);
    }

    if json {
        let prompts: Vec<PromptResponse> =
            view.visible().iter().filter_map(PromptResponse::from_prompt).collect();
        println!("{}", serde_json::to_string_pretty(&prompts)?);
        return Ok(());
    }

    render::print_catalog(&view);
    Ok(())
}

async fn cmd_add(
    config: &Config,
    title: Option<String>,
    body: Option<String>,
    file: Option<String>,
    use_case: Option<String>,
    tags: Option<String>,
) -> Result<()> {
    // Get body from file or argument
    let body = match (body, file) {
        (Some(b), None) => Some(b),
        (None, Some(f)) => Some(fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))?),
        (Some(_), Some(_)) => {
            bail!("Cannot specify both --body and --file");
        }
        (None, None) => None,
    };

    let mut view = load_view(config).await?;
    let input = FormInput { title, body, use_case, tags };

    match run_form(&mut view, input, std::io::stdin().is_terminal()).await? {
        Some(prompt) => {
            println!();
            render::print_card(&prompt, view.is_copied(&prompt));
            if prompt.id.is_pending() {
                println!(
                    "\n{}",
                    "The server did not return the saved prompt; it will get its ID on the next load.".dimmed()
                );
            }
        }
        None => println!("{}", "Cancelled.".dimmed()),
    }

    Ok(())
}

async fn cmd_copy(config: &Config, id: RecordId) -> Result<()> {
    let mut view = load_view(config).await?;

    match copy_prompt(&mut view, &id).await {
        Some(CopyOutcome::Copied) => {
            if let Some(prompt) = view.find(&id) {
                render::print_card(prompt, view.is_copied(prompt));
            }
            Ok(())
        }
        Some(CopyOutcome::Skipped) => Ok(()),
        None => {
            show_notice(&mut view, false)?;
            bail!("Prompt {} was not copied", id);
        }
    }
}

async fn cmd_browse(config: &Config, search: Option<String>, category: Option<Category>) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("browse needs an interactive terminal; use 'promptdeck list' instead");
    }

    let mut view = load_view(config).await?;
    view.set_category(category.unwrap_or(config.default_category));
    if let Some(term) = search {
        view.set_search(term);
    }

    if !view.clipboard_available() {
        println!("{}", "No clipboard tool found: copying is disabled.".yellow());
    }

    browse::browse(&mut view).await
}

async fn cmd_config(
    mut config: Config,
    set_base_url: Option<String>,
    default_category: Option<Category>,
    feedback_ms: Option<u64>,
) -> Result<()> {
    let changed = set_base_url.is_some() || default_category.is_some() || feedback_ms.is_some();

    if let Some(base_url) = set_base_url {
        config.base_url = base_url;
    }
    if let Some(category) = default_category {
        config.default_category = category;
    }
    if let Some(ms) = feedback_ms {
        config.feedback_ms = ms;
    }

    if changed {
        config.save()?;
        println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!("  Default Category: {}", config.default_category.to_string().cyan());
    println!("  Copied! duration: {} ms", config.feedback_ms);
    println!(
        "  Clipboard: {}",
        SystemClipboard::detect().tool_name().map_or("Not available".red(), |t| t.green())
    );

    // Test connection
    let client = PromptDeckClient::new(&config.base_url);
    print!("  Server: ");
    match client.health().await {
        Ok(true) => println!("{} ({})", "OK".green(), client.base_url()),
        _ => println!("{} ({})", "Unreachable".red(), client.base_url()),
    }

    Ok(())
}
