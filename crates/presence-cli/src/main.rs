//! Presence CLI - Custom status from the terminal
//!
//! Runs slash commands against a local status file, the same way a chat
//! server would dispatch them.

mod config;
mod store;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use presence::{CommandContext, CommandRegistry, ResponseType, StatusService, CUSTOM_STATUS_TRIGGER};
use store::FileStatusStore;

#[derive(Parser)]
#[command(name = "presence")]
#[command(about = "Presence CLI - set, clear and restore your custom status", long_about = None)]
#[command(version)]
struct Cli {
    /// User to act as (overrides PRESENCE_USER and the config file)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a raw slash command, e.g. "/status away back at 3"
    Run {
        /// Full command line including the leading '/'
        command: String,
    },

    /// Shorthand for "/status <message>"
    Set {
        /// Status arguments: clear, prev, a preset, or [:emoji:] text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Show the current status
    Show,

    /// List recently used statuses
    Recent,

    /// List registered commands and their autocomplete entries
    #[command(name = "commands")]
    ListCommands {
        /// Only show entries starting with this text
        #[arg(short, long, default_value = "")]
        prefix: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the default user
    SetUser {
        /// User ID
        user_id: String,
    },
    /// Toggle the custom status switches
    Features {
        /// Server-wide feature flag
        #[arg(long)]
        flag: Option<bool>,
        /// Team setting
        #[arg(long)]
        team_setting: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("presence=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run { command } => cmd_run(&config, cli.user, &command).await,
        Commands::Set { message } => {
            let command = format!("/{} {}", CUSTOM_STATUS_TRIGGER, message.join(" "));
            cmd_run(&config, cli.user, &command).await
        }
        Commands::Show => cmd_show(&config, cli.user).await,
        Commands::Recent => cmd_recent(&config, cli.user).await,
        Commands::ListCommands { prefix } => cmd_commands(&config, &prefix).await,
        Commands::Config { action } => cmd_config(config, action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn open_store(config: &Config) -> Result<Arc<FileStatusStore>> {
    let path = config.store_path()?;
    let store = FileStatusStore::open(&path)
        .await
        .with_context(|| format!("Failed to open status store {:?}", path))?;
    Ok(Arc::new(store))
}

fn require_user(config: &Config, flag: Option<String>) -> Result<String> {
    match config.resolve_user(flag) {
        Some(user) => Ok(user),
        None => bail!(
            "No user configured. Pass --user, set {} or run: presence config set-user <id>",
            config::USER_ENV
        ),
    }
}

async fn cmd_run(config: &Config, user: Option<String>, command: &str) -> Result<()> {
    let user_id = require_user(config, user)?;
    let store = open_store(config).await?;
    let registry = CommandRegistry::with_builtin(store, config.features);

    let response = registry
        .execute(&CommandContext::new(user_id), command)
        .await
        .context("Command failed")?;

    match response {
        Some(response) => {
            let marker = match response.response_type {
                ResponseType::Ephemeral => "(only visible to you)".dimmed().to_string(),
                ResponseType::InChannel => String::new(),
            };
            println!("{} {}", response.text, marker);
        }
        None => {
            println!("{}", "Custom statuses are disabled.".yellow());
        }
    }

    Ok(())
}

async fn cmd_show(config: &Config, user: Option<String>) -> Result<()> {
    let user_id = require_user(config, user)?;
    let store = open_store(config).await?;
    let history = store.history(&user_id).await;

    match history.current {
        Some(status) => {
            let since = history
                .updated_at
                .map(|t| {
                    let local = t.with_timezone(&chrono::Local);
                    format!(" (since {})", local.format("%Y-%m-%d %H:%M"))
                })
                .unwrap_or_default();
            println!("{} {}{}", status.display_emoji().cyan(), status.text, since.dimmed());
        }
        None => println!("{}", "No status set.".dimmed()),
    }

    Ok(())
}

async fn cmd_recent(config: &Config, user: Option<String>) -> Result<()> {
    let user_id = require_user(config, user)?;
    let store = open_store(config).await?;
    let recent = store
        .get_recent_custom_statuses(&user_id)
        .await
        .context("Failed to load recent statuses")?;

    if recent.is_empty() {
        println!("No recent statuses.");
        return Ok(());
    }

    println!("{}", "Recent statuses:".bold());
    for (i, status) in recent.iter().enumerate() {
        println!("  {}. {} {}", i + 1, status.display_emoji().cyan(), status.text);
    }

    Ok(())
}

async fn cmd_commands(config: &Config, prefix: &str) -> Result<()> {
    let store = open_store(config).await?;
    let registry = CommandRegistry::with_builtin(store, config.features);

    for command in registry.commands() {
        println!(
            "{} {} - {}",
            format!("/{}", command.trigger).bold(),
            command.hint.dimmed(),
            command.description
        );

        let Some(data) = &command.autocomplete_data else {
            continue;
        };
        for item in data.suggest(prefix) {
            let label = if item.item.is_empty() {
                item.hint.clone()
            } else {
                format!("{} {}", item.item, item.hint).trim_end().to_string()
            };
            println!("  {:<28} {}", label.cyan(), item.help_text.dimmed());
        }
    }

    Ok(())
}

fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action {
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Status file: {:?}", config.store_path()?);
            println!(
                "  User: {}",
                config.user_id.as_deref().unwrap_or("(not set)")
            );
            let enabled = if config.features.is_enabled() {
                "enabled".green()
            } else {
                "disabled".red()
            };
            println!(
                "  Custom statuses: {} (flag: {}, team setting: {})",
                enabled,
                config.features.custom_user_statuses,
                config.features.enable_custom_user_statuses
            );
        }

        Some(ConfigAction::SetUser { user_id }) => {
            if user_id.trim().is_empty() {
                bail!("User ID must not be empty");
            }
            config.set_user_id(user_id.clone());
            config.save()?;
            println!("{} Default user set to '{}'", "✓".green(), user_id);
        }

        Some(ConfigAction::Features { flag, team_setting }) => {
            if let Some(flag) = flag {
                config.features.custom_user_statuses = flag;
            }
            if let Some(team_setting) = team_setting {
                config.features.enable_custom_user_statuses = team_setting;
            }
            config.save()?;
            println!(
                "{} Custom statuses {}",
                "✓".green(),
                if config.features.is_enabled() { "enabled" } else { "disabled" }
            );
        }
    }

    Ok(())
}
