//! Taskdesk CLI - interactive in-memory task manager

mod menu;
mod prompt;
mod render;

use clap::{Parser, Subcommand};
use taskdesk_core::TaskManager;
use taskdesk_core::config::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::menu::Menu;
use crate::prompt::ReadlinePrompt;
use crate::render::OutputFormat;

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(author, version, about = "Interactive in-memory task manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for listings (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Interactive,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "taskdesk={level},taskdesk_core={level}",
            level = config.logging.level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An unreadable config must not block `config reset` or `config path`
    let loaded = Config::load();
    init_tracing(&loaded.as_ref().cloned().unwrap_or_default());
    if let Err(e) = &loaded {
        warn!("Using default logging settings: {:#}", e);
    }

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd_interactive(&loaded?, cli.format, cli.quiet),
        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn cmd_interactive(config: &Config, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Taskdesk {}", env!("CARGO_PKG_VERSION"));
        println!("Data is kept in memory and discarded on exit.");
    }

    let manager = TaskManager::from_config(config);
    info!(
        verify_references = config.tasks.verify_references,
        "Starting interactive session"
    );

    let prompt = ReadlinePrompt::new()?;
    let mut menu = Menu::new(manager, prompt, std::io::stdout(), config.display.clone())
        .with_format(format)
        .with_quiet(quiet);
    menu.run()
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod main_tests;
