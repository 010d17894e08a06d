use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pagedots_core::{AnimationStyle, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "pagedots")]
#[command(author, version, about = "Animated page indicators in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/pagedots/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI playground
    Run,
    /// Run the indicator headless and print one JSON frame per line
    Trace {
        /// Animation style (none, color, scale, worm, slide)
        #[arg(short, long)]
        style: Option<AnimationStyle>,
        /// Number of indicators
        #[arg(short = 'n', long)]
        count: Option<i64>,
        /// Indicator selected before the transition
        #[arg(long, default_value_t = 0)]
        from: i64,
        /// Indicator selected by the transition
        #[arg(long, default_value_t = 1)]
        to: i64,
        /// Drive the transition from a simulated page swipe
        #[arg(long)]
        swipe: bool,
        /// Duration of the timed transition in milliseconds
        #[arg(short, long)]
        duration_ms: Option<u64>,
        /// Frames per second to sample
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    // Load configuration
    let config = Arc::new(AppConfig::load_from(&config_path)?);

    // Initialize logging
    commands::init_logging(&config)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Trace {
            style,
            count,
            from,
            to,
            swipe,
            duration_ms,
            fps,
        }) => {
            let options = commands::trace::TraceOptions {
                style,
                count,
                from,
                to,
                swipe,
                duration_ms,
                fps,
            };
            commands::trace::run(&config, &options)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}
