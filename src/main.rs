//! Bookmark service entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start the server (default command)
//! bookmarks
//! bookmarks serve
//!
//! # Verbose logging
//! bookmarks --debug
//!
//! # Print version
//! bookmarks version
//!
//! # Man page
//! bookmarks man | man -l -
//! ```

use anyhow::Result;
use bookmarks::config::{self, Config};
use bookmarks::server;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Single-user URL bookmarking service.
#[derive(Parser)]
#[command(name = "bookmarks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print the version and exit
    Version,

    /// Print the man page in roff format
    Man,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Version => {
            println!("bookmarks {}", clap::crate_version!());
            Ok(())
        }
        Commands::Man => {
            render_man(&mut std::io::stdout().lock())?;
            Ok(())
        }
        Commands::Serve => {
            let config = config::load_from_env()?;
            init_tracing(&config, cli.debug);
            config.print_summary();
            server::run(config).await
        }
    }
}

fn render_man(out: &mut impl Write) -> std::io::Result<()> {
    clap_mangen::Man::new(Cli::command()).render(out)
}

fn init_tracing(config: &Config, debug: bool) {
    let level = if debug { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
