mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use fsroutes::{Config, RoutesOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fsroutes")]
#[command(version, about = "Compile file-system route conventions into a route config", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./fsroutes.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Application directory, overrides `routing.app_dir`
    #[arg(long, global = true)]
    app_dir: Option<PathBuf>,

    /// Routes directory relative to the app directory, overrides `routing.routes_dir`
    #[arg(long, global = true)]
    routes_dir: Option<String>,

    /// Extra glob of route files to ignore (repeatable)
    #[arg(long = "ignore", global = true)]
    ignore: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flat route manifest as JSON
    Manifest,

    /// Print the nested route config as JSON
    Routes,

    /// Validate the route tree and print a summary
    Check,
}

impl GlobalArgs {
    /// Loads the config file and applies command line overrides
    fn routes_options(&self) -> Result<RoutesOptions> {
        let config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?,
            None => Config::load_default().context("Failed to load fsroutes.toml")?,
        };

        let mut options = config.routes_options();
        if let Some(app_dir) = &self.app_dir {
            options.app_dir = app_dir.clone();
        }
        if let Some(routes_dir) = &self.routes_dir {
            options.routes_dir = routes_dir.clone();
        }
        options.ignored_route_files.extend(self.ignore.iter().cloned());

        Ok(options)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let options = cli.global.routes_options()?;
    tracing::debug!(?options, "resolved options");

    // Execute command
    match cli.command {
        Commands::Manifest => commands::manifest::execute(&options)?,
        Commands::Routes => commands::routes::execute(&options)?,
        Commands::Check => commands::check::execute(&options)?,
    }

    Ok(())
}
