mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compose, init, inspect, ComposeArgs, InitArgs, InspectArgs};
use tracing_subscriber::EnvFilter;

/// Paperflow CLI - merge, reorder, rotate and trim PDF pages
#[derive(Parser, Debug)]
#[command(name = "paperflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a paperflow.config.json
    Init(InitArgs),

    /// Load PDFs and list the resulting workspace pages
    Inspect(InspectArgs),

    /// Load PDFs, apply edits and write one output PDF
    Compose(ComposeArgs),
}

fn init_tracing(verbose: u8) {
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
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match std::env::current_dir() {
        Ok(dir) => {
            let cwd = dir.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Inspect(args) => inspect(args, &cwd),
                Command::Compose(args) => compose(args, &cwd).await,
            }
        }
        Err(e) => Err(anyhow::anyhow!("Cannot get current directory: {}", e)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
