use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;
mod config;
mod repl;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG wins; the config level only applies when it is unset
    if std::env::var_os("RUST_LOG").is_none() {
        if let Some(level) = log_level {
            builder.parse_filters(level);
        }
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match &cli.command {
        None => {
            println!("{}", "Welcome to the taskr to-do list manager!".cyan());
            repl::run_top_menu(&mut input, &mut output, config)
        }
        Some(Commands::Open { file }) => {
            let path = config.resolve_list_path(file);
            info!("Opening list: {}", path.display());
            repl::open_list(&mut input, &mut output, config, &path)
        }
        Some(Commands::Create { file }) => {
            let path = config.resolve_list_path(file);
            info!("Creating list: {}", path.display());
            repl::create_list(&mut input, &mut output, config, &path)
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging with the configured level
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
