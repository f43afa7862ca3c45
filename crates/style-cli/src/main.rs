//! pystyle CLI
//!
//! Resolves formatter style configurations from built-in names, style files
//! and inline style text.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.global_config_dir),
        None => {
            println!("{} Python formatter style resolver", "pystyle".green().bold());
            println!();
            println!("Run {} for available commands.", "pystyle --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, global_config_dir: Option<std::path::PathBuf>) -> Result<()> {
    match cmd {
        Commands::Resolve { style, dir, json } => {
            commands::run_resolve(style.as_deref(), dir, global_config_dir, json)
        }
        Commands::ListStyles => commands::run_list_styles(),
        Commands::ListOptions { style } => commands::run_list_options(style.as_deref()),
        Commands::OptionHelp { name } => commands::run_option_help(&name),
    }
}
