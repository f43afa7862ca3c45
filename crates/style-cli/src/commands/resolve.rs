//! Resolve command

use colored::Colorize;
use std::path::PathBuf;
use style_core::{StyleCatalog, StyleConfig, StyleDiscovery, StyleResolver, resolve_found};

use crate::error::{CliError, Result};

/// Run the resolve command
pub fn run_resolve(
    style: Option<&str>,
    dir: Option<PathBuf>,
    global_config_dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let (origin, config) = match style {
        Some(style) => (style.to_string(), StyleResolver::new().resolve(Some(style))?),
        None => {
            let dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            if !dir.is_dir() {
                return Err(CliError::user(format!(
                    "Not a directory: {}",
                    dir.display()
                )));
            }

            let discovery = match global_config_dir {
                Some(global) => StyleDiscovery::with_global_config_dir(global),
                None => StyleDiscovery::new(),
            };
            let found = discovery.find_for_dir(&dir);
            let origin = match &found {
                Some(path) => path.display().to_string(),
                None => StyleCatalog::builtin().default_name().to_string(),
            };
            (origin, resolve_found(found.as_deref())?)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_config(&origin, &config);
    }
    Ok(())
}

/// Print options one per line, marking those that differ from the default
/// style.
fn print_config(origin: &str, config: &StyleConfig) {
    let catalog = StyleCatalog::builtin();
    let default = catalog.default_style();
    let changed = config.diff(&default);

    println!("{} {}", "Style:".bold(), origin.cyan());
    println!();
    for (name, value) in config.iter() {
        let marker = if changed.contains(&name) {
            "*".yellow().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("{marker} {name} = {value}");
    }
    println!();
    println!(
        "{} {} option(s) differ from {}.",
        "Changed:".dimmed(),
        changed.len(),
        catalog.default_name()
    );
}
