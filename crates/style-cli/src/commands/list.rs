//! List commands for styles and options

use colored::Colorize;
use style_core::{StyleCatalog, StyleResolver};

use crate::error::Result;

/// Run the list-styles command
pub fn run_list_styles() -> Result<()> {
    let catalog = StyleCatalog::builtin();
    let default = catalog.default_style();

    println!("{}", "Available Styles".bold());
    println!();
    for name in catalog.names() {
        let config = catalog.lookup(name)?;
        let changed = config.diff(&default).len();
        if name == catalog.default_name() {
            println!("  {:<10} {}", name.green(), "(default)".dimmed());
        } else {
            println!(
                "  {:<10} {}",
                name.green(),
                format!("({changed} option(s) differ from {})", catalog.default_name()).dimmed()
            );
        }
    }
    println!();
    println!(
        "{} {} styles available. Use {} to inspect one.",
        "Total:".dimmed(),
        catalog.len(),
        "pystyle resolve --style <name>".cyan()
    );

    Ok(())
}

/// Run the list-options command
pub fn run_list_options(style: Option<&str>) -> Result<()> {
    let config = StyleResolver::new().resolve(style)?;

    println!("{}", "Style Options".bold());
    println!();
    for (name, value) in config.iter() {
        let kind = name.spec().kind();
        println!("  {name} {} = {value}", format!("({kind})").dimmed());
    }
    println!();
    println!("{} {} options.", "Total:".dimmed(), config.len());

    Ok(())
}
