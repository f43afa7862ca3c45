//! Option help command

use colored::Colorize;
use style_core::registry;

use crate::error::Result;

/// Run the option-help command
pub fn run_option_help(name: &str) -> Result<()> {
    let spec = registry::lookup(name)?;

    println!("{}", spec.name.bold());
    println!("  {} {}", "Kind:".dimmed(), spec.kind());
    println!("  {} {}", "Default:".dimmed(), spec.default.to_value());
    println!();
    println!("  {}", spec.help);

    Ok(())
}
