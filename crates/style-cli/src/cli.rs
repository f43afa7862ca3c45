//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pystyle - Resolve Python formatter style configurations
#[derive(Parser, Debug)]
#[command(name = "pystyle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the user's global `style` file
    #[arg(long, global = true, env = "PYSTYLE_GLOBAL_CONFIG_DIR", hide = true)]
    pub global_config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a style and print every option
    ///
    /// Without --style the style is discovered from the directory:
    /// .style.yapf, setup.cfg [yapf], pyproject.toml [tool.yapf], walking
    /// up to the filesystem root, then the global style file.
    ///
    /// Examples:
    ///   pystyle resolve                          # Discover from current directory
    ///   pystyle resolve --style google           # Built-in style
    ///   pystyle resolve --style path/.style.yapf # Style file
    ///   pystyle resolve --style "{based_on_style: google, indent_width: 4}"
    Resolve {
        /// Style name, style file path or inline style text
        #[arg(short, long, env = "PYSTYLE_STYLE")]
        style: Option<String>,

        /// Directory to discover the style from (default: current directory).
        /// Ignored when a style is given.
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List built-in styles
    ListStyles,

    /// List every option with its kind and value
    ListOptions {
        /// Style to take values from (default: the default style)
        #[arg(short, long)]
        style: Option<String>,
    },

    /// Show the help text for one option
    OptionHelp {
        /// Option name (case-insensitive)
        name: String,
    },
}
