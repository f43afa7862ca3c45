//! Command implementations for style-cli

pub mod help;
pub mod list;
pub mod resolve;

pub use help::run_option_help;
pub use list::{run_list_options, run_list_styles};
pub use resolve::run_resolve;
