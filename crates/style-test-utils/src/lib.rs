//! Shared test utilities for the pystyle workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`](project::TestProject) builder for temporary
//!   Python project trees holding style files

pub mod project;

pub use project::TestProject;
