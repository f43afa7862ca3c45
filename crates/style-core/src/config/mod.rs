//! Resolved style configuration and the resolver that produces it

mod resolver;
mod style;

pub use resolver::{StyleResolver, apply_overrides, resolve};
pub use style::StyleConfig;
