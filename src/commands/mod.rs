//! CLI command implementations.
//!
//! Each command resolves its [`Config`], wires the real services together
//! and hands over to the application layer.

pub mod config;
mod install;
mod paths;

pub use config::{Config, ConfigOptions};
pub use install::install;
pub use paths::paths;
