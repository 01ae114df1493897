//! CLI command implementations.

mod config;
mod embed;
mod serve;

pub use config::run_config;
pub use embed::run_embed;
pub use serve::run_serve;
