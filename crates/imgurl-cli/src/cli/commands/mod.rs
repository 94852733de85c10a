//! CLI command handlers, one per file.

mod actions;
mod build;
mod click;
mod config_path;
mod url;

pub use actions::run_actions;
pub use build::run_build;
pub use click::run_click;
pub use config_path::run_config_path;
pub use url::run_url;
