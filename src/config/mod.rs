//! Configuration loading.
//!
//! Settings come from a TOML file under the user's config directory. A
//! missing file means defaults; a present file must parse and validate.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
