use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the roster lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection endpoint of the student resource.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a toast stays visible, in seconds (default: 4).
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
    /// Toasts shown at once; older ones are dropped (default: 3).
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/alunos/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_seconds() -> u64 {
    4
}

fn default_max_toasts() -> usize {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_seconds: default_toast_seconds(),
            max_toasts: default_max_toasts(),
        }
    }
}
