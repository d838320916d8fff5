use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides the configured User-Agent
pub const USER_AGENT_ENV: &str = "HEADING_ANALYZER_USER_AGENT";

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Widest a text cell may get in the summary table
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,

    /// How long a copied tree is served on X11/Wayland before exiting
    #[serde(default = "default_clipboard_hold_secs")]
    pub clipboard_hold_secs: u64,
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    10
}

/// Default value for user_agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36"
        .to_string()
}

/// Default value for max_cell_width
fn default_max_cell_width() -> usize {
    48
}

/// Default value for clipboard_hold_secs
fn default_clipboard_hold_secs() -> u64 {
    5
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_cell_width: default_max_cell_width(),
            clipboard_hold_secs: default_clipboard_hold_secs(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies overrides from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(user_agent) = std::env::var(USER_AGENT_ENV) {
            if !user_agent.trim().is_empty() {
                self.user_agent = user_agent;
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_secs(self.clipboard_hold_secs)
    }
}
