use serde::{Deserialize, Serialize};

/// Display configuration for terminal output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Colored terminal output (also disabled by `NO_COLOR`)
    #[serde(default = "default_use_color")]
    pub use_color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_color: default_use_color(),
        }
    }
}

fn default_use_color() -> bool {
    true
}

/// Interactive session configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TuiConfig {
    /// Input poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl TuiConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_rate_ms == 0 {
            Err("tui.tick_rate_ms must be greater than 0".to_string())
        } else {
            Ok(())
        }
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}
