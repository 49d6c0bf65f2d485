use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between ticks in milliseconds. Swipe-back gestures complete
    /// on the tick after they start (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Simulated latency of the mock data repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Welcome message delay (default: 1000).
    #[serde(default = "default_home_delay_ms")]
    pub home_delay_ms: u64,
    /// User profile delay (default: 1500).
    #[serde(default = "default_profile_delay_ms")]
    pub profile_delay_ms: u64,
    /// Settings delay (default: 500).
    #[serde(default = "default_settings_delay_ms")]
    pub settings_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Skip the sign-in flow on launch.
    #[serde(default)]
    pub start_authenticated: bool,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_home_delay_ms() -> u64 {
    1000
}

fn default_profile_delay_ms() -> u64 {
    1500
}

fn default_settings_delay_ms() -> u64 {
    500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            home_delay_ms: default_home_delay_ms(),
            profile_delay_ms: default_profile_delay_ms(),
            settings_delay_ms: default_settings_delay_ms(),
        }
    }
}
