#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::{Arc, OnceLock};

/// Runtime configuration shared across the crate.
pub struct ConfigState {
    /// Host address the server binds to.
    host:           String,
    /// Port the server binds to.
    port:           u16,
    /// Player id used when a request does not name one.
    default_player: i64,
}

impl ConfigState {
    /// Construct a new configuration instance by reading environment values.
    fn new() -> Self {
        let host = std::env::var("KODY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = read_u16("KODY_PORT", 5000);
        let default_player = read_i64("KODY_PLAYER_ID", 1);

        Self {
            host,
            port,
            default_player,
        }
    }

    /// Returns the host address the server binds to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port the server binds to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the player id used when a request does not name one.
    pub fn default_player(&self) -> i64 {
        self.default_player
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Arc<ConfigState>> = OnceLock::new();

/// Returns the active configuration, initializing it on demand.
pub fn get() -> ConfigHandle {
    ConfigHandle(Arc::clone(
        CONFIG_SLOT.get_or_init(|| Arc::new(ConfigState::new())),
    ))
}

/// Parses an environment variable into a `u16`, falling back to `default`
/// when parsing fails or the variable is missing.
fn read_u16(env: &str, default: u16) -> u16 {
    std::env::var(env)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

/// Parses an environment variable into an `i64`, falling back to `default`
/// when parsing fails or the variable is missing.
fn read_i64(env: &str, default: i64) -> i64 {
    std::env::var(env)
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}
