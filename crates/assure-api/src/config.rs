//! Environment-driven configuration

use std::time::Duration;

use assure_core::AuthProviderKind;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the mock server binds to.
    pub bind_addr: String,
    /// How long a new scan stays in `running` before completing.
    pub completion_delay: Duration,
    /// Artificial latency added to the scan list route.
    pub list_delay: Duration,
    /// Seed the demo scan records at startup.
    pub seed_demo_data: bool,
    /// Which auth provider to construct.
    pub auth_provider: AuthProviderKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("ASSURE_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            completion_delay: millis_or(env_value("ASSURE_COMPLETION_DELAY_MS"), 10_000),
            list_delay: millis_or(env_value("ASSURE_LIST_DELAY_MS"), 500),
            seed_demo_data: flag_or(env_value("ASSURE_SEED_DEMO_DATA"), true),
            auth_provider: env_value("ASSURE_AUTH_PROVIDER")
                .map(|v| AuthProviderKind::from_env_value(&v))
                .unwrap_or_default(),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Parse a millisecond value, falling back on absent or garbage input.
fn millis_or(value: Option<String>, default_ms: u64) -> Duration {
    let ms = value.and_then(|v| v.parse().ok()).unwrap_or(default_ms);
    Duration::from_millis(ms)
}

/// Parse a boolean flag; only `false`/`0` disable it.
fn flag_or(value: Option<String>, default: bool) -> bool {
    match value {
        Some(v) => v != "false" && v != "0",
        None => default,
    }
}
