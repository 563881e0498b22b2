use std::time::Duration;

const DEFAULT_SEARCH_DELAY_MS: u64 = 500;
const DEFAULT_CREATE_DELAY_MS: u64 = 2000;

/// Simulated latencies standing in for a remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub search_delay: Duration,
    pub create_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
            create_delay: Duration::from_millis(DEFAULT_CREATE_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `PLANUP_SEARCH_DELAY_MS` / `PLANUP_CREATE_DELAY_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn instant() -> Self {
        Self {
            search_delay: Duration::ZERO,
            create_delay: Duration::ZERO,
        }
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read_ms = |key: &str, fallback: Duration| match lookup(key) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!("Ignoring {key}={raw}: not a millisecond count");
                    fallback
                }
            },
            None => fallback,
        };

        Self {
            search_delay: read_ms("PLANUP_SEARCH_DELAY_MS", defaults.search_delay),
            create_delay: read_ms("PLANUP_CREATE_DELAY_MS", defaults.create_delay),
        }
    }
}
