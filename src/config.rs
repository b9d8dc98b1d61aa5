use crate::command::InvocationPrefix;
use std::time::Duration;

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

pub const DELAY_VAR: &str = "INTERACTIVE_CLI_DELAY_MS";
pub const PREFIX_VAR: &str = "INTERACTIVE_CLI_PREFIX";
pub const PREFIX_TOKENS_VAR: &str = "INTERACTIVE_CLI_PREFIX_TOKENS";

/// Settings a [`Session`](crate::Session) starts from.
///
/// `prompt` is only the initial value; the session owns and mutates its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub version: String,
    /// Pause after each character printed by the typewriter.
    pub delay: Duration,
    pub invocation: InvocationPrefix,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            delay: DEFAULT_DELAY,
            invocation: InvocationPrefix::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns. Malformed values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DELAY_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.delay = Duration::from_millis(ms),
                Err(e) => tracing::warn!("ignoring {DELAY_VAR}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(PREFIX_VAR) {
            match InvocationPrefix::new(raw.trim()) {
                Ok(prefix) => config.invocation = prefix,
                Err(e) => tracing::warn!("ignoring {PREFIX_VAR}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(PREFIX_TOKENS_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(skip) => config.invocation = config.invocation.with_skip(skip),
                Err(e) => tracing::warn!("ignoring {PREFIX_TOKENS_VAR}={raw:?}: {e}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.delay, Duration::from_millis(100));
        assert_eq!(config.invocation.text(), "interactive_cli");
        assert_eq!(config.invocation.skip(), 1);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (DELAY_VAR, "0"),
            (PREFIX_VAR, "python script.py"),
        ]));
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.invocation.text(), "python script.py");
        assert_eq!(config.invocation.skip(), 2);
    }

    #[test]
    fn test_explicit_prefix_tokens() {
        let config = Config::from_lookup(lookup_from(&[
            (PREFIX_VAR, "./run.sh"),
            (PREFIX_TOKENS_VAR, "2"),
        ]));
        assert_eq!(config.invocation.skip(), 2);
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (DELAY_VAR, "fast"),
            (PREFIX_VAR, "\"broken"),
            (PREFIX_TOKENS_VAR, "-1"),
        ]));
        assert_eq!(config, Config::default());
    }
}
