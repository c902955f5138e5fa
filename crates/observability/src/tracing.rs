//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "BEANBAGS_LOG_FORMAT";

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive, e.g. `info` or `beanbags_inventory=debug`.
    pub filter: String,
    /// JSON lines when `true`, human-readable text otherwise.
    pub json: bool,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: true,
            with_target: false,
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and `BEANBAGS_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        match format.as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => config.json = true,
            Some(f) if f.eq_ignore_ascii_case("pretty") || f.eq_ignore_ascii_case("text") => {
                config.json = false
            }
            _ => {}
        }
        config
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TracingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_json_at_info() {
        let config = TracingConfig::from_vars(None, None);
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
        assert!(config.json);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = TracingConfig::from_vars(
            Some("beanbags_inventory=debug".to_string()),
            Some("Pretty".to_string()),
        );
        assert_eq!(config.filter, "beanbags_inventory=debug");
        assert!(!config.json);
    }

    #[test]
    fn unknown_format_and_blank_filter_fall_back() {
        let config = TracingConfig::from_vars(Some("  ".to_string()), Some("xml".to_string()));
        assert_eq!(config, TracingConfig::default());
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = TracingConfig::default()
            .with_filter("warn")
            .with_json(false)
            .with_target(true);
        assert_eq!(config.filter, "warn");
        assert!(!config.json);
        assert!(config.with_target);
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = TracingConfig::default().with_filter("not a [valid filter");
        init(&config);
        init(&TracingConfig::default().with_json(false));
        tracing::info!("still running");
    }
}
