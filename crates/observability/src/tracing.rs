use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_VAR: &str = "PLAYGROUND_LOG_FORMAT";

/// Output format of log lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Single-line human-readable text.
    Compact,
}

impl LogFormat {
    /// Unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "compact" | "text" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Directive used when `RUST_LOG` is unset or unparsable.
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// An unknown format name falls back to JSON; no subscriber exists yet to
    /// report it.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = lookup(LOG_FORMAT_VAR)
            .and_then(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Self {
            format,
            ..Self::default()
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Install the global subscriber described by `config`.
///
/// A subscriber installed earlier (by a previous call or a test harness) wins;
/// later calls are no-ops.
pub fn init(config: &TracingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" text "), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn lookup_selects_format_and_falls_back_to_json() {
        let compact = TracingConfig::from_lookup(|var| {
            (var == LOG_FORMAT_VAR).then(|| "compact".to_string())
        });
        assert_eq!(compact.format, LogFormat::Compact);
        assert_eq!(compact.default_filter, "info");

        let unknown = TracingConfig::from_lookup(|_| Some("xml".to_string()));
        assert_eq!(unknown.format, LogFormat::Json);
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init(&TracingConfig::default());
        init(&TracingConfig {
            default_filter: "warn".to_string(),
            format: LogFormat::Compact,
        });
    }
}
