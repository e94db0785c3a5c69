use std::sync::Once;

/// `env_filter` uses `env_logger` directive syntax, e.g.
/// `"mandelbrot_viewer=debug,wgpu_core=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Raises the default level to `debug` when `verbose` is set and no
    /// explicit filter was given.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose && self.env_filter.is_none() {
            self.env_filter = Some("debug".into());
        }
        self
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_sets_debug_filter() {
        let config = LoggingConfig::default().verbose(true);

        assert_eq!(config.env_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn verbose_keeps_explicit_filter() {
        let config = LoggingConfig {
            env_filter: Some("warn".into()),
            ..LoggingConfig::default()
        }
        .verbose(true);

        assert_eq!(config.env_filter.as_deref(), Some("warn"));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
