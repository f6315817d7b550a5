use crate::render::render_card;
use crate::{DisplayStrings, PreviewRecord};
use std::fmt::Display;
use tracing::{error, info};

/// Logs the rendered card for a settled record, for operator visibility.
pub fn log_preview_card(record: &PreviewRecord, url: &str) {
    info!(
        url = %url,
        "\n{}",
        render_card(record, &DisplayStrings::default(), true)
    );
}

pub fn log_error_card<E: Display + std::error::Error>(url: &str, error: &E) {
    let mut error_details = error.to_string();
    if let Some(source) = error.source() {
        error_details = format!("{error_details} (caused by: {source})");
    }

    error!(url = %url, error = %error_details, "Preview degraded to fallback");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PreviewError;

    #[test]
    fn test_operator_helpers_accept_any_record() {
        let record = PreviewRecord {
            title: "Example".into(),
            link: "https://example.com".into(),
            ..Default::default()
        };
        log_preview_card(&record, "https://example.com");
        log_preview_card(&PreviewRecord::default(), "");

        let error = PreviewError::HttpError(500);
        log_error_card("https://example.com", &error);
        error.log();
    }
}

#[cfg(feature = "logging")]
pub use subscriber::{setup_logging, LogConfig, LogLevelGuard};

#[cfg(feature = "logging")]
mod subscriber {
    use std::path::PathBuf;
    use tracing::debug;
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{
        fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    };

    #[derive(Debug)]
    pub struct LogConfig {
        pub log_dir: PathBuf,
        pub log_level: String,
        pub console_output: bool,
        pub file_output: bool,
    }

    impl Default for LogConfig {
        fn default() -> Self {
            Self {
                log_dir: "logs".into(),
                log_level: "info".into(),
                console_output: true,
                file_output: true,
            }
        }
    }

    pub fn setup_logging(config: LogConfig) {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let mut layers = Vec::new();

        if config.console_output {
            let console_layer = subscriber_fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .pretty();
            layers.push(console_layer.boxed());
        }

        if config.file_output {
            std::fs::create_dir_all(&config.log_dir).expect("Failed to create log directory");

            let file_appender =
                RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "link-preview-card.log");

            let file_layer = subscriber_fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_writer(file_appender);

            layers.push(file_layer.boxed());
        }

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layers)
            .try_init()
            .expect("Failed to set global default subscriber");

        debug!("Logging system initialized with config: {:?}", config);
    }

    pub struct LogLevelGuard {
        _guard: tracing::dispatcher::DefaultGuard,
    }

    impl LogLevelGuard {
        pub fn set_level(level: &str) -> Self {
            let filter = EnvFilter::new(level);
            let subscriber = tracing_subscriber::registry()
                .with(subscriber_fmt::layer())
                .with(filter);

            LogLevelGuard {
                _guard: tracing::subscriber::set_default(subscriber),
            }
        }
    }
}
