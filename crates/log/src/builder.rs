//! Logger builder

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use std::io::IsTerminal;

use crate::config::{Config, DisplayConfig, Format, Writer};
use crate::error::LogError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Applies the display options shared by every format, then boxes the layer.
macro_rules! finish_layer {
    ($layer:expr, $display:expr, $ansi:expr) => {{
        let layer = $layer
            .with_ansi($ansi)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids);
        if $display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Resolves the color setting against the writer the logger will use.
fn ansi_enabled(display: &DisplayConfig, writer: Writer) -> bool {
    display.colors.unwrap_or_else(|| match writer {
        Writer::Stderr => std::io::stderr().is_terminal(),
        Writer::Stdout => std::io::stdout().is_terminal(),
    })
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// Dropping it exits the span; the installed subscriber stays in place for
/// the rest of the process.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the logger as the global subscriber
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the level directives do not parse and
    /// [`LogError::AlreadyInitialized`] if a global subscriber exists.
    pub fn build(self) -> Result<LoggerGuard, LogError> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let writer = match self.config.writer {
            Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
            Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
        };

        let display = &self.config.display;
        let ansi = ansi_enabled(display, self.config.writer);
        let fmt_layer: BoxedLayer = match self.config.format {
            Format::Pretty => finish_layer!(
                tracing_subscriber::fmt::layer().pretty().with_writer(writer),
                display,
                ansi
            ),
            Format::Compact => finish_layer!(
                tracing_subscriber::fmt::layer().compact().with_writer(writer),
                display,
                ansi
            ),
            Format::Json => finish_layer!(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(display.span_list)
                    .flatten_event(display.flatten),
                display,
                ansi
            ),
        };

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service = %service).entered());

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}
