//! Custom tracing Layer that forwards events to a console sink.
//!
//! Browsers have no stdout, so instead of `tracing_subscriber::fmt` every
//! event is flattened into a [`LogLine`] and passed to a caller-supplied
//! function.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::line::LogLine;
use crate::error::{StorefrontError, StorefrontResult};

type Sink = Arc<dyn Fn(&LogLine) + Send + Sync>;

/// A tracing Layer that hands every event to a sink function.
pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut line = LogLine::new(
            metadata.level().as_str().to_lowercase(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        line.fields = visitor.fields;

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                line.span = Some(spans.join(" > "));
            }
        }

        (self.sink)(&line);
    }
}

/// Visitor that extracts the message and fields from tracing events.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::String(value.to_string()));
    }
}

/// Builder for the global subscriber.
pub struct LoggingBuilder {
    sink: Sink,
    filter: String,
}

impl LoggingBuilder {
    pub fn new(sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            filter: "info".to_string(),
        }
    }

    /// Set the filter directive (e.g., "storefront=debug,storefront_core=info").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Build the layer alone, for manual composition.
    pub fn build_layer(&self) -> ConsoleLayer {
        ConsoleLayer {
            sink: Arc::clone(&self.sink),
        }
    }

    fn env_filter(&self) -> StorefrontResult<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .map_err(|e| StorefrontError::Config(format!("log filter {:?}: {e}", self.filter)))
    }

    /// Install as the global default subscriber.
    ///
    /// An invalid filter falls back to `info` rather than leaving the page
    /// without logs.
    pub fn init(self) -> StorefrontResult<()> {
        let filter = self.env_filter().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(filter)
            .with(self.build_layer())
            .try_init()
            .map_err(|e| StorefrontError::Config(format!("logging already initialized: {e}")))
    }
}
