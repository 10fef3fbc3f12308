//! Flattened log events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One log event, ready for a console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "storefront_core::reviews")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Structured fields attached to the event
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,

    /// Enclosing span names, outermost first, joined with " > "
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogLine {
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: Map::new(),
            span: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == "error"
    }

    pub fn is_warning(&self) -> bool {
        self.level == "warn"
    }

    /// `target: [span] message key=value ...`
    pub fn render(&self) -> String {
        let mut out = format!("{}: ", self.target);
        if let Some(span) = &self.span {
            out.push('[');
            out.push_str(span);
            out.push_str("] ");
        }
        out.push_str(&self.msg);
        for (key, value) in &self.fields {
            match value {
                Value::String(s) => out.push_str(&format!(" {key}={s}")),
                other => out.push_str(&format!(" {key}={other}")),
            }
        }
        out
    }
}
