//! Tracing layer that forwards log events to a channel for persistence.
//!
//! The layer does no I/O itself: events are converted to [`LogRecord`]s and pushed on an
//! unbounded channel. Whoever owns the receiving half (the service crate) writes them to the
//! `logs` table once a database connection exists.

use std::fmt;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, Layer};

/// Events from these targets are never persisted; the writer itself goes through them.
const SKIPPED_TARGETS: [&str; 2] = ["sea_orm", "sqlx"];

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

pub type LogReceiver = mpsc::UnboundedReceiver<LogRecord>;

pub struct DbLogLayer {
    tx: mpsc::UnboundedSender<LogRecord>,
    min_level: Level,
}

impl DbLogLayer {
    pub fn new(min_level: Level) -> (Self, LogReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, min_level }, rx)
    }

    /// Parse a level name such as `"warn"`; unknown names fall back to `WARN`.
    pub fn with_level_name(name: &str) -> (Self, LogReceiver) {
        let level = name.parse::<Level>().unwrap_or(Level::WARN);
        Self::new(level)
    }
}

impl<S: Subscriber> Layer<S> for DbLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // more verbose levels compare greater
        if *meta.level() > self.min_level {
            return;
        }
        if SKIPPED_TARGETS.iter().any(|t| meta.target().starts_with(t)) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let record = LogRecord {
            level: meta.level().to_string(),
            message: visitor.finish(),
            timestamp: Utc::now(),
        };
        // receiver dropped means persistence is shut down; nothing to do
        let _ = self.tx.send(record);
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {}", self.message, fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
