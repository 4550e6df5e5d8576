//! A tracing layer that records events for assertions.

use std::{
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, layer::Context};

/// An event captured by [`RecordingLayer`].
#[derive(Debug, Clone)]
pub(crate) struct RecordedEvent {
    pub(crate) level: Level,
    pub(crate) target: String,
    pub(crate) message: String,
    pub(crate) fields: Vec<(String, String)>,
}

impl RecordedEvent {
    /// Returns the formatted value of the field `name`.
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

/// Records every event it sees. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingLayer {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingLayer {
    pub(crate) fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().expect("recording lock poisoned").clone()
    }

    /// Returns the recorded events with the given message.
    pub(crate) fn find(&self, message: &str) -> Vec<RecordedEvent> {
        self.events().into_iter().filter(|event| event.message == message).collect()
    }
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.events.lock().expect("recording lock poisoned").push(RecordedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}
