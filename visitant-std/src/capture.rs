//! Collects `tracing` events emitted on the current thread.

use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Metadata, Subscriber, span};

/// One event seen by [`events`].
#[derive(Debug, Clone)]
pub(crate) struct Captured {
    pub(crate) level: Level,
    pub(crate) fields: Vec<&'static str>,
}

impl Captured {
    pub(crate) fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| *field == name)
    }
}

struct Collector {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl Subscriber for Collector {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let metadata = event.metadata();
        let captured = Captured {
            level: *metadata.level(),
            fields: metadata.fields().iter().map(|field| field.name()).collect(),
        };
        self.events.lock().unwrap().push(captured);
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

/// Runs `f` with a collecting subscriber and returns every event it emitted.
pub(crate) fn events(f: impl FnOnce()) -> Vec<Captured> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = Collector {
        events: Arc::clone(&events),
    };
    tracing::subscriber::with_default(collector, f);
    let captured = events.lock().unwrap();
    captured.clone()
}
