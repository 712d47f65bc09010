//! Telemetry events - the analytics stream a playthrough emits.
//!
//! Fire-and-forget reporting data: sinks never feed back into scoring or
//! classification, and a sink that drops everything is a valid deployment.

use score_rules::TraitVector;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::ArchetypeId;

/// Events emitted over the lifetime of a playthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// One decision taken at a branch point.
    PlayerChoice {
        scene: String,
        trait_key: String,
        label: String,
    },

    /// A playthrough reached classification.
    PlaythroughComplete {
        archetype: String,
        archetype_id: ArchetypeId,
        archetype_title: String,
        distance: u32,
        total_choices: usize,
        choice_path: String,
        duration_secs: u64,
        vector: TraitVector,
    },

    /// The specific outcome, kept separate for per-archetype aggregation.
    ArchetypeResult {
        archetype: String,
        archetype_id: ArchetypeId,
        archetype_title: String,
        duration_secs: u64,
    },

    /// The player asked for another run.
    Replay,
}

impl TelemetryEvent {
    /// Reporting category for this event.
    pub fn category(&self) -> &'static str {
        match self {
            TelemetryEvent::PlayerChoice { .. } => "choice",
            TelemetryEvent::PlaythroughComplete { .. } => "game",
            TelemetryEvent::ArchetypeResult { .. } => "result",
            TelemetryEvent::Replay => "engagement",
        }
    }

    /// Wire-shaped payload for external reporting backends.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Destination for telemetry events.
pub trait TelemetrySink {
    /// Accept one event. Must not fail; reporting problems are the sink's
    /// own concern and never the playthrough's.
    fn record(&mut self, event: TelemetryEvent);
}

/// Sink that drops every event. The default when no backend is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn record(&mut self, _event: TelemetryEvent) {}
}

/// Sink that keeps events in memory, in arrival order.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// playthrough and inspect the other after the run.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<TelemetryEvent>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, in order.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl TelemetrySink for MemorySink {
    fn record(&mut self, event: TelemetryEvent) {
        self.events.borrow_mut().push(event);
    }
}
