//! Playthrough sessions - one run from the first scene to the archetype result.
//!
//! A session owns the accumulator, the choice log, and the current scene id
//! for exactly one run. Restarting means constructing a fresh `Playthrough`;
//! there is no shared instance to reset, so concurrent runs (tests,
//! server-side rendering) can never interfere.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use score_rules::{ChoiceLog, ChoiceRecord, Trait, TraitAccumulator, TraitVector};

use crate::catalog::ArchetypeId;
use crate::classifier::ArchetypeClassifier;
use crate::telemetry::{NullSink, TelemetryEvent, TelemetrySink};

/// Unique identifier for playthroughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaythroughId(pub Uuid);

impl PlaythroughId {
    /// Create a new random playthrough ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlaythroughId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlaythroughId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One complete run of the narrative.
///
/// The presentation driver calls [`enter_scene`](Playthrough::enter_scene)
/// when a screen begins and [`choose`](Playthrough::choose) (or the typed
/// [`choose_trait`](Playthrough::choose_trait)) once per player decision;
/// [`finish`](Playthrough::finish) consumes the session so classification
/// happens at most once per run.
pub struct Playthrough {
    id: PlaythroughId,
    accumulator: TraitAccumulator,
    log: ChoiceLog,
    current_scene: String,
    started: Instant,
    telemetry: Box<dyn TelemetrySink>,
}

impl Playthrough {
    /// Start a playthrough with no telemetry backend.
    pub fn new() -> Self {
        Self::with_telemetry(Box::new(NullSink))
    }

    /// Start a playthrough reporting to the given sink.
    pub fn with_telemetry(telemetry: Box<dyn TelemetrySink>) -> Self {
        Self {
            id: PlaythroughId::new(),
            accumulator: TraitAccumulator::new(),
            log: ChoiceLog::new(),
            current_scene: String::new(),
            started: Instant::now(),
            telemetry,
        }
    }

    /// This playthrough's identifier.
    pub fn id(&self) -> PlaythroughId {
        self.id
    }

    /// Mark the scene the player is currently in; stamped onto choice records.
    pub fn enter_scene(&mut self, scene: impl Into<String>) {
        self.current_scene = scene.into();
    }

    /// The scene most recently entered.
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    /// Record a decision awarding a typed trait.
    pub fn choose_trait(&mut self, t: Trait, label: &str) {
        self.accumulator.increment(t);
        self.push_record(t.key(), Some(label));
    }

    /// Record a decision from untyped scripted content.
    ///
    /// An unrecognized trait key leaves the counts untouched but is still
    /// logged and reported, so analytics sees exactly what the script sent.
    /// A missing label defaults to the trait key.
    pub fn choose(&mut self, trait_key: &str, label: Option<&str>) {
        self.accumulator.increment_key(trait_key);
        self.push_record(trait_key, label);
    }

    /// Current value of all eight counts. Readable at any time.
    pub fn vector(&self) -> TraitVector {
        self.accumulator.snapshot()
    }

    /// The decisions taken so far.
    pub fn choices(&self) -> &ChoiceLog {
        &self.log
    }

    /// Seconds since the playthrough started.
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Classify the final vector and close out the run.
    ///
    /// Consumes the session: a replay is a fresh `Playthrough`.
    pub fn finish(mut self, classifier: &ArchetypeClassifier) -> PlaythroughReport {
        let vector = self.accumulator.snapshot();
        let classification = classifier.classify(&vector);
        let archetype = classification.archetype;

        let report = PlaythroughReport {
            playthrough: self.id,
            archetype_id: archetype.id,
            archetype_name: archetype.name.clone(),
            archetype_title: archetype.card.title.clone(),
            distance: classification.distance,
            vector,
            total_choices: self.log.len(),
            choice_path: self.log.path_string(),
            duration_secs: self.started.elapsed().as_secs(),
        };

        tracing::info!(
            playthrough = %report.playthrough,
            archetype = %report.archetype_name,
            distance = report.distance,
            "playthrough finished"
        );

        self.telemetry.record(TelemetryEvent::PlaythroughComplete {
            archetype: report.archetype_name.clone(),
            archetype_id: report.archetype_id,
            archetype_title: report.archetype_title.clone(),
            distance: report.distance,
            total_choices: report.total_choices,
            choice_path: report.choice_path.clone(),
            duration_secs: report.duration_secs,
            vector: report.vector,
        });
        self.telemetry.record(TelemetryEvent::ArchetypeResult {
            archetype: report.archetype_name.clone(),
            archetype_id: report.archetype_id,
            archetype_title: report.archetype_title.clone(),
            duration_secs: report.duration_secs,
        });

        report
    }

    fn push_record(&mut self, trait_key: &str, label: Option<&str>) {
        let record = ChoiceRecord::new(
            self.current_scene.clone(),
            trait_key,
            label.map(String::from),
        );

        self.telemetry.record(TelemetryEvent::PlayerChoice {
            scene: record.scene.clone(),
            trait_key: record.trait_key.clone(),
            label: record.label.clone(),
        });

        self.log.record(record);
    }
}

impl Default for Playthrough {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the ending screen and analytics need from a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaythroughReport {
    pub playthrough: PlaythroughId,
    pub archetype_id: ArchetypeId,
    pub archetype_name: String,
    pub archetype_title: String,
    pub distance: u32,
    pub vector: TraitVector,
    pub total_choices: usize,
    pub choice_path: String,
    pub duration_secs: u64,
}
