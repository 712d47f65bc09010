//! Choice records - the append-only history of player decisions.

use serde::{Deserialize, Serialize};

/// One player decision at a branch point.
///
/// The trait key is stored as reported by content, even when it falls outside
/// the recognized set, so analytics can see exactly what the script sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// Scene identifier the choice was made in.
    pub scene: String,

    /// Trait key the choice awarded.
    pub trait_key: String,

    /// Display label of the chosen option.
    pub label: String,
}

impl ChoiceRecord {
    /// Create a record. A missing label defaults to the trait key.
    pub fn new(
        scene: impl Into<String>,
        trait_key: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        let trait_key = trait_key.into();
        let label = label.unwrap_or_else(|| trait_key.clone());
        Self {
            scene: scene.into(),
            trait_key,
            label,
        }
    }
}

/// Ordered, append-only sequence of choice records for one playthrough.
///
/// Purely additive reporting data: nothing here feeds back into scoring or
/// classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceLog {
    records: Vec<ChoiceRecord>,
}

impl ChoiceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: ChoiceRecord) {
        self.records.push(record);
    }

    /// Number of recorded choices.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any choice has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = &ChoiceRecord> {
        self.records.iter()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&ChoiceRecord> {
        self.records.last()
    }

    /// Compact analytics form of the whole path: the first three characters
    /// of each trait key joined with `-`, e.g. `ext-awa-per`.
    pub fn path_string(&self) -> String {
        self.records
            .iter()
            .map(|r| r.trait_key.chars().take(3).collect::<String>())
            .collect::<Vec<_>>()
            .join("-")
    }
}
