//! Archetype definitions - classification targets in the catalog.

use score_rules::TraitVector;
use serde::{Deserialize, Serialize};

/// Stable identifier for archetypes.
///
/// Ids come from catalog content and stay stable across releases; they are
/// what analytics aggregates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchetypeId(pub u8);

impl std::fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static ending-screen content attached to an archetype.
///
/// Presentation data only; classification never looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultCard {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// Asset path for the result icon.
    #[serde(default)]
    pub icon: String,

    /// Body text, one entry per card paragraph.
    #[serde(default)]
    pub blocks: Vec<String>,
}

/// A labeled classification outcome with its prototype trait vector.
///
/// Prototype values are small integers (0-3 in shipped content), but the
/// classifier works for any non-negative counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Archetype {
    pub id: ArchetypeId,

    /// Machine name, e.g. `aesthete`.
    pub name: String,

    /// The trait vector this archetype is the nearest neighbor of.
    pub prototype: TraitVector,

    #[serde(default)]
    pub card: ResultCard,
}

impl Archetype {
    /// Create an archetype with an empty result card.
    pub fn new(id: u8, name: impl Into<String>, prototype: TraitVector) -> Self {
        Self {
            id: ArchetypeId(id),
            name: name.into(),
            prototype,
            card: ResultCard::default(),
        }
    }

    /// Attach ending-screen content.
    pub fn with_card(mut self, card: ResultCard) -> Self {
        self.card = card;
        self
    }
}
