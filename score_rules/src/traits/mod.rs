//! Trait definitions - the closed set of hidden personality counters.

mod vector;

pub use vector::*;

use serde::{Deserialize, Serialize};

/// The eight hidden personality traits scored over a playthrough.
///
/// Declaration order is canonical: it is the dimension order of every
/// [`TraitVector`] and of archetype prototype rows in catalog content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    // Social orientation
    Extroversion,
    Introversion,

    // Emotional profile
    Empathy,
    Indifference,

    // Behavioral markers
    Toxicity,
    Awareness,

    // Work style
    Perfectionism,
    Pragmatism,
}

/// The four opposing-pair axes the traits are grouped into.
///
/// A content convention only: scoring treats all eight traits as independent
/// scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitAxis {
    SocialOrientation,
    EmotionalProfile,
    BehavioralMarkers,
    WorkStyle,
}

impl Trait {
    /// All traits in canonical dimension order.
    pub const ALL: [Trait; 8] = [
        Trait::Extroversion,
        Trait::Introversion,
        Trait::Empathy,
        Trait::Indifference,
        Trait::Toxicity,
        Trait::Awareness,
        Trait::Perfectionism,
        Trait::Pragmatism,
    ];

    /// Canonical dimension index, 0..8.
    pub fn index(self) -> usize {
        match self {
            Trait::Extroversion => 0,
            Trait::Introversion => 1,
            Trait::Empathy => 2,
            Trait::Indifference => 3,
            Trait::Toxicity => 4,
            Trait::Awareness => 5,
            Trait::Perfectionism => 6,
            Trait::Pragmatism => 7,
        }
    }

    /// Stable identifier used by scripted content and analytics.
    pub fn key(self) -> &'static str {
        match self {
            Trait::Extroversion => "extroversion",
            Trait::Introversion => "introversion",
            Trait::Empathy => "empathy",
            Trait::Indifference => "indifference",
            Trait::Toxicity => "toxicity",
            Trait::Awareness => "awareness",
            Trait::Perfectionism => "perfectionism",
            Trait::Pragmatism => "pragmatism",
        }
    }

    /// Parse a content-supplied identifier.
    ///
    /// Returns `None` for anything outside the closed set; callers at the
    /// untyped boundary treat that as a no-op rather than an error.
    pub fn from_key(key: &str) -> Option<Trait> {
        Trait::ALL.into_iter().find(|t| t.key() == key)
    }

    /// The opposing trait on the same axis.
    pub fn opposite(self) -> Trait {
        match self {
            Trait::Extroversion => Trait::Introversion,
            Trait::Introversion => Trait::Extroversion,
            Trait::Empathy => Trait::Indifference,
            Trait::Indifference => Trait::Empathy,
            Trait::Toxicity => Trait::Awareness,
            Trait::Awareness => Trait::Toxicity,
            Trait::Perfectionism => Trait::Pragmatism,
            Trait::Pragmatism => Trait::Perfectionism,
        }
    }

    /// The axis this trait belongs to.
    pub fn axis(self) -> TraitAxis {
        match self {
            Trait::Extroversion | Trait::Introversion => TraitAxis::SocialOrientation,
            Trait::Empathy | Trait::Indifference => TraitAxis::EmotionalProfile,
            Trait::Toxicity | Trait::Awareness => TraitAxis::BehavioralMarkers,
            Trait::Perfectionism | Trait::Pragmatism => TraitAxis::WorkStyle,
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
