//! The trait vector - all eight counts at a point in time.

use serde::{Deserialize, Serialize};

use super::Trait;

/// A full set of trait counts.
///
/// Every vector carries all eight dimensions; a fresh vector is all zeroes.
/// Counts only ever increase over the lifetime of one playthrough and have no
/// upper bound - a scene may award the same trait any number of times.
///
/// Deserialization requires every field, so a prototype with a missing
/// dimension in catalog content is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraitVector {
    pub extroversion: u32,
    pub introversion: u32,
    pub empathy: u32,
    pub indifference: u32,
    pub toxicity: u32,
    pub awareness: u32,
    pub perfectionism: u32,
    pub pragmatism: u32,
}

impl TraitVector {
    /// Create a zeroed vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from counts in canonical dimension order.
    pub fn from_array(counts: [u32; 8]) -> Self {
        Self {
            extroversion: counts[0],
            introversion: counts[1],
            empathy: counts[2],
            indifference: counts[3],
            toxicity: counts[4],
            awareness: counts[5],
            perfectionism: counts[6],
            pragmatism: counts[7],
        }
    }

    /// The counts in canonical dimension order.
    pub fn as_array(&self) -> [u32; 8] {
        [
            self.extroversion,
            self.introversion,
            self.empathy,
            self.indifference,
            self.toxicity,
            self.awareness,
            self.perfectionism,
            self.pragmatism,
        ]
    }

    /// Get the count for a single trait.
    pub fn get(&self, t: Trait) -> u32 {
        match t {
            Trait::Extroversion => self.extroversion,
            Trait::Introversion => self.introversion,
            Trait::Empathy => self.empathy,
            Trait::Indifference => self.indifference,
            Trait::Toxicity => self.toxicity,
            Trait::Awareness => self.awareness,
            Trait::Perfectionism => self.perfectionism,
            Trait::Pragmatism => self.pragmatism,
        }
    }

    /// Increment the count for a single trait by one.
    pub fn bump(&mut self, t: Trait) {
        let slot = match t {
            Trait::Extroversion => &mut self.extroversion,
            Trait::Introversion => &mut self.introversion,
            Trait::Empathy => &mut self.empathy,
            Trait::Indifference => &mut self.indifference,
            Trait::Toxicity => &mut self.toxicity,
            Trait::Awareness => &mut self.awareness,
            Trait::Perfectionism => &mut self.perfectionism,
            Trait::Pragmatism => &mut self.pragmatism,
        };
        *slot += 1;
    }

    /// L1 (Manhattan) distance to another vector: the sum of absolute
    /// per-dimension differences over all eight dimensions.
    pub fn l1_distance(&self, other: &TraitVector) -> u32 {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .map(|(a, b)| a.abs_diff(*b))
            .sum()
    }

    /// L1 norm: the distance from the zero vector.
    pub fn l1_norm(&self) -> u32 {
        self.as_array().iter().sum()
    }

    /// Total number of recognized choice points recorded in this vector.
    pub fn total(&self) -> u32 {
        self.l1_norm()
    }
}
