//! Score state management - the mutable trait counts for one playthrough.

use serde::{Deserialize, Serialize};

use crate::traits::{Trait, TraitVector};

/// Owns the hidden trait counts for exactly one playthrough.
///
/// A fresh accumulator is constructed at playthrough start and discarded at
/// the end; there is no reset operation. A restart means a new instance, so
/// concurrent playthroughs (tests, server-side runs) can never leak state
/// into each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitAccumulator {
    vector: TraitVector,
}

impl TraitAccumulator {
    /// Create a new accumulator with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Award one point to a trait.
    pub fn increment(&mut self, t: Trait) {
        self.vector.bump(t);
    }

    /// Award one point to a trait named by scripted content.
    ///
    /// Identifiers outside the closed trait set are a no-op: the counts are
    /// left untouched and `false` is returned. The miss is surfaced on the
    /// diagnostic channel instead of panicking - narrative flow must never
    /// halt because of a scoring defect in content.
    pub fn increment_key(&mut self, key: &str) -> bool {
        match Trait::from_key(key) {
            Some(t) => {
                self.vector.bump(t);
                true
            }
            None => {
                tracing::warn!(trait_key = key, "ignoring unknown trait identifier");
                false
            }
        }
    }

    /// The current value of all eight counts.
    pub fn snapshot(&self) -> TraitVector {
        self.vector
    }

    /// Total points awarded so far across all traits.
    pub fn total_points(&self) -> u32 {
        self.vector.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_accumulator_is_zero() {
        let acc = TraitAccumulator::new();
        assert_eq!(acc.snapshot(), TraitVector::new());
        assert_eq!(acc.total_points(), 0);
    }

    #[test]
    fn test_increment_counts_per_trait() {
        let mut acc = TraitAccumulator::new();
        acc.increment(Trait::Empathy);
        acc.increment(Trait::Empathy);
        acc.increment(Trait::Empathy);
        acc.increment(Trait::Toxicity);

        let v = acc.snapshot();
        assert_eq!(v.empathy, 3);
        assert_eq!(v.toxicity, 1);
        for t in [
            Trait::Extroversion,
            Trait::Introversion,
            Trait::Indifference,
            Trait::Awareness,
            Trait::Perfectionism,
            Trait::Pragmatism,
        ] {
            assert_eq!(v.get(t), 0);
        }
    }

    #[test]
    fn test_increments_commute() {
        let mut forward = TraitAccumulator::new();
        let mut backward = TraitAccumulator::new();

        let sequence = [
            Trait::Awareness,
            Trait::Extroversion,
            Trait::Awareness,
            Trait::Perfectionism,
            Trait::Extroversion,
        ];
        for t in sequence {
            forward.increment(t);
        }
        for t in sequence.into_iter().rev() {
            backward.increment(t);
        }

        assert_eq!(forward.snapshot(), backward.snapshot());
        assert_eq!(forward.total_points(), sequence.len() as u32);
    }

    #[test]
    fn test_increment_key_recognized() {
        let mut acc = TraitAccumulator::new();
        assert!(acc.increment_key("awareness"));
        assert_eq!(acc.snapshot().awareness, 1);
    }

    #[test]
    fn test_increment_key_unknown_is_noop() {
        let mut acc = TraitAccumulator::new();
        acc.increment(Trait::Empathy);

        let before = acc.snapshot();
        assert!(!acc.increment_key("charisma"));
        assert!(!acc.increment_key(""));
        assert_eq!(acc.snapshot(), before);
    }
}
