//! Archetype classification - L1 nearest-neighbor matching over the catalog.
//!
//! Classification works as follows:
//! 1. **Distance**: for each archetype, sum the absolute per-dimension
//!    differences between the player's vector and the prototype (Manhattan
//!    distance over all eight trait dimensions)
//! 2. **Selection**: keep the archetype with the minimum distance
//! 3. **Tie-break**: the running minimum is compared with strict `<`, so the
//!    archetype declared first in the catalog wins ties - the only
//!    determinism guarantee when a vector is equidistant from two prototypes
//!    (e.g. the all-zero vector at playthrough start)

use score_rules::TraitVector;

use crate::catalog::{Archetype, ArchetypeCatalog, CatalogError};

/// The outcome of classifying one trait vector.
#[derive(Debug, Clone, Copy)]
pub struct Classification<'a> {
    /// The winning archetype.
    pub archetype: &'a Archetype,

    /// L1 distance between the input vector and the winner's prototype.
    /// Diagnostic data; not required for correctness.
    pub distance: u32,
}

impl Classification<'_> {
    /// Whether the vector matched the prototype exactly.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Maps a finished trait vector to the best-matching archetype.
///
/// Pure and stateless beyond the catalog it owns: no I/O, no side effects,
/// the same vector always classifies to the same outcome.
pub struct ArchetypeClassifier {
    catalog: ArchetypeCatalog,
}

impl ArchetypeClassifier {
    /// Create a classifier over a validated catalog.
    pub fn new(catalog: ArchetypeCatalog) -> Self {
        Self { catalog }
    }

    /// Create a classifier over the shipped catalog.
    pub fn with_builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(ArchetypeCatalog::builtin()?))
    }

    /// The catalog this classifier matches against.
    pub fn catalog(&self) -> &ArchetypeCatalog {
        &self.catalog
    }

    /// Find the archetype nearest to `vector`.
    ///
    /// Any non-negative vector is valid input, including the all-zero vector.
    pub fn classify(&self, vector: &TraitVector) -> Classification<'_> {
        // Catalog construction guarantees at least one entry.
        let (first, rest) = self
            .catalog
            .archetypes()
            .split_first()
            .expect("catalog is validated non-empty");

        let mut best = Classification {
            archetype: first,
            distance: vector.l1_distance(&first.prototype),
        };

        for archetype in rest {
            let distance = vector.l1_distance(&archetype.prototype);
            // Strict comparison: earlier declarations win ties.
            if distance < best.distance {
                best = Classification { archetype, distance };
            }
        }

        tracing::debug!(
            archetype = %best.archetype.name,
            distance = best.distance,
            "classified trait vector"
        );

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArchetypeId;
    use score_rules::{Trait, TraitAccumulator};

    fn builtin_classifier() -> ArchetypeClassifier {
        ArchetypeClassifier::with_builtin().unwrap()
    }

    #[test]
    fn test_distance_reported_for_zero_vector() {
        let classifier = builtin_classifier();
        let aesthete = classifier.catalog().by_name("aesthete").unwrap();

        // Start-of-game vector against the first prototype.
        assert_eq!(TraitVector::new().l1_distance(&aesthete.prototype), 12);
    }

    #[test]
    fn test_first_declared_wins_ties() {
        let archetypes = vec![
            Archetype::new(0, "alpha", TraitVector::new()),
            Archetype::new(1, "beta", TraitVector::new()),
        ];
        let classifier = ArchetypeClassifier::new(ArchetypeCatalog::new(archetypes).unwrap());

        let result = classifier.classify(&TraitVector::new());
        assert_eq!(result.archetype.name, "alpha");
        assert_eq!(result.distance, 0);
        assert!(result.is_exact());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = builtin_classifier();
        let vector = TraitVector::from_array([1, 0, 2, 1, 0, 2, 1, 1]);

        let first = classifier.classify(&vector);
        let second = classifier.classify(&vector);

        assert_eq!(first.archetype.id, second.archetype.id);
        assert_eq!(first.distance, second.distance);
    }

    #[test]
    fn test_zero_vector_picks_smallest_norm_in_declaration_order() {
        // Computed from whatever catalog is loaded, not hardcoded.
        let classifier = builtin_classifier();

        let mut expected: Option<(&Archetype, u32)> = None;
        for archetype in classifier.catalog().iter() {
            let norm = archetype.prototype.l1_norm();
            if expected.map_or(true, |(_, min)| norm < min) {
                expected = Some((archetype, norm));
            }
        }
        let (expected_archetype, expected_norm) = expected.unwrap();

        let result = classifier.classify(&TraitVector::new());
        assert_eq!(result.archetype.id, expected_archetype.id);
        assert_eq!(result.distance, expected_norm);
    }

    #[test]
    fn test_end_to_end_playthrough_vector() {
        // extroversion x2, awareness x3, perfectionism x1.
        let mut acc = TraitAccumulator::new();
        acc.increment(Trait::Extroversion);
        acc.increment(Trait::Extroversion);
        acc.increment(Trait::Awareness);
        acc.increment(Trait::Awareness);
        acc.increment(Trait::Awareness);
        acc.increment(Trait::Perfectionism);

        let vector = acc.snapshot();
        assert_eq!(vector.as_array(), [2, 0, 0, 0, 0, 3, 1, 0]);

        let classifier = builtin_classifier();
        let result = classifier.classify(&vector);

        assert_eq!(result.archetype.id, ArchetypeId(5));
        assert_eq!(result.archetype.name, "bird");
        assert_eq!(result.distance, 7);
    }

    #[test]
    fn test_large_counts_supported() {
        // No upper bound on accumulated counts.
        let classifier = builtin_classifier();
        let vector = TraitVector::from_array([50, 0, 0, 0, 0, 0, 0, 0]);

        let result = classifier.classify(&vector);
        // punk has the highest extroversion prototype (3).
        assert_eq!(result.archetype.name, "punk");
    }
}
