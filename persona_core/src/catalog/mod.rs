//! Archetype catalog - the static, ordered list of classification targets.
//!
//! The catalog is configuration data, fixed at process start:
//! - **Archetypes**: labeled outcomes with prototype trait vectors
//! - **Result cards**: the ending-screen content attached to each outcome
//! - **Order**: declaration order is the classifier's tie-break key
//!
//! A malformed catalog can never be recovered from at classification time, so
//! every construction path validates up front and refuses to build.

mod archetype;

pub use archetype::*;

use serde::Deserialize;
use thiserror::Error;

/// The shipped catalog content.
const BUILTIN_CATALOG: &str = include_str!("../../data/archetypes.toml");

/// Startup-time catalog configuration errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("archetype catalog is empty")]
    Empty,

    #[error("duplicate archetype id {0}")]
    DuplicateId(ArchetypeId),

    #[error("duplicate archetype name `{0}`")]
    DuplicateName(String),

    #[error("failed to parse archetype catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    archetypes: Vec<Archetype>,
}

/// An immutable, ordered, validated list of archetypes.
///
/// Declaration order is significant: it decides ties during classification,
/// so the catalog is a list, never a set.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
}

impl ArchetypeCatalog {
    /// Build a catalog from an ordered list of archetypes.
    ///
    /// Fails fast on an empty list or on duplicate ids/names.
    pub fn new(archetypes: Vec<Archetype>) -> Result<Self, CatalogError> {
        if archetypes.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, archetype) in archetypes.iter().enumerate() {
            for earlier in &archetypes[..i] {
                if earlier.id == archetype.id {
                    return Err(CatalogError::DuplicateId(archetype.id));
                }
                if earlier.name == archetype.name {
                    return Err(CatalogError::DuplicateName(archetype.name.clone()));
                }
            }
        }

        Ok(Self { archetypes })
    }

    /// Parse a catalog from TOML content.
    ///
    /// A prototype with a missing or unknown dimension is a parse error.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.archetypes)
    }

    /// The catalog shipped with this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// All archetypes in declaration order.
    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    /// Iterate over archetypes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    /// Number of archetypes in the catalog.
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Whether the catalog is empty. Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Look up an archetype by id.
    pub fn get(&self, id: ArchetypeId) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    /// Look up an archetype by machine name.
    pub fn by_name(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_rules::TraitVector;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ArchetypeCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_builtin_declaration_order() {
        let catalog = ArchetypeCatalog::builtin().unwrap();
        let names: Vec<_> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            ["aesthete", "ninja", "punk", "skull", "lips", "bird", "battery", "ice"]
        );
        for (i, archetype) in catalog.iter().enumerate() {
            assert_eq!(archetype.id, ArchetypeId(i as u8));
        }
    }

    #[test]
    fn test_builtin_cards_present() {
        let catalog = ArchetypeCatalog::builtin().unwrap();
        for archetype in catalog.iter() {
            assert!(!archetype.card.title.is_empty(), "{} has no title", archetype.name);
            assert!(!archetype.card.icon.is_empty(), "{} has no icon", archetype.name);
            assert!(!archetype.card.blocks.is_empty(), "{} has no blocks", archetype.name);
        }
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let catalog = ArchetypeCatalog::builtin().unwrap();

        let skull = catalog.get(ArchetypeId(3)).unwrap();
        assert_eq!(skull.name, "skull");
        assert_eq!(
            skull.prototype,
            TraitVector::from_array([2, 1, 0, 3, 1, 2, 3, 0])
        );

        let bird = catalog.by_name("bird").unwrap();
        assert_eq!(bird.id, ArchetypeId(5));

        assert!(catalog.get(ArchetypeId(42)).is_none());
        assert!(catalog.by_name("unicorn").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            ArchetypeCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let archetypes = vec![
            Archetype::new(0, "first", TraitVector::new()),
            Archetype::new(0, "second", TraitVector::new()),
        ];
        assert!(matches!(
            ArchetypeCatalog::new(archetypes),
            Err(CatalogError::DuplicateId(ArchetypeId(0)))
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let archetypes = vec![
            Archetype::new(0, "twin", TraitVector::new()),
            Archetype::new(1, "twin", TraitVector::new()),
        ];
        assert!(matches!(
            ArchetypeCatalog::new(archetypes),
            Err(CatalogError::DuplicateName(name)) if name == "twin"
        ));
    }

    #[test]
    fn test_missing_prototype_dimension_rejected() {
        let toml = r#"
            [[archetypes]]
            id = 0
            name = "incomplete"

            [archetypes.prototype]
            extroversion = 1
            introversion = 2
            empathy = 0
            indifference = 3
            toxicity = 3
            awareness = 0
            perfectionism = 3
        "#;
        assert!(matches!(
            ArchetypeCatalog::from_toml_str(toml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_prototype_dimension_rejected() {
        let toml = r#"
            [[archetypes]]
            id = 0
            name = "overfull"

            [archetypes.prototype]
            extroversion = 0
            introversion = 0
            empathy = 0
            indifference = 0
            toxicity = 0
            awareness = 0
            perfectionism = 0
            pragmatism = 0
            charisma = 9
        "#;
        assert!(matches!(
            ArchetypeCatalog::from_toml_str(toml),
            Err(CatalogError::Parse(_))
        ));
    }
}
