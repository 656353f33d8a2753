//! Demo discovery and the catalog built from it.
//!
//! Discovery is driven by a static registration table rather than any kind
//! of runtime scanning: every demo variant contributes one [`Registration`]
//! with a stable label, an explicit category tag, and a fallible
//! constructor. A constructor that fails skips only its own entry.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use tracing::{debug, warn};

use crate::Result;

/// A single runnable pattern demonstration.
///
/// The display name doubles as the sort key and menu label. `run` narrates
/// the demonstration to the given writer and may fail; the caller decides
/// how to report that.
pub trait PatternDemo {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// Classification of a demo. `Unknown` is the catch-all for registrations
/// without a real taxonomy slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the static discovery table.
///
/// The label exists so a failed constructor can still be identified in the
/// warning; the instance it would have produced is never consulted.
pub struct Registration {
    pub name: &'static str,
    pub category: Category,
    pub build: fn() -> Result<Box<dyn PatternDemo>>,
}

/// A successfully constructed demo together with its category tag.
pub struct CatalogEntry {
    pub category: Category,
    pub demo: Box<dyn PatternDemo>,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        self.demo.name()
    }
}

/// The immutable, name-sorted collection of all constructed demos.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the catalog from the full built-in registry.
    pub fn discover() -> Self {
        Self::from_registrations(&crate::demos::registry())
    }

    /// Build a catalog from an arbitrary registration table.
    ///
    /// A registration whose constructor fails is warned about and skipped;
    /// every other registration is still constructed. An empty table yields
    /// an empty catalog.
    pub fn from_registrations(registrations: &[Registration]) -> Self {
        let mut entries = Vec::with_capacity(registrations.len());

        for registration in registrations {
            match (registration.build)() {
                Ok(demo) => {
                    debug!(demo = registration.name, "constructed demo");
                    entries.push(CatalogEntry {
                        category: registration.category,
                        demo,
                    });
                }
                Err(err) => {
                    warn!(
                        demo = registration.name,
                        error = %err,
                        "skipping demo that failed to construct"
                    );
                }
            }
        }

        // Ordinal (byte-wise) ordering, applied everywhere a listing is
        // produced.
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        Catalog { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> &CatalogEntry {
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose category label equals `label` exactly (case-sensitive).
    pub fn filter_by_category(&self, label: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category.as_str() == label)
            .collect()
    }

    /// Indices into the catalog for every entry tagged `category`, in
    /// catalog (name-sorted) order.
    pub fn category_indices(&self, category: Category) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.category == category)
            .map(|(index, _)| index)
            .collect()
    }

    /// Group the catalog by category label, keys iterated in ascending
    /// order, each group keeping the catalog's name ordering.
    pub fn group_by_category(&self) -> BTreeMap<&'static str, Vec<&CatalogEntry>> {
        let mut groups: BTreeMap<&'static str, Vec<&CatalogEntry>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.category.as_str()).or_default().push(entry);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Creational.as_str(), "Creational");
        assert_eq!(Category::Structural.as_str(), "Structural");
        assert_eq!(Category::Behavioral.as_str(), "Behavioral");
        assert_eq!(Category::Unknown.as_str(), "Unknown");
        assert_eq!(Category::Behavioral.to_string(), "Behavioral");
    }

    #[test]
    fn test_empty_registry_yields_empty_catalog() {
        let catalog = Catalog::from_registrations(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.group_by_category().is_empty());
        assert!(catalog.filter_by_category("Creational").is_empty());
    }
}
