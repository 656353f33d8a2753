//! Catalog discovery, filtering, and grouping over both the real registry
//! and synthetic registration tables.

use std::io::Write;

use pretty_assertions::assert_eq;

use patternarium::catalog::{Catalog, Category, PatternDemo, Registration};
use patternarium::{GalleryError, Result};

struct StubDemo {
    name: &'static str,
}

impl PatternDemo for StubDemo {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "a stub demo"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "stub output from {}", self.name)?;
        Ok(())
    }
}

fn build_alpha() -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(StubDemo { name: "Alpha" }))
}

fn build_beta() -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(StubDemo { name: "Beta" }))
}

fn build_zeta() -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(StubDemo { name: "Zeta" }))
}

fn build_broken() -> Result<Box<dyn PatternDemo>> {
    Err(GalleryError::Construction {
        name: "Broken".to_string(),
        reason: "always fails".to_string(),
    })
}

fn names(entries: &[&patternarium::catalog::CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}

#[test]
fn test_discover_returns_all_23_sorted_by_name() {
    let catalog = Catalog::discover();
    assert_eq!(catalog.len(), 23);

    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    assert_eq!(names.first(), Some(&"Abstract Factory"));
    assert_eq!(names[1], "Adapter");
    assert_eq!(names.last(), Some(&"Visitor"));
}

#[test]
fn test_failing_constructor_excludes_only_itself() {
    let registrations = [
        Registration {
            name: "Alpha",
            category: Category::Creational,
            build: build_alpha,
        },
        Registration {
            name: "Broken",
            category: Category::Structural,
            build: build_broken,
        },
        Registration {
            name: "Zeta",
            category: Category::Behavioral,
            build: build_zeta,
        },
    ];

    let catalog = Catalog::from_registrations(&registrations);
    assert_eq!(catalog.len(), 2);

    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}

#[test]
fn test_filter_by_category_is_case_sensitive() {
    let catalog = Catalog::discover();

    let structural = catalog.filter_by_category("Structural");
    assert_eq!(structural.len(), 7);
    assert!(structural
        .iter()
        .all(|entry| entry.category == Category::Structural));

    assert!(catalog.filter_by_category("structural").is_empty());
    assert!(catalog.filter_by_category("STRUCTURAL").is_empty());
    assert!(catalog.filter_by_category("Nonexistent").is_empty());
}

#[test]
fn test_group_by_category_partitions_the_catalog() {
    let catalog = Catalog::discover();
    let groups = catalog.group_by_category();

    let keys: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["Behavioral", "Creational", "Structural"]);

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, catalog.len());

    for entries in groups.values() {
        let group_names = names(entries);
        let mut sorted = group_names.clone();
        sorted.sort();
        assert_eq!(group_names, sorted);
    }
}

#[test]
fn test_group_and_sort_end_to_end_scenario() {
    // Zeta (Behavioral), Alpha (Creational), Beta (Creational).
    let registrations = [
        Registration {
            name: "Zeta",
            category: Category::Behavioral,
            build: build_zeta,
        },
        Registration {
            name: "Alpha",
            category: Category::Creational,
            build: build_alpha,
        },
        Registration {
            name: "Beta",
            category: Category::Creational,
            build: build_beta,
        },
    ];

    let catalog = Catalog::from_registrations(&registrations);

    let discovered: Vec<&str> = catalog.entries().iter().map(|e| e.name()).collect();
    assert_eq!(discovered, vec!["Alpha", "Beta", "Zeta"]);

    let groups = catalog.group_by_category();
    let keys: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["Behavioral", "Creational"]);
    assert_eq!(names(&groups["Behavioral"]), vec!["Zeta"]);
    assert_eq!(names(&groups["Creational"]), vec!["Alpha", "Beta"]);
}

#[test]
fn test_category_indices_follow_catalog_order() {
    let catalog = Catalog::discover();
    let indices = catalog.category_indices(Category::Creational);
    assert_eq!(indices.len(), 5);

    let names: Vec<&str> = indices.iter().map(|&i| catalog.entry(i).name()).collect();
    assert_eq!(
        names,
        vec![
            "Abstract Factory",
            "Builder",
            "Factory Method",
            "Prototype",
            "Singleton"
        ]
    );
}

#[test]
fn test_empty_registry_is_not_an_error() {
    let catalog = Catalog::from_registrations(&[]);
    assert_eq!(catalog.len(), 0);
    assert!(catalog.is_empty());
}
