//! The 23 pattern demos and the static registry that discovers them.

pub mod behavioral;
pub mod creational;
pub mod structural;

use crate::catalog::{Category, PatternDemo, Registration};
use crate::Result;

fn boxed<D: PatternDemo + 'static>(demo: D) -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(demo))
}

/// The full registration table, one entry per demo variant.
///
/// Enumerable in full at startup; a single failing constructor skips only
/// its own entry during catalog construction.
pub fn registry() -> Vec<Registration> {
    vec![
        Registration {
            name: "Abstract Factory",
            category: Category::Creational,
            build: || boxed(creational::AbstractFactoryDemo),
        },
        Registration {
            name: "Builder",
            category: Category::Creational,
            build: || boxed(creational::BuilderDemo),
        },
        Registration {
            name: "Factory Method",
            category: Category::Creational,
            build: || boxed(creational::FactoryMethodDemo),
        },
        Registration {
            name: "Prototype",
            category: Category::Creational,
            build: || boxed(creational::PrototypeDemo),
        },
        Registration {
            name: "Singleton",
            category: Category::Creational,
            build: || boxed(creational::SingletonDemo),
        },
        Registration {
            name: "Adapter",
            category: Category::Structural,
            build: || boxed(structural::AdapterDemo),
        },
        Registration {
            name: "Bridge",
            category: Category::Structural,
            build: || boxed(structural::BridgeDemo),
        },
        Registration {
            name: "Composite",
            category: Category::Structural,
            build: || boxed(structural::CompositeDemo),
        },
        Registration {
            name: "Decorator",
            category: Category::Structural,
            build: || boxed(structural::DecoratorDemo),
        },
        Registration {
            name: "Facade",
            category: Category::Structural,
            build: || boxed(structural::FacadeDemo),
        },
        Registration {
            name: "Flyweight",
            category: Category::Structural,
            build: || boxed(structural::FlyweightDemo),
        },
        Registration {
            name: "Proxy",
            category: Category::Structural,
            build: || boxed(structural::ProxyDemo),
        },
        Registration {
            name: "Chain of Responsibility",
            category: Category::Behavioral,
            build: || boxed(behavioral::ChainOfResponsibilityDemo),
        },
        Registration {
            name: "Command",
            category: Category::Behavioral,
            build: || boxed(behavioral::CommandDemo),
        },
        Registration {
            name: "Interpreter",
            category: Category::Behavioral,
            build: || {
                behavioral::InterpreterDemo::new()
                    .map(|demo| Box::new(demo) as Box<dyn PatternDemo>)
            },
        },
        Registration {
            name: "Iterator",
            category: Category::Behavioral,
            build: || boxed(behavioral::IteratorDemo),
        },
        Registration {
            name: "Mediator",
            category: Category::Behavioral,
            build: || boxed(behavioral::MediatorDemo),
        },
        Registration {
            name: "Memento",
            category: Category::Behavioral,
            build: || boxed(behavioral::MementoDemo),
        },
        Registration {
            name: "Observer",
            category: Category::Behavioral,
            build: || boxed(behavioral::ObserverDemo),
        },
        Registration {
            name: "State",
            category: Category::Behavioral,
            build: || boxed(behavioral::StateDemo),
        },
        Registration {
            name: "Strategy",
            category: Category::Behavioral,
            build: || boxed(behavioral::StrategyDemo),
        },
        Registration {
            name: "Template Method",
            category: Category::Behavioral,
            build: || boxed(behavioral::TemplateMethodDemo),
        },
        Registration {
            name: "Visitor",
            category: Category::Behavioral,
            build: || boxed(behavioral::VisitorDemo),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_23_patterns() {
        let registry = registry();
        assert_eq!(registry.len(), 23);

        let creational = registry
            .iter()
            .filter(|r| r.category == Category::Creational)
            .count();
        let structural = registry
            .iter()
            .filter(|r| r.category == Category::Structural)
            .count();
        let behavioral = registry
            .iter()
            .filter(|r| r.category == Category::Behavioral)
            .count();
        assert_eq!(creational, 5);
        assert_eq!(structural, 7);
        assert_eq!(behavioral, 11);
    }

    #[test]
    fn test_registration_labels_match_demo_names() {
        for registration in registry() {
            let demo = (registration.build)().expect("demo should construct");
            assert_eq!(demo.name(), registration.name);
            assert!(!demo.description().is_empty());
        }
    }

    #[test]
    fn test_every_demo_runs_and_narrates() {
        for registration in registry() {
            let demo = (registration.build)().expect("demo should construct");
            let mut out = Vec::new();
            demo.run(&mut out).expect("demo should run cleanly");
            assert!(
                !out.is_empty(),
                "demo '{}' produced no output",
                registration.name
            );
        }
    }
}
