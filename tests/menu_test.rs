//! Menu controller sessions driven by scripted input over captured output.

use std::io::Write;

use pretty_assertions::assert_eq;

use patternarium::catalog::{Catalog, Category, PatternDemo, Registration};
use patternarium::menu::{MenuController, MenuState};
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

struct FailingDemo;

impl PatternDemo for FailingDemo {
    fn name(&self) -> &str {
        "Faulty"
    }

    fn description(&self) -> &str {
        "always blows up"
    }

    fn run(&self, _out: &mut dyn Write) -> Result<()> {
        Err(GalleryError::Demonstration(
            "the projector bulb burned out".to_string(),
        ))
    }
}

fn build_alpha() -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(StubDemo { name: "Alpha" }))
}

fn build_beta() -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(StubDemo { name: "Beta" }))
}

fn build_faulty() -> Result<Box<dyn PatternDemo>> {
    Ok(Box::new(FailingDemo))
}

/// Two creational stubs and one failing behavioral demo; no structural
/// entries at all.
fn stub_catalog() -> Catalog {
    let registrations = [
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
        Registration {
            name: "Faulty",
            category: Category::Behavioral,
            build: build_faulty,
        },
    ];
    Catalog::from_registrations(&registrations)
}

/// Run a full session over `input` and return everything that was printed.
fn run_session(catalog: Catalog, input: &str) -> String {
    let mut out = Vec::new();
    let mut controller = MenuController::new(catalog, input.as_bytes(), &mut out);
    controller.run().expect("session should not error");
    assert!(controller.state().is_terminated());
    drop(controller);
    String::from_utf8(out).expect("output should be UTF-8")
}

#[test]
fn test_quit_is_case_insensitive() {
    let output = run_session(stub_catalog(), "q\n");
    assert!(output.contains("Exiting..."));

    let output = run_session(stub_catalog(), "Q\n");
    assert!(output.contains("Exiting..."));
}

#[test]
fn test_empty_input_is_silently_ignored() {
    let output = run_session(stub_catalog(), "\n   \nq\n");
    assert!(!output.contains("Invalid option"));
    // Re-prompted once per ignored line plus the final quit.
    assert_eq!(output.matches("Select: ").count(), 3);
}

#[test]
fn test_unknown_option_reports_and_reprompts() {
    let output = run_session(stub_catalog(), "9\nq\n");
    assert!(output.contains("Invalid option. Try again."));
    assert!(output.contains("Exiting..."));
}

#[test]
fn test_category_listing_and_back() {
    let output = run_session(stub_catalog(), "1\n0\nq\n");
    assert!(output.contains("--- Creational patterns ---"));
    assert!(output.contains(" 1. Alpha"));
    assert!(output.contains(" 2. Beta"));
    assert!(output.contains(" 0. Back"));
    // "0" goes straight back: no demo header, no pause.
    assert!(!output.contains("=== Alpha ==="));
    assert!(!output.contains("stub output"));
    assert!(!output.contains("Press Enter to continue..."));
}

#[test]
fn test_running_a_demo_prints_header_description_and_output() {
    let output = run_session(stub_catalog(), "1\n1\n\nq\n");
    assert!(output.contains("=== Alpha ==="));
    assert!(output.contains("a stub demo"));
    assert!(output.contains("stub output from Alpha"));
    assert!(output.contains("Press Enter to continue..."));
    assert!(output.contains("Exiting..."));
}

#[test]
fn test_failing_demo_is_reported_and_session_continues() {
    let output = run_session(stub_catalog(), "3\n1\n\nq\n");
    assert!(output.contains("=== Faulty ==="));
    assert!(output.contains(
        "Error during demonstration: the projector bulb burned out"
    ));
    // The loop came back to the main menu and honored the quit.
    assert!(output.contains("Exiting..."));
    assert!(output.matches("=== Main menu ===").count() >= 2);
}

#[test]
fn test_empty_category_returns_immediately() {
    let output = run_session(stub_catalog(), "2\nq\n");
    assert!(output.contains("No patterns found for category: Structural"));
    assert!(!output.contains("Select a pattern:"));
}

#[test]
fn test_invalid_pattern_selection() {
    let output = run_session(stub_catalog(), "1\nxyz\n\nq\n");
    assert!(output.contains("Invalid selection."));
    assert!(!output.contains("stub output"));

    // Out-of-range numbers are invalid too.
    let output = run_session(stub_catalog(), "1\n7\n\nq\n");
    assert!(output.contains("Invalid selection."));
}

#[test]
fn test_show_all_groups_by_ascending_category() {
    let output = run_session(stub_catalog(), "4\n\nq\n");
    assert!(output.contains("=== All patterns ==="));

    let behavioral = output.find("[Behavioral]").expect("behavioral header");
    let creational = output.find("[Creational]").expect("creational header");
    assert!(behavioral < creational);
    assert!(output.contains("  - Alpha"));
    assert!(output.contains("  - Beta"));
    assert!(output.contains("  - Faulty"));
}

#[test]
fn test_end_of_input_terminates_like_quit() {
    let catalog = stub_catalog();
    let mut out = Vec::new();
    let mut controller = MenuController::new(catalog, "".as_bytes(), &mut out);
    controller.run().expect("EOF should end the session");
    assert!(controller.state().is_terminated());
}

#[test]
fn test_main_menu_input_state_transitions() {
    let catalog = stub_catalog();
    let mut out = Vec::new();
    let mut controller = MenuController::new(catalog, "".as_bytes(), &mut out);

    controller.handle_main_input("").expect("empty input");
    assert_eq!(controller.state(), MenuState::MainMenu);

    controller.handle_main_input("9").expect("invalid input");
    assert_eq!(controller.state(), MenuState::MainMenu);

    controller.handle_main_input("q").expect("quit input");
    assert_eq!(controller.state(), MenuState::Terminated);

    drop(controller);
    let printed = String::from_utf8(out).expect("output should be UTF-8");
    assert_eq!(printed.matches("Invalid option. Try again.").count(), 1);
}

#[test]
fn test_full_catalog_session_runs_a_real_demo() {
    // "State" is the 4th behavioral demo in name order:
    // Chain of Responsibility, Command, Interpreter, Iterator, Mediator,
    // Memento, Observer, State, Strategy, Template Method, Visitor.
    let output = run_session(Catalog::discover(), "3\n8\n\nq\n");
    assert!(output.contains("=== State ==="));
    assert!(output.contains("traffic light"));
    assert!(output.contains("Exiting..."));
}
