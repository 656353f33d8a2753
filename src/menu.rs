//! The interactive menu loop over a [`Catalog`].
//!
//! Input and output are injected as `BufRead`/`Write` so the whole session
//! can be driven by scripted buffers in tests. The controller is a small
//! state machine; every path except an explicit quit (or end of input)
//! leads back to the main menu.

use std::io::{BufRead, Write};

use crate::catalog::{Catalog, Category};
use crate::Result;

/// Where the controller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    CategoryList(Category),
    PatternDetail(usize),
    AllPatternsList,
    Terminated,
}

impl MenuState {
    pub fn name(&self) -> &'static str {
        match self {
            MenuState::MainMenu => "MainMenu",
            MenuState::CategoryList(_) => "CategoryList",
            MenuState::PatternDetail(_) => "PatternDetail",
            MenuState::AllPatternsList => "AllPatternsList",
            MenuState::Terminated => "Terminated",
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, MenuState::Terminated)
    }
}

pub struct MenuController<R: BufRead, W: Write> {
    catalog: Catalog,
    input: R,
    output: W,
    state: MenuState,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        MenuController {
            catalog,
            input,
            output,
            state: MenuState::MainMenu,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the blocking read-loop until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        while !self.state.is_terminated() {
            self.print_main_menu()?;
            match self.read_line()? {
                Some(line) => self.handle_main_input(line.trim())?,
                // End of input behaves like an explicit quit so piped
                // sessions terminate cleanly.
                None => self.state = MenuState::Terminated,
            }
        }

        Ok(())
    }

    /// Dispatch one line of main-menu input. Empty input is silently
    /// ignored; anything else either transitions or reports an invalid
    /// option.
    pub fn handle_main_input(&mut self, input: &str) -> Result<()> {
        if input.is_empty() {
            return Ok(());
        }

        match input {
            "1" => self.enter_category(Category::Creational),
            "2" => self.enter_category(Category::Structural),
            "3" => self.enter_category(Category::Behavioral),
            "4" => self.show_all(),
            q if q.eq_ignore_ascii_case("q") => {
                writeln!(self.output, "Exiting...")?;
                self.state = MenuState::Terminated;
                Ok(())
            }
            _ => {
                writeln!(self.output, "Invalid option. Try again.")?;
                Ok(())
            }
        }
    }

    fn enter_category(&mut self, category: Category) -> Result<()> {
        self.state = MenuState::CategoryList(category);

        let indices = self.catalog.category_indices(category);
        if indices.is_empty() {
            writeln!(self.output, "No patterns found for category: {category}")?;
            self.state = MenuState::MainMenu;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "--- {category} patterns ---")?;
        for (position, &index) in indices.iter().enumerate() {
            writeln!(
                self.output,
                " {}. {}",
                position + 1,
                self.catalog.entry(index).name()
            )?;
        }
        writeln!(self.output, " 0. Back")?;
        write!(self.output, "Select a pattern: ")?;
        self.output.flush()?;

        let selection = match self.read_line()? {
            Some(line) => line,
            None => {
                self.state = MenuState::MainMenu;
                return Ok(());
            }
        };

        match selection.trim() {
            "0" => self.state = MenuState::MainMenu,
            other => match other.parse::<usize>() {
                Ok(n) if (1..=indices.len()).contains(&n) => {
                    self.run_demo(indices[n - 1])?;
                    self.pause()?;
                    self.state = MenuState::MainMenu;
                }
                _ => {
                    writeln!(self.output, "Invalid selection.")?;
                    self.pause()?;
                    self.state = MenuState::MainMenu;
                }
            },
        }

        Ok(())
    }

    fn run_demo(&mut self, index: usize) -> Result<()> {
        self.state = MenuState::PatternDetail(index);

        let entry = self.catalog.entry(index);
        writeln!(self.output)?;
        writeln!(self.output, "=== {} ===", entry.name())?;
        writeln!(self.output, "{}", entry.demo.description())?;
        writeln!(self.output)?;

        if let Err(err) = entry.demo.run(&mut self.output) {
            writeln!(self.output, "Error during demonstration: {err}")?;
        }

        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        self.state = MenuState::AllPatternsList;

        writeln!(self.output)?;
        writeln!(self.output, "=== All patterns ===")?;
        {
            let groups = self.catalog.group_by_category();
            for (label, entries) in &groups {
                writeln!(self.output)?;
                writeln!(self.output, "[{label}]")?;
                for entry in entries {
                    writeln!(self.output, "  - {}", entry.name())?;
                }
            }
        }

        self.pause()?;
        self.state = MenuState::MainMenu;
        Ok(())
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "==========================================")?;
        writeln!(self.output, "  Design Patterns Gallery")?;
        writeln!(self.output, "  23 Gang of Four patterns, interactive")?;
        writeln!(self.output, "==========================================")?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Main menu ===")?;
        writeln!(self.output, " 1. Creational patterns")?;
        writeln!(self.output, " 2. Structural patterns")?;
        writeln!(self.output, " 3. Behavioral patterns")?;
        writeln!(self.output, " 4. Show all patterns")?;
        writeln!(self.output, " Q. Quit")?;
        write!(self.output, "Select: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        let _ = self.read_line()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(MenuState::MainMenu.name(), "MainMenu");
        assert_eq!(
            MenuState::CategoryList(Category::Creational).name(),
            "CategoryList"
        );
        assert_eq!(MenuState::PatternDetail(3).name(), "PatternDetail");
        assert_eq!(MenuState::AllPatternsList.name(), "AllPatternsList");
        assert_eq!(MenuState::Terminated.name(), "Terminated");
    }

    #[test]
    fn test_is_terminated() {
        assert!(MenuState::Terminated.is_terminated());
        assert!(!MenuState::MainMenu.is_terminated());
        assert!(!MenuState::AllPatternsList.is_terminated());
    }
}
