//! Terminal presentation: colors, section headers, labels and the shared
//! text helpers every command renders with.
//!
//! Output goes through a [`Printer`] bound to any [`std::io::Write`], so the
//! commands render the same way to stdout and to a buffer in tests.

pub mod errors;
pub mod format;

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::Stylize;

const DIVIDER_WIDTH: usize = 50;

/// Whether ANSI styling is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    pub fn colored() -> Self {
        Self { colored: true }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Colored unless `--no-color` was passed or `NO_COLOR` is set.
    pub fn detect(no_color_flag: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color_flag || no_color_env {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Yellow accent used for recipe names and step durations.
    pub fn highlight(&self, text: &str) -> String {
        if self.colored {
            text.dark_yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.colored {
            text.bold().dark_cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }

    fn bullet(&self) -> String {
        if self.colored {
            "*".dark_green().to_string()
        } else {
            "*".to_string()
        }
    }
}

/// Line-oriented writer with the catalog's visual vocabulary.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    theme: Theme,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// `=== text ===` with a blank line on each side.
    pub fn header(&mut self, text: &str) -> io::Result<()> {
        let title = self.theme.header(&format!("=== {} ===", text));
        writeln!(self.out, "\n{}\n", title)
    }

    pub fn subheader(&mut self, text: &str) -> io::Result<()> {
        let title = self.theme.bold(text);
        writeln!(self.out, "{}", title)
    }

    /// `  name: value`, with the name dimmed.
    pub fn label(&mut self, name: &str, value: impl Display) -> io::Result<()> {
        let name = self.theme.dim(&format!("{}:", name));
        writeln!(self.out, "  {} {}", name, value)
    }

    pub fn list_item(&mut self, text: impl Display, indent: usize) -> io::Result<()> {
        let bullet = self.theme.bullet();
        writeln!(self.out, "{}{} {}", "  ".repeat(indent), bullet, text)
    }

    pub fn divider(&mut self) -> io::Result<()> {
        let rule = self.theme.dim(&"─".repeat(DIVIDER_WIDTH));
        writeln!(self.out, "{}", rule)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        let text = if self.theme.colored {
            text.dark_yellow().to_string()
        } else {
            text.to_string()
        };
        writeln!(self.out, "{}", text)
    }
}
