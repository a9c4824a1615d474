#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{scan_line, tokenize_line};
pub use lexer::tokens::{ErrorUnit, ScanItem, Token, TokenKind};

/// Byte offset within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub fn render_diagnostic(error: &Error, file: &str, line_number: usize, line_text: &str) -> String {
    /*
        Error: UnrecognisedCharacter (`:` is only valid as part of `:=`)
        -> input.limp
           |
         3 | a : b
           | --^
    */

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    _ = writeln!(out, "-> {}", file);
    _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let position = error.get_position().0.min(line_text.len());
    let column = line_text
        .get(..position)
        .map_or(0, |prefix| prefix.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use crate::{lexer::lexer::tokenize_line, render_diagnostic};

    #[test]
    fn test_render_diagnostic_points_at_column() {
        let error = tokenize_line("a : b").unwrap_err();
        let rendered = render_diagnostic(&error, "input.limp", 3, "a : b");

        assert_eq!(
            rendered,
            "Error: UnrecognisedCharacter (`:` is only valid as part of `:=`)\n\
             -> input.limp\n  |\n3 | a : b\n  | --^"
        );
    }

    #[test]
    fn test_render_diagnostic_skips_indentation() {
        let error = tokenize_line("    x # y").unwrap_err();
        let rendered = render_diagnostic(&error, "input.limp", 12, "    x # y");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedCharacter");
        assert_eq!(lines[3], "12 | x # y");
        assert_eq!(lines[4], "   | --^");
    }
}
