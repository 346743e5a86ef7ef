#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (including its newline) and
/// the offset of `position` within that line. A position equal to the source
/// length maps onto the last line so end-of-input errors can still be shown.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last_line = Some((line_number, line.to_string(), line.len()));
        start = end;
        line_number += 1;
    }

    if pos == source.len() {
        return last_line.or(Some((1, String::new(), 0)));
    }

    None
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnrecognisedCharacter
/// -> shell
///   |
/// 1 | a = % 5;
///   | ----^
/// ```
pub fn render_diagnostic(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (String::from(trimmed), string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{lexer::lexer::tokenize, parser::parser::parse};

    const SOURCE: &str = "a = 1;\nb = 2;\n  c = % 3;\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "a = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 20).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "  c = % 3;\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("a = 5", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "a = 5");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("a = 5", 6).is_none());
    }

    #[test]
    fn test_render_lexical_diagnostic() {
        let error = tokenize(SOURCE.to_string(), Some("prog.txt".to_string())).unwrap_err();
        let rendered = super::render_diagnostic(&error, SOURCE);

        assert_eq!(
            rendered,
            "Error: UnrecognisedCharacter\n-> prog.txt\n  |\n3 | c = % 3;\n  | ----^\n"
        );
    }

    #[test]
    fn test_render_syntax_diagnostic_has_tip() {
        let source = "a = 5";
        let tokens = tokenize(source.to_string(), None).unwrap();
        let error = parse(tokens).unwrap_err();
        let rendered = super::render_diagnostic(&error, source);

        assert!(rendered.starts_with("Error: MissingSemicolon ("));
        assert!(rendered.contains("-> shell\n"));
        assert!(rendered.ends_with("1 | a = 5\n  | -----^\n"));
    }
}
