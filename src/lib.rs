#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the full line text and the offset of
/// `position` within that line. An offset at the very end of the source maps
/// onto the last line, which is where end-of-input diagnostics point.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character of the last line.
    let last = content.split_inclusive('\n').last()?;
    let trimmed = last.trim_end_matches('\n');
    Some((line_number - 1, trimmed.to_string(), trimmed.len()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "Hello, world!\nlet x = 5;\n\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("let x", 6).is_none());
    }

    #[test]
    fn test_render_error_points_at_offending_token() {
        let source = "let x 5;";
        let tokens = crate::lexer::lexer::tokenize(source.to_string(), Some("test.lang".to_string()));
        let (parser, _) = crate::parser::parser::parse(crate::lexer::source::TokenStream::new(tokens));

        let rendered = super::render_error(&parser.errors()[0], source, "test.lang");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token: `5`, expected `=`)");
        assert_eq!(lines[1], "-> test.lang");
        assert_eq!(lines[3], "1 | let x 5;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_error_counts_characters_for_caret() {
        let source = "\"éé\"; let 5;";
        let (parser, _) = crate::parser::parser::parse_source(source, Some("test.lang".to_string()));

        let rendered = super::render_error(&parser.errors()[0], source, "test.lang");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | \"éé\"; let 5;");
        assert_eq!(lines[4], "  | ----------^");
    }

    #[test]
    fn test_render_error_without_tip() {
        let source = "let x =";
        let (parser, _) = crate::parser::parser::parse_source(source, Some("test.lang".to_string()));

        let rendered = super::render_error(&parser.errors()[0], source, "test.lang");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: NoPrefixParseFn");
        assert_eq!(lines[3], "1 | let x =");
        assert_eq!(lines[4], "  | -------^");
    }
}

/// Renders a diagnostic the way the command line prints it:
///
/// ```text
/// Error: message
/// -> main.mk
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        output.push_str(&format!("   {}\n", error));
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
