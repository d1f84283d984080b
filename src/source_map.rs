//! Functionality for looking up lines and columns in the source code.
use crate::{lexer::CharExt, span::Chars};

/// Splits `source` at every line terminator. A `\r\n` pair counts as two
/// terminators, leaving an empty line between them.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split(|ch: char| ch.is_line_terminator()).collect()
}

/// The column of `position`, given the line state the lexer tracked for it.
///
/// `line_start` is the offset of the terminator ending the previous line, so
/// past the first line the terminator itself is not counted.
pub fn column(position: Chars, line_number: usize, line_start: Chars) -> usize {
    if line_number == 0 {
        position.into()
    } else {
        (position - line_start).saturating_sub(1)
    }
}

/// Line information for a character position, tracked the same way the lexer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext {
    pub line_number: usize,
    pub line_start: Chars,
}

/// Finds the line state at `target_position`, the character offset into `source`.
pub fn find_line(source: &str, target_position: Chars) -> LineContext {
    let mut context = LineContext {
        line_number: 0,
        line_start: Chars::new(0),
    };

    let mut position = Chars::new(0);
    for ch in source.chars() {
        if position >= target_position {
            break;
        }
        if ch.is_line_terminator() {
            context.line_number += 1;
            context.line_start = position;
        }
        position += 1;
    }

    context
}
