//! Rendering of errors that point at a position in the source.
use crate::{
    source_map::{column, split_lines},
    span::Chars,
};

/// Full-width space, so the caret lines up under full-width source text.
const CARET_PADDING: char = '\u{3000}';

pub trait PositionalError {
    fn kind(&self) -> String;
    fn message(&self) -> Option<&str>;
    fn position(&self) -> Chars;
    fn line_number(&self) -> usize;
    fn line_start(&self) -> Chars;

    fn column(&self) -> usize {
        column(self.position(), self.line_number(), self.line_start())
    }
}

/// Renders `err` against the source it was raised for.
pub fn describe_error<E: PositionalError + ?Sized>(err: &E, source: &str) -> String {
    render(
        &err.kind(),
        err.message(),
        &split_lines(source),
        err.line_number(),
        err.column(),
    )
}

/// Builds a diagnostic: the error kind, the message if there is one, then the
/// source lines with a caret line inserted below line `line_number`.
///
/// ```text
/// UnexpectedChar
/// Unexpected char "ぬ".
/// すぬもも。
/// 　^
/// ```
pub fn render(
    kind: &str,
    message: Option<&str>,
    lines: &[&str],
    line_number: usize,
    column: usize,
) -> String {
    let caret: String = std::iter::repeat(CARET_PADDING)
        .take(column)
        .chain(std::iter::once('^'))
        .collect();
    let split = (line_number + 1).min(lines.len());

    let mut output = vec![kind];
    output.extend(message.filter(|message| !message.is_empty()));
    output.extend_from_slice(&lines[..split]);
    output.push(&caret);
    output.extend_from_slice(&lines[split..]);

    output.join("\n")
}
