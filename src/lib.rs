//! A lexer for sumomo, a language written with seven characters.
//!
//! [`lex`] turns source text into a flat stream of tokens. Failures carry the
//! scan state they were raised at and can be rendered with
//! [`error::describe_error`].
pub mod error;
pub mod lexer;
pub mod source_map;
pub mod span;

pub use lexer::{lex, lex_bytes, Lexer};
