//! Functionality for converting sumomo source into a [`Token`] stream.
mod char_ext;
mod char_lexer;
mod error;
mod lexer;

pub mod tokens;

pub use char_ext::{CharExt, CLOSE_BRACKET, OPEN_BRACKET, SEPARATOR};
pub use error::{ErrorType, LexError};
pub use lexer::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Token;
