//! Errors raised while lexing.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::Chars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorType {
    /// The source could not be read as a string.
    #[error("InvalidInput")]
    InvalidInput,
    #[error("UnexpectedChar")]
    UnexpectedChar,
    #[error("UnexpectedEof")]
    UnexpectedEof,
}

/// A fatal lexing error, along with the scan state at the moment it was raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub error_type: ErrorType,
    pub message: Option<String>,
    pub position: Chars,
    pub line_number: usize,
    pub line_start: Chars,
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.error_type, message),
            None => write!(f, "{}", self.error_type),
        }
    }
}

impl PositionalError for LexError {
    fn kind(&self) -> String {
        self.error_type.to_string()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn position(&self) -> Chars {
        self.position
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn line_start(&self) -> Chars {
        self.line_start
    }
}
