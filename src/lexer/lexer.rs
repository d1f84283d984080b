//! Lexing functions for constructing a token stream.
use std::str::Utf8Error;

use log::{debug, trace};

use crate::{source_map::find_line, span::*};

use super::{char_ext::*, char_lexer::*, error::*, tokens::*};

type LexResult<T> = Result<T, LexError>;

/// Tokenizes sumomo source, holding on to the tokens of its last successful run.
#[derive(Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexes `source`, replacing any tokens kept from a previous run.
    /// On failure no tokens are kept.
    pub fn lex(&mut self, source: &str) -> LexResult<&[Token]> {
        self.tokens.clear();
        self.tokens = lex(source)?;
        Ok(&self.tokens)
    }

    /// Like [`Lexer::lex`], but for source that has not been decoded yet.
    pub fn lex_bytes(&mut self, source: &[u8]) -> LexResult<&[Token]> {
        self.tokens.clear();
        self.tokens = lex_bytes(source)?;
        Ok(&self.tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    let chars: Vec<char> = source.chars().collect();
    Scanner::new(&chars).run()
}

/// Lexes UTF-8 encoded source. Anything that does not decode fails with
/// [`ErrorType::InvalidInput`], pointing at the first undecodable byte.
pub fn lex_bytes(source: &[u8]) -> LexResult<Vec<Token>> {
    match std::str::from_utf8(source) {
        Ok(source) => lex(source),
        Err(err) => Err(invalid_input(source, err)),
    }
}

fn invalid_input(source: &[u8], err: Utf8Error) -> LexError {
    let valid = String::from_utf8_lossy(&source[..err.valid_up_to()]);
    let position = Chars::new(valid.chars().count());
    let context = find_line(&valid, position);

    LexError {
        error_type: ErrorType::InvalidInput,
        message: Some(format!("Source is not valid UTF-8: {}", err)),
        position,
        line_number: context.line_number,
        line_start: context.line_start,
    }
}

/// State for a single run over one source. Dropped once the run finishes.
struct Scanner<'s> {
    lexer: CharLexer<'s>,
    line_start: Chars,
    line_number: usize,
    tokens: Vec<Token>,
}

impl<'s> Scanner<'s> {
    fn new(source: &'s [char]) -> Self {
        Self {
            lexer: CharLexer::new(source),
            line_start: Chars::new(0),
            line_number: 0,
            tokens: vec![],
        }
    }

    /// Finishes the scanner and consumes it, producing a [`Vec<Token>`]
    /// containing the tokens it read.
    fn run(mut self) -> LexResult<Vec<Token>> {
        while !self.lexer.is_finished() {
            self.skip_filler();
            self.expression(false)?;
        }

        debug!(
            "Lexed {} tokens from {} characters over {} lines",
            self.tokens.len(),
            self.lexer.len(),
            self.line_number + 1
        );
        Ok(self.tokens)
    }

    /// Reads one expression: either a bracketed compound or a bare number literal.
    /// Only a top-level expression may find the end of the input instead.
    fn expression(&mut self, nested: bool) -> LexResult<()> {
        self.skip_filler();

        match self.lexer.peek() {
            None if nested => {
                return Err(self.make_error(
                    ErrorType::UnexpectedChar,
                    "Expected an expression but came end of input.".to_string(),
                ));
            }
            None => {
                let eof = Span::empty(self.lexer.position());
                self.push_span(TokenKind::Eof, eof, None);
                return Ok(());
            }
            Some(OPEN_BRACKET) => {
                self.open_bracket()?;
                self.digit_run(TokenKind::Operator)?;
                self.parameters()?;
                self.close_bracket()?;
            }
            Some(ch) if ch.is_numeral() => {
                // A literal can't be directly followed by the rest of a close bracket.
                if self.lexer.peek_nth(1) == Some(CLOSE_BRACKET[1]) {
                    return Err(self.make_error(
                        ErrorType::UnexpectedChar,
                        format!("\"{}\" starts a close bracket with nothing to close.", ch),
                    ));
                }
                self.digit_run(TokenKind::NumberLiteral)?;
            }
            Some(ch) => {
                return Err(self.make_error(
                    ErrorType::UnexpectedChar,
                    format!("Unexpected char \"{}\".", ch),
                ));
            }
        }

        self.skip_filler();
        Ok(())
    }

    fn parameters(&mut self) -> LexResult<()> {
        while self.lexer.recognise(SEPARATOR) {
            self.expression(true)?;
        }
        Ok(())
    }

    /// Reads a run of digit characters as a token of the given kind.
    ///
    /// If the run stops right before `う`, its last `の` belongs to the close
    /// bracket, so the lexer backs up over it before building the token.
    fn digit_run(&mut self, kind: TokenKind) -> LexResult<()> {
        let start = self.lexer.position();
        self.lexer.consume_while(CharExt::is_numeral);

        match self.lexer.peek() {
            None => {
                return Err(self.make_error(
                    ErrorType::UnexpectedEof,
                    format!("Reached the end of input while reading {}.", kind),
                ));
            }
            Some(ch) if ch == CLOSE_BRACKET[1] && self.lexer.position() > start => {
                self.lexer.back_up();
            }
            Some(_) => {}
        }

        let end = self.lexer.position();
        if end == start {
            return Err(self.make_error(
                ErrorType::UnexpectedChar,
                format!("Expected {} but came {}.", kind, self.found()),
            ));
        }

        let value = Span::new(start, end).lookup(self.lexer.source());
        self.push_token(kind, start, Some(value));
        Ok(())
    }

    fn open_bracket(&mut self) -> LexResult<()> {
        let start = self.lexer.position();
        self.expect(OPEN_BRACKET)?;
        self.push_token(TokenKind::OpenBracket, start, None);
        Ok(())
    }

    fn close_bracket(&mut self) -> LexResult<()> {
        let start = self.lexer.position();
        for expected in CLOSE_BRACKET {
            self.expect(expected)?;
        }
        self.push_token(TokenKind::CloseBracket, start, None);
        Ok(())
    }

    /// Consumes `expected`, or fails without consuming anything.
    fn expect(&mut self, expected: char) -> LexResult<()> {
        if self.lexer.recognise(expected) {
            return Ok(());
        }

        Err(self.make_error(
            ErrorType::UnexpectedChar,
            format!("Expected \"{}\" but came {}.", expected, self.found()),
        ))
    }

    /// Skips everything outside the sumomo vocabulary, keeping track of lines.
    fn skip_filler(&mut self) {
        while let Some(ch) = self.lexer.peek().filter(CharExt::is_filler) {
            if ch.is_line_terminator() {
                self.line_start = self.lexer.position();
                self.line_number += 1;
            }
            self.lexer.try_next();
        }
    }

    fn found(&self) -> String {
        match self.lexer.peek() {
            Some(ch) => format!("\"{}\"", ch),
            None => "end of input".to_string(),
        }
    }

    /// Pushes a token covering everything from `start` up to the current position.
    fn push_token(&mut self, kind: TokenKind, start: Chars, value: Option<String>) {
        let range = Span::new(start, self.lexer.position());
        self.push_span(kind, range, value);
    }

    fn push_span(&mut self, kind: TokenKind, range: Span, value: Option<String>) {
        let token = Token {
            kind,
            value,
            line_number: self.line_number,
            line_start: self.line_start,
            range,
        };
        trace!("{} at {:?}", token, token.range);
        self.tokens.push(token);
    }

    fn make_error(&self, error_type: ErrorType, message: String) -> LexError {
        LexError {
            error_type,
            message: Some(message),
            position: self.lexer.position(),
            line_number: self.line_number,
            line_start: self.line_start,
        }
    }
}
