use crate::span::Chars;

/// Cursor over a slice of characters with position information.
///
/// Lookahead goes through [`CharLexer::peek_nth`] without consuming anything,
/// and [`CharLexer::back_up`] gives back the last consumed character.
pub struct CharLexer<'a> {
    chars: &'a [char],
    position: Chars,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given characters,
    /// starting at position `0`.
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            position: Chars::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.peek();
        if next.is_some() {
            self.position += 1;
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Returns the character `n` places after the next one, without consuming anything.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(usize::from(self.position) + n).copied()
    }

    /// Steps back over the most recently consumed character.
    /// Panics if nothing has been consumed yet.
    pub fn back_up(&mut self) {
        assert!(
            self.position > Chars::new(0),
            "Unable to back up past the start of the input"
        );
        self.position -= 1;
    }

    /// Retrieves the character position of the lexer.
    pub fn position(&self) -> Chars {
        self.position
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        match self.peek() {
            Some(ch) if ch == character => {
                self.position += 1;
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the number of characters consumed.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if !predicate(&ch) {
                break;
            }
            self.position += 1;
        }
        self.position - start
    }

    /// The total number of characters in the input.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&self) -> bool {
        self.peek().is_none()
    }

    pub fn source(&self) -> &'a [char] {
        self.chars
    }
}
