//! Contains the [`Chars`] and [`Span`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{AddAssign, Sub, SubAssign},
};

/// An offset into the source, counted in characters rather than bytes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Chars(usize);
impl Chars {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Chars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Chars> for usize {
    fn from(chars: Chars) -> Self {
        chars.0
    }
}
impl AddAssign<usize> for Chars {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl SubAssign<usize> for Chars {
    fn sub_assign(&mut self, rhs: usize) {
        *self = Self(self.0 - rhs)
    }
}
impl Sub<Chars> for Chars {
    type Output = usize;

    fn sub(self, rhs: Chars) -> Self::Output {
        self.0 - rhs.0
    }
}

/// A half-open range of character offsets.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Chars,
    end: Chars,
}
impl Span {
    pub fn new(start: Chars, end: Chars) -> Self {
        debug_assert!(start <= end, "span must not end before it starts");
        Self { start, end }
    }

    /// A zero-width span at `position`.
    pub fn empty(position: Chars) -> Self {
        Self::new(position, position)
    }

    pub fn length(&self) -> usize {
        self.end - self.start
    }

    pub fn start(&self) -> Chars {
        self.start
    }

    pub fn end(&self) -> Chars {
        self.end
    }

    /// Collects the characters covered by this span.
    pub fn lookup(&self, target: &[char]) -> String {
        target[self.start.into()..self.end.into()].iter().collect()
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
