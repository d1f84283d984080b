//! Character classes of the sumomo vocabulary.
pub const OPEN_BRACKET: char = 'す';
pub const SEPARATOR: char = '、';
/// The close bracket, `のうち。`. Its first character doubles as a digit.
pub const CLOSE_BRACKET: [char; 4] = ['の', 'う', 'ち', '。'];

pub trait CharExt {
    fn is_line_terminator(&self) -> bool;

    /// Either of the two characters making up literals and operators.
    fn is_numeral(&self) -> bool;

    /// One of the seven characters the lexer gives meaning to.
    fn is_meaningful(&self) -> bool;

    fn is_filler(&self) -> bool {
        !self.is_meaningful()
    }
}
impl CharExt for char {
    fn is_line_terminator(&self) -> bool {
        matches!(*self, '\n' | '\r' | '\u{2028}' | '\u{2029}')
    }

    fn is_numeral(&self) -> bool {
        matches!(*self, 'も' | 'の')
    }

    fn is_meaningful(&self) -> bool {
        self.is_numeral()
            || *self == OPEN_BRACKET
            || *self == SEPARATOR
            || CLOSE_BRACKET.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_seven_characters() {
        let meaningful: Vec<char> = "すもの、うち。abc 　\n"
            .chars()
            .filter(CharExt::is_meaningful)
            .collect();

        assert_eq!(meaningful, vec!['す', 'も', 'の', '、', 'う', 'ち', '。']);
    }

    #[test]
    fn line_terminators_are_filler() {
        for ch in ['\n', '\r', '\u{2028}', '\u{2029}'] {
            assert!(ch.is_line_terminator());
            assert!(ch.is_filler());
        }
        assert!(!' '.is_line_terminator());
    }

    #[test]
    fn only_mo_and_no_are_digits() {
        assert!('も'.is_numeral());
        assert!('の'.is_numeral());
        assert!(!'す'.is_numeral());
        assert!(!'う'.is_numeral());
    }
}
