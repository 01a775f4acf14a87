use crate::Show;

/// Glyph used whenever an epsilon transition is rendered for humans, be it in the
/// textual dump, the transition table or the DOT output. It is therefore not accepted as an
/// alphabet symbol.
pub const EPSILON_GLYPH: char = '~';

/// The label of a transition. Either a concrete character, which must be part of the
/// alphabet of the automaton, or [`Symbol::Epsilon`], which consumes no input and never
/// needs to be registered.
///
/// `Epsilon` is ordered before every concrete character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// The empty transition.
    Epsilon,
    /// A transition reading the given character.
    Char(char),
}

impl Symbol {
    /// Returns `true` if `self` is [`Symbol::Epsilon`].
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Returns the concrete character, or `None` for epsilon.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Char(c) => Some(*c),
        }
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol::Char(value)
    }
}

impl Show for Symbol {
    fn show(&self) -> String {
        match self {
            Symbol::Epsilon => EPSILON_GLYPH.to_string(),
            Symbol::Char(c) => c.to_string(),
        }
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

/// Decides whether `c` may be used as an alphabet symbol: it has to be visible, so control
/// characters and whitespace are rejected.
pub fn is_printable(c: char) -> bool {
    !c.is_control() && !c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_characters() {
        assert!(is_printable('a'));
        assert!(is_printable('#'));
        assert!(is_printable('é'));
        assert!(!is_printable(' '));
        assert!(!is_printable('\t'));
        assert!(!is_printable('\0'));
    }

    #[test]
    fn epsilon_sorts_first_and_shows_as_glyph() {
        assert!(Symbol::Epsilon < Symbol::from('!'));
        assert_eq!(Symbol::Epsilon.show(), "~");
        assert_eq!(Symbol::from('x').show(), "x");
        assert_eq!(Symbol::Epsilon.as_char(), None);
        assert!(!Symbol::Char('a').is_epsilon());
    }
}
