//! Which player moves next.

use crate::models::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Searcher,
    Human,
}

impl Side {
    /// The side to move first, given the human's color. Black opens.
    pub fn new(human_color: Color) -> Self {
        match human_color {
            Color::Black => Side::Human,
            Color::White => Side::Searcher,
        }
    }

    pub fn invert(self) -> Self {
        match self {
            Side::Searcher => Side::Human,
            Side::Human => Side::Searcher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Side::new(Color::Black), Side::Human);
        assert_eq!(Side::new(Color::White), Side::Searcher);
    }

    #[test]
    fn test_invert() {
        assert_eq!(Side::Human.invert(), Side::Searcher);
        assert_eq!(Side::Searcher.invert(), Side::Human);
    }
}
