//! SGF-style notation for axes, points, colors and board setups.
//!
//! Axes are lowercase letters (`a` is index 0). A point is its column
//! letter followed by its row letter, so `ba` is column 1, row 0.
//!
//! Board setups use a small subset of SGF:
//!
//! ```text
//! (;SZ[5]AB[bb][ac]AW[cb])
//! ```
//!
//! `SZ` takes `n` or `width:height`, `AB` and `AW` list black and white
//! stones. Other properties are skipped.

use thiserror::Error;

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::models::{Board, Color, Move, Point, Size, StoneStorage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SgfError {
    #[error("incorrect axis {0:?}")]
    Axis(char),
    #[error("incorrect point {0:?}")]
    Point(String),
    #[error("incorrect color {0:?}")]
    Color(char),
    #[error("incorrect size {0:?}")]
    Size(String),
    #[error("unexpected end of the board notation")]
    UnexpectedEnd,
    #[error("unexpected character {0:?} in the board notation")]
    UnexpectedChar(char),
    #[error("size must be set before the stones")]
    LateSize,
    #[error("unable to place the stone at {point:?}: {reason}")]
    Stone { point: String, reason: String },
}

/// Letter of an axis index. Indexes past `z` continue along the code
/// points and are not decodable.
pub fn encode_axis(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|index| char::from_u32(u32::from(b'a') + index))
        .unwrap_or('?')
}

pub fn decode_axis(symbol: char) -> Result<usize, SgfError> {
    if !symbol.is_ascii_lowercase() {
        return Err(SgfError::Axis(symbol));
    }
    Ok((symbol as u8 - b'a') as usize)
}

pub fn encode_point(point: Point) -> String {
    format!("{}{}", encode_axis(point.column), encode_axis(point.row))
}

pub fn decode_point(text: &str) -> Result<Point, SgfError> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(column), Some(row), None) => {
            let column = decode_axis(column).map_err(|_| SgfError::Point(text.to_string()))?;
            let row = decode_axis(row).map_err(|_| SgfError::Point(text.to_string()))?;
            Ok(Point::new(column, row))
        }
        _ => Err(SgfError::Point(text.to_string())),
    }
}

pub fn encode_color(color: Color) -> char {
    match color {
        Color::Black => 'B',
        Color::White => 'W',
    }
}

pub fn decode_color(symbol: char) -> Result<Color, SgfError> {
    match symbol {
        'B' => Ok(Color::Black),
        'W' => Ok(Color::White),
        _ => Err(SgfError::Color(symbol)),
    }
}

/// Builds a board from its SGF setup. Empty text gives an empty board of
/// the default size.
pub fn decode_board(text: &str) -> Result<Board, SgfError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Board::new(Size::square(DEFAULT_BOARD_SIZE)));
    }

    let mut parser = Parser::new(text);
    parser.expect('(')?;
    parser.expect(';')?;

    let mut size = None;
    let mut moves = Vec::new();
    while let Some(symbol) = parser.peek() {
        if symbol == ')' {
            break;
        }
        let name = parser.property_name()?;
        let values = parser.property_values()?;
        match name.as_str() {
            "SZ" => {
                if !moves.is_empty() {
                    return Err(SgfError::LateSize);
                }
                let value = values.first().ok_or(SgfError::UnexpectedEnd)?;
                size = Some(decode_size(value)?);
            }
            "AB" | "AW" => {
                let symbol = name.chars().nth(1).ok_or(SgfError::UnexpectedEnd)?;
                let color = decode_color(symbol)?;
                for value in &values {
                    moves.push(Move::new(color, decode_point(value)?));
                }
            }
            _ => {}
        }
    }
    parser.expect(')')?;
    if let Some(symbol) = parser.peek() {
        return Err(SgfError::UnexpectedChar(symbol));
    }

    let size = size.unwrap_or(Size::square(DEFAULT_BOARD_SIZE));
    let mut board = Board::new(size);
    for mv in moves {
        if !size.contains(mv.point) || board.stone(mv.point).is_some() {
            let reason = if size.contains(mv.point) {
                "point is not empty"
            } else {
                "point is out of the board"
            };
            return Err(SgfError::Stone {
                point: encode_point(mv.point),
                reason: reason.to_string(),
            });
        }
        board = board.apply_move(&mv);
    }
    Ok(board)
}

/// Inverse of [`decode_board`]: stones are listed row by row.
pub fn encode_board<S: StoneStorage + ?Sized>(storage: &S) -> String {
    let size = storage.size();
    let mut text = if size.width == size.height {
        format!("(;SZ[{}]", size.width)
    } else {
        format!("(;SZ[{}:{}]", size.width, size.height)
    };
    for (name, color) in [("AB", Color::Black), ("AW", Color::White)] {
        let points: Vec<Point> = storage
            .points()
            .into_iter()
            .filter(|&point| storage.stone(point) == Some(color))
            .collect();
        if points.is_empty() {
            continue;
        }
        text += name;
        for point in points {
            text += &format!("[{}]", encode_point(point));
        }
    }
    text.push(')');
    text
}

fn decode_size(value: &str) -> Result<Size, SgfError> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .filter(|&side| (1..=MAX_BOARD_SIZE).contains(&side))
            .ok_or_else(|| SgfError::Size(value.to_string()))
    };
    match value.split_once(':') {
        Some((width, height)) => Ok(Size::new(parse(width)?, parse(height)?)),
        None => Ok(Size::square(parse(value)?)),
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.peek().copied()
    }

    fn expect(&mut self, expected: char) -> Result<(), SgfError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.chars.next();
                Ok(())
            }
            Some(c) => Err(SgfError::UnexpectedChar(c)),
            None => Err(SgfError::UnexpectedEnd),
        }
    }

    fn property_name(&mut self) -> Result<String, SgfError> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_uppercase()) {
            name.push(c);
        }
        if name.is_empty() {
            return match self.chars.peek() {
                Some(&c) => Err(SgfError::UnexpectedChar(c)),
                None => Err(SgfError::UnexpectedEnd),
            };
        }
        Ok(name)
    }

    fn property_values(&mut self) -> Result<Vec<String>, SgfError> {
        let mut values = Vec::new();
        while self.peek() == Some('[') {
            self.chars.next();
            let mut value = String::new();
            loop {
                match self.chars.next() {
                    Some(']') => break,
                    Some(c) => value.push(c),
                    None => return Err(SgfError::UnexpectedEnd),
                }
            }
            values.push(value);
        }
        if values.is_empty() {
            return match self.peek() {
                Some(c) => Err(SgfError::UnexpectedChar(c)),
                None => Err(SgfError::UnexpectedEnd),
            };
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis() {
        assert_eq!(encode_axis(0), 'a');
        assert_eq!(encode_axis(25), 'z');
        assert_eq!(decode_axis('c'), Ok(2));
        assert_eq!(decode_axis('C'), Err(SgfError::Axis('C')));
    }

    #[test]
    fn test_point() {
        assert_eq!(encode_point(Point::new(1, 0)), "ba");
        assert_eq!(decode_point("ba"), Ok(Point::new(1, 0)));
        assert_eq!(decode_point(" cd\n"), Ok(Point::new(2, 3)));
        assert!(decode_point("b").is_err());
        assert!(decode_point("bad").is_err());
        assert!(decode_point("b1").is_err());
    }

    #[test]
    fn test_color() {
        assert_eq!(encode_color(Color::Black), 'B');
        assert_eq!(decode_color('W'), Ok(Color::White));
        assert_eq!(decode_color('x'), Err(SgfError::Color('x')));
    }

    #[test]
    fn test_decode_empty_board() {
        let board = decode_board("").unwrap();
        assert_eq!(board.size(), Size::square(DEFAULT_BOARD_SIZE));
        assert!(board.points().iter().all(|&p| board.stone(p).is_none()));
    }

    #[test]
    fn test_decode_board() {
        let board = decode_board("(;SZ[3]AB[bb]AW[ba][ab])").unwrap();
        assert_eq!(board.size(), Size::square(3));
        assert_eq!(board.stone(Point::new(1, 1)), Some(Color::Black));
        assert_eq!(board.stone(Point::new(1, 0)), Some(Color::White));
        assert_eq!(board.stone(Point::new(0, 1)), Some(Color::White));
        assert_eq!(board.stone(Point::new(2, 2)), None);
    }

    #[test]
    fn test_decode_board_skips_unknown_properties() {
        let board = decode_board("(; GM[1] SZ[4:3] C[comment] AB[aa] )").unwrap();
        assert_eq!(board.size(), Size::new(4, 3));
        assert_eq!(board.stone(Point::new(0, 0)), Some(Color::Black));
    }

    #[test]
    fn test_decode_board_errors() {
        assert_eq!(decode_board("(;SZ[3]"), Err(SgfError::UnexpectedEnd));
        assert_eq!(decode_board("SZ[3]"), Err(SgfError::UnexpectedChar('S')));
        assert_eq!(decode_board("(;SZ[0])"), Err(SgfError::Size("0".to_string())));
        assert_eq!(decode_board("(;AB[aa]SZ[3])"), Err(SgfError::LateSize));
        assert!(matches!(
            decode_board("(;SZ[2]AB[cc])"),
            Err(SgfError::Stone { .. })
        ));
        assert!(matches!(
            decode_board("(;AB[aa]AW[aa])"),
            Err(SgfError::Stone { .. })
        ));
    }

    #[test]
    fn test_encode_board() {
        let text = "(;SZ[3]AB[bb]AW[ba][ab])";
        let board = decode_board(text).unwrap();
        assert_eq!(encode_board(&board), "(;SZ[3]AB[bb]AW[ba][ab])");
        assert_eq!(
            encode_board(&Board::new(Size::new(2, 4))),
            "(;SZ[2:4])"
        );
    }
}
