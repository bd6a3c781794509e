//! Board model for Atari Go ("first capture wins").
//!
//! The board is a plain grid of optional stones. Captured stones are never
//! removed: the first capture ends the game, so a board only has to answer
//! whether some group is left without liberties.

use std::fmt;

use thiserror::Error;

use crate::encoder::StoneStorageEncoder;
use crate::glyphs::encode_sgf_stone;
use crate::margins::Margins;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opponent's color.
    pub fn negative(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A board intersection. `row` is the rank axis, `column` the file axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub column: usize,
    pub row: usize,
}

impl Point {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Only square boards lay out as a regular grid.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.column < self.width && point.row < self.height
    }

    /// Every point of the board, rows ascending, columns ascending within
    /// a row.
    pub fn points(&self) -> Vec<Point> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |column| Point::new(column, row)))
            .collect()
    }

    fn index(&self, point: Point) -> usize {
        point.row * self.width + point.column
    }

    fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
        let mut v = Vec::with_capacity(4);
        if point.column > 0 {
            v.push(Point::new(point.column - 1, point.row));
        }
        if point.column + 1 < self.width {
            v.push(Point::new(point.column + 1, point.row));
        }
        if point.row > 0 {
            v.push(Point::new(point.column, point.row - 1));
        }
        if point.row + 1 < self.height {
            v.push(Point::new(point.column, point.row + 1));
        }
        v.into_iter()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub point: Point,
}

impl Move {
    pub fn new(color: Color, point: Point) -> Self {
        Self { color, point }
    }
}

/// Why a single move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("point is out of the board")]
    OutOfBounds,
    #[error("point is not empty")]
    Occupied,
    #[error("move is a self-capture")]
    SelfCapture,
}

/// The game is already decided for the color asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("already loss")]
    AlreadyLoss,
    #[error("already win")]
    AlreadyWin,
}

/// Read-only access to the stones of a board.
///
/// `points()` must visit every point exactly once, row by row, with the
/// column index growing fastest. The text encoder relies on that order.
pub trait StoneStorage {
    fn size(&self) -> Size;

    fn stone(&self, point: Point) -> Option<Color>;

    fn points(&self) -> Vec<Point> {
        self.size().points()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: Size,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![None; size.width * size.height],
        }
    }

    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        if !self.size.contains(mv.point) {
            return Err(MoveError::OutOfBounds);
        }
        if self.stone(mv.point).is_some() {
            return Err(MoveError::Occupied);
        }

        let next = self.apply_move(mv);
        if next.group_liberties(mv.point) == 0 && !next.has_capture(mv.color.negative()) {
            return Err(MoveError::SelfCapture);
        }
        Ok(())
    }

    /// Returns a copy of the board with the move's stone placed.
    ///
    /// The move should have passed [`Board::check_move`]; a point outside
    /// the board leaves the copy unchanged.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        if self.size.contains(mv.point) {
            let i = self.size.index(mv.point);
            next.cells[i] = Some(mv.color);
        }
        next
    }

    /// Whether some group of `color` has no liberties left.
    pub fn has_capture(&self, color: Color) -> bool {
        let mut visited = vec![false; self.cells.len()];
        for point in self.size.points() {
            if visited[self.size.index(point)] || self.stone(point) != Some(color) {
                continue;
            }
            if self.flood_group(point, &mut visited) == 0 {
                return true;
            }
        }
        false
    }

    /// All moves `color` may play, or the verdict if the game is over.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<Move>, GameError> {
        if self.has_capture(color) {
            return Err(GameError::AlreadyLoss);
        }
        if self.has_capture(color.negative()) {
            return Err(GameError::AlreadyWin);
        }

        let moves: Vec<Move> = self
            .size
            .points()
            .into_iter()
            .map(|point| Move::new(color, point))
            .filter(|mv| self.check_move(mv).is_ok())
            .collect();
        if moves.is_empty() {
            return Err(GameError::AlreadyLoss);
        }
        Ok(moves)
    }

    fn group_liberties(&self, start: Point) -> usize {
        if self.stone(start).is_none() {
            return 0;
        }
        let mut visited = vec![false; self.cells.len()];
        self.flood_group(start, &mut visited)
    }

    /// Marks the group containing `start` as visited and counts its
    /// distinct liberties.
    fn flood_group(&self, start: Point, visited: &mut [bool]) -> usize {
        let Some(color) = self.stone(start) else {
            return 0;
        };
        let mut liberty_visited = vec![false; self.cells.len()];
        let mut stack = vec![start];
        let mut liberties = 0;
        while let Some(point) = stack.pop() {
            let i = self.size.index(point);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            for neighbor in self.size.neighbors(point) {
                let ni = self.size.index(neighbor);
                match self.stone(neighbor) {
                    None if !liberty_visited[ni] => {
                        liberty_visited[ni] = true;
                        liberties += 1;
                    }
                    Some(c) if c == color && !visited[ni] => stack.push(neighbor),
                    _ => {}
                }
            }
        }
        liberties
    }
}

impl StoneStorage for Board {
    fn size(&self) -> Size {
        self.size
    }

    fn stone(&self, point: Point) -> Option<Color> {
        if !self.size.contains(point) {
            return None;
        }
        self.cells[self.size.index(point)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoder =
            StoneStorageEncoder::flat(Box::new(encode_sgf_stone), "+", Margins::default(), 1);
        f.write_str(&encoder.encode(self))
    }
}
