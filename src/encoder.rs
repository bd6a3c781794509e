//! Text layout of a board: stone rows, axis legends and margins.
//!
//! The encoder is configured once and then renders any number of boards.
//! Rendering is a pure function of the configuration and the board.
//!
//! ## Example
//!
//! ```
//! use atari_rust::encoder::StoneStorageEncoder;
//! use atari_rust::glyphs::encode_ascii_stone;
//! use atari_rust::margins::Margins;
//! use atari_rust::models::{Board, Size};
//!
//! let encoder =
//!     StoneStorageEncoder::flat(Box::new(encode_ascii_stone), "x", Margins::default(), 1);
//! let board = Board::new(Size::square(3));
//! assert_eq!(encoder.encode(&board), "cxxx\nbxxx\naxxx\n abc");
//! ```

use log::trace;

use crate::margins::{HorizontalMargins, Margins, VerticalMargins};
use crate::models::{Color, StoneStorage};
use crate::sgf::encode_axis;

/// Maps a stone color to its glyph. The glyph may carry terminal escapes.
pub type StoneEncoder = Box<dyn Fn(Color) -> String + Send + Sync>;

/// Fill used for legends, board margins and flat placeholders.
const BLANK: &str = " ";

/// Width of one axis label.
const LEGEND_WIDTH: usize = 1;

/// Symbols drawn where no stone is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholders {
    /// Fills the horizontal stone margins of stone rows.
    pub horizontal_line: String,
    /// Fills the filler lines between stone rows.
    pub vertical_line: String,
    /// Drawn at an empty intersection.
    pub crosshairs: String,
}

impl Placeholders {
    pub fn new(
        horizontal_line: impl Into<String>,
        vertical_line: impl Into<String>,
        crosshairs: impl Into<String>,
    ) -> Self {
        Self {
            horizontal_line: horizontal_line.into(),
            vertical_line: vertical_line.into(),
            crosshairs: crosshairs.into(),
        }
    }

    /// A single symbol at empty intersections and no grid lines.
    pub fn flat(symbol: impl Into<String>) -> Self {
        Self::new(BLANK, BLANK, symbol)
    }
}

pub struct StoneStorageEncoder {
    encoder: StoneEncoder,
    placeholders: Placeholders,
    margins: Margins,
    stone_width: usize,
}

impl StoneStorageEncoder {
    /// `stone_width` is the number of terminal columns one stone glyph
    /// takes; column labels and filler-line separators are padded to it.
    /// Values below 1 count as 1.
    pub fn new(
        encoder: StoneEncoder,
        placeholders: Placeholders,
        margins: Margins,
        stone_width: usize,
    ) -> Self {
        Self {
            encoder,
            placeholders,
            margins,
            stone_width: stone_width.max(1),
        }
    }

    /// An encoder without grid lines, see [`Placeholders::flat`].
    pub fn flat(
        encoder: StoneEncoder,
        placeholder: impl Into<String>,
        margins: Margins,
        stone_width: usize,
    ) -> Self {
        Self::new(encoder, Placeholders::flat(placeholder), margins, stone_width)
    }

    /// Renders the board, highest row first, column legend last.
    ///
    /// Lines are joined by `\n` without a trailing newline. A row is closed
    /// when the traversal reaches the column `height - 1`, so the layout is
    /// only regular for square boards.
    pub fn encode<S: StoneStorage + ?Sized>(&self, storage: &S) -> String {
        let size = storage.size();
        let stone_margins = self.margins.stone;
        let legend_margins = self.margins.legend;
        let last_column = size.height.wrapping_sub(1);

        let mut rows = Vec::new();
        let mut current_row = String::new();
        for point in storage.points() {
            if current_row.is_empty() {
                let axis = encode_axis(point.row).to_string();
                current_row += &wrap_with_symbols(&axis, legend_margins.row, BLANK);
            }

            let stone = match storage.stone(point) {
                Some(color) => (self.encoder)(color),
                None => self.placeholders.crosshairs.clone(),
            };
            current_row += &wrap_with_symbols(
                &stone,
                stone_margins.horizontal,
                &self.placeholders.horizontal_line,
            );

            if point.column == last_column {
                rows.push(std::mem::take(&mut current_row));
            }
        }
        rows.reverse();

        let mut lines = Vec::new();
        for row in rows {
            lines.extend(self.wrap_with_filler_lines(
                vec![row],
                size.width,
                stone_margins.vertical,
                &self.placeholders.vertical_line,
            ));
        }

        let mut legend_row = BLANK.repeat(legend_margins.row.width(LEGEND_WIDTH));
        for column in 0..size.width {
            let axis = self.pad_to_stone(&encode_axis(column).to_string());
            legend_row += &wrap_with_symbols(&axis, stone_margins.horizontal, BLANK);
        }
        lines.extend(self.wrap_with_filler_lines(
            vec![legend_row],
            size.width,
            legend_margins.column,
            BLANK,
        ));

        let lines = self.wrap_with_filler_lines(lines, size.width, self.margins.board, BLANK);
        trace!(
            "encoded {}x{} board into {} lines",
            size.width,
            size.height,
            lines.len()
        );
        lines.join("\n")
    }

    fn wrap_with_filler_lines(
        &self,
        lines: Vec<String>,
        width: usize,
        margins: VerticalMargins,
        separator: &str,
    ) -> Vec<String> {
        let mut wrapped = Vec::with_capacity(margins.top + lines.len() + margins.bottom);
        wrapped.extend(self.filler_lines(margins.top, width, separator));
        wrapped.extend(lines);
        wrapped.extend(self.filler_lines(margins.bottom, width, separator));
        wrapped
    }

    fn filler_lines(
        &self,
        count: usize,
        width: usize,
        separator: &str,
    ) -> impl Iterator<Item = String> {
        let line = self.filler_line(width, separator);
        std::iter::repeat_n(line, count)
    }

    /// A line with the stone rows' horizontal structure and `separator` in
    /// place of every stone.
    fn filler_line(&self, width: usize, separator: &str) -> String {
        let stone_margins = self.margins.stone.horizontal;
        let legend_margins = self.margins.legend.row;

        let mut line = BLANK.repeat(legend_margins.width(LEGEND_WIDTH));
        for _ in 0..width {
            line += &BLANK.repeat(stone_margins.left);
            line += &self.pad_to_stone(separator);
            line += &BLANK.repeat(stone_margins.right);
        }
        line
    }

    /// Pads a one-column symbol to the width of a stone glyph.
    fn pad_to_stone(&self, symbol: &str) -> String {
        let mut padded = symbol.to_string();
        padded += &BLANK.repeat(self.stone_width - 1);
        padded
    }
}

fn wrap_with_symbols(text: &str, margins: HorizontalMargins, symbol: &str) -> String {
    let mut wrapped = symbol.repeat(margins.left);
    wrapped += text;
    wrapped += &symbol.repeat(margins.right);
    wrapped
}
