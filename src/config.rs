//! Display settings chosen on the command line and the encoder they build.

use crate::constants::STONE_WIDTH;
use crate::encoder::{Placeholders, StoneEncoder, StoneStorageEncoder};
use crate::glyphs::{Palette, colorize, encode_sgf_stone, encode_unicode_stone};
use crate::margins::{
    HorizontalMargins, LegendMargins, Margins, StoneMargins, VerticalMargins,
};

const ASCII_PLACEHOLDERS: [&str; 3] = ["-", "|", "+"];
const UNICODE_PLACEHOLDERS: [&str; 3] = ["\u{2500}", "\u{2502}", "\u{253c}"];

const BASE_WIDE_MARGINS: Margins = Margins {
    stone: StoneMargins {
        horizontal: HorizontalMargins::new(0, 0),
        vertical: VerticalMargins::new(0, 0),
    },
    legend: LegendMargins {
        column: VerticalMargins::new(1, 0),
        row: HorizontalMargins::new(0, 1),
    },
    board: VerticalMargins::new(1, 1),
};

const WIDE_STONE_MARGINS: StoneMargins = StoneMargins {
    horizontal: HorizontalMargins::new(1, 0),
    vertical: VerticalMargins::new(0, 1),
};

/// Room for grid lines on every side of a stone.
const EXTRA_WIDE_STONE_MARGINS: StoneMargins = StoneMargins {
    horizontal: HorizontalMargins::new(1, 1),
    vertical: VerticalMargins::new(1, 1),
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Unicode stones and box-drawing grid instead of ASCII.
    pub unicode: bool,
    /// Stones wrapped in terminal color escapes.
    pub colorful: bool,
    pub palette: Palette,
    /// Spread the board out with margins.
    pub wide: bool,
    /// Draw grid lines between intersections.
    pub grid: bool,
}

impl DisplayOptions {
    pub fn placeholders(&self) -> Placeholders {
        let [horizontal, vertical, crosshairs] = if self.unicode {
            UNICODE_PLACEHOLDERS
        } else {
            ASCII_PLACEHOLDERS
        };
        if self.grid {
            Placeholders::new(horizontal, vertical, crosshairs)
        } else {
            Placeholders::flat(crosshairs)
        }
    }

    pub fn margins(&self) -> Margins {
        if !self.wide {
            return Margins::default();
        }

        let mut margins = BASE_WIDE_MARGINS;
        margins.stone = if self.grid {
            EXTRA_WIDE_STONE_MARGINS
        } else {
            WIDE_STONE_MARGINS
        };
        margins
    }

    pub fn stone_encoder(&self) -> StoneEncoder {
        let base: fn(_) -> String = if self.unicode {
            encode_unicode_stone
        } else {
            encode_sgf_stone
        };
        if !self.colorful {
            return Box::new(base);
        }

        let palette = self.palette;
        Box::new(move |color| colorize(&base(color), color, palette))
    }

    pub fn build_encoder(&self) -> StoneStorageEncoder {
        StoneStorageEncoder::new(
            self.stone_encoder(),
            self.placeholders(),
            self.margins(),
            STONE_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BLACK_COLOR, DEFAULT_WHITE_COLOR};
    use crate::models::{Board, Color, Move, Point, Size};

    fn options(unicode: bool, colorful: bool, wide: bool, grid: bool) -> DisplayOptions {
        DisplayOptions {
            unicode,
            colorful,
            palette: Palette {
                black: DEFAULT_BLACK_COLOR,
                white: DEFAULT_WHITE_COLOR,
            },
            wide,
            grid,
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            options(false, false, false, true).placeholders(),
            Placeholders::new("-", "|", "+")
        );
        assert_eq!(
            options(true, false, false, false).placeholders(),
            Placeholders::flat("\u{253c}")
        );
    }

    #[test]
    fn test_margins() {
        assert_eq!(options(false, false, false, true).margins(), Margins::default());

        let wide = options(false, false, true, false).margins();
        assert_eq!(wide.stone, WIDE_STONE_MARGINS);
        assert_eq!(wide.legend.row, HorizontalMargins::new(0, 1));
        assert_eq!(wide.board, VerticalMargins::new(1, 1));

        let grid = options(false, false, true, true).margins();
        assert_eq!(grid.stone, EXTRA_WIDE_STONE_MARGINS);
    }

    #[test]
    fn test_stone_encoder() {
        let plain = options(false, false, false, false).stone_encoder();
        assert_eq!(plain(Color::Black), "B");

        let colorful = options(true, true, false, false).stone_encoder();
        assert_eq!(colorful(Color::White), "\x1b[31m\u{25cb}\x1b[0m");
    }

    #[test]
    fn test_build_encoder_wide_without_grid() {
        let encoder = options(false, false, true, false).build_encoder();
        let board = Board::new(Size::square(2))
            .apply_move(&Move::new(Color::Black, Point::new(0, 1)));
        let want = [
            "      ", "b  B +", "      ", "a  + +", "      ", "      ", "   a b", "      ",
        ]
        .join("\n");
        assert_eq!(encoder.encode(&board), want);
    }
}
