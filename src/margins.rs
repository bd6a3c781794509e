//! Padding around stones, legends and the whole rendered board.
//!
//! Every value counts character cells. Zero means no padding.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HorizontalMargins {
    pub left: usize,
    pub right: usize,
}

impl HorizontalMargins {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Width of `content_width` cells once padded.
    pub fn width(&self, content_width: usize) -> usize {
        self.left + self.right + content_width
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VerticalMargins {
    pub top: usize,
    pub bottom: usize,
}

impl VerticalMargins {
    pub const fn new(top: usize, bottom: usize) -> Self {
        Self { top, bottom }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StoneMargins {
    pub horizontal: HorizontalMargins,
    pub vertical: VerticalMargins,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegendMargins {
    /// Above and below the column legend row.
    pub column: VerticalMargins,
    /// Left and right of the row legend column.
    pub row: HorizontalMargins,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Margins {
    pub stone: StoneMargins,
    pub legend: LegendMargins,
    pub board: VerticalMargins,
}
