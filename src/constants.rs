//! Default values shared by the board model, the searcher and the CLI.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the board used when no SGF setup is given.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Largest board side the axis codec can label (`a` to `z`).
pub const MAX_BOARD_SIZE: usize = 26;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default number of playouts per searched move.
pub const DEFAULT_PASSES: usize = 1000;

/// Default wall-clock budget per searched move, in `humantime` notation.
pub const DEFAULT_DURATION: &str = "10s";

/// Exploration factor of the UCB1 score.
pub const UCB_FACTOR: f64 = std::f64::consts::SQRT_2;

// =============================================================================
// Display
// =============================================================================

/// SGR parameter for black stones (blue).
pub const DEFAULT_BLACK_COLOR: u8 = 34;

/// SGR parameter for white stones (red).
pub const DEFAULT_WHITE_COLOR: u8 = 31;

/// Terminal columns taken by one stone glyph.
pub const STONE_WIDTH: usize = 1;
