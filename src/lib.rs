//! Atari-Rust: play Atari Go ("first capture wins") in the terminal.
//!
//! The heart of the crate is the text layout of a board: stone rows, axis
//! legends, optional grid lines and margins, rendered by
//! [`encoder::StoneStorageEncoder`] from anything implementing
//! [`models::StoneStorage`].
//!
//! ## Modules
//!
//! - [`encoder`] - Board to text layout
//! - [`margins`] - Padding around stones, legends and the board
//! - [`models`] - Colors, points, moves and the Atari Go board
//! - [`sgf`] - SGF notation for axes, points and board setups
//! - [`glyphs`] - Stone glyphs, color names and terminal colors
//! - [`config`] - Display settings and the encoder they build
//! - [`search`] - Monte Carlo move search
//! - [`side`] - Human or searcher to move
//! - [`game`] - Interactive game loop
//! - [`constants`] - Defaults
//!
//! ## Example
//!
//! ```
//! use atari_rust::encoder::{Placeholders, StoneStorageEncoder};
//! use atari_rust::glyphs::encode_sgf_stone;
//! use atari_rust::margins::Margins;
//! use atari_rust::sgf::decode_board;
//!
//! let board = decode_board("(;SZ[3]AB[bb]AW[ba])").unwrap();
//! let encoder = StoneStorageEncoder::new(
//!     Box::new(encode_sgf_stone),
//!     Placeholders::flat("+"),
//!     Margins::default(),
//!     1,
//! );
//! assert_eq!(encoder.encode(&board), "c+++\nb+B+\na+W+\n abc");
//! ```

pub mod config;
pub mod constants;
pub mod encoder;
pub mod game;
pub mod glyphs;
pub mod margins;
pub mod models;
pub mod search;
pub mod sgf;
pub mod side;
