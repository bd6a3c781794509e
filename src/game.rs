//! Interactive game between a human and a move searcher.
//!
//! Each turn the board is rendered, then the side to move either types a
//! point in SGF notation (human) or runs the searcher. Input that cannot be
//! decoded or played is logged and asked again. The game ends when the side
//! to move has already lost or won, or when the input runs out.
//!
//! ## Example
//!
//! ```ignore
//! use atari_rust::game::Game;
//! let mut game = Game::new(stdin, stdout, encoder, searcher, board, Color::Black);
//! game.run()?;
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::encoder::StoneStorageEncoder;
use crate::glyphs::encode_color;
use crate::models::{Board, Color, GameError, Move};
use crate::search::MoveSearcher;
use crate::sgf::{decode_point, encode_board, encode_point};
use crate::side::Side;

/// How a game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `color` was to move in a decided game.
    Finished { color: Color, result: GameError },
    /// The human input ended before the game did.
    Interrupted,
}

enum Turn {
    Move(Move),
    Retry,
    GameOver(GameError),
    EndOfInput,
}

pub struct Game<R, W, S> {
    reader: R,
    writer: W,
    encoder: StoneStorageEncoder,
    searcher: S,
    board: Board,
    human_color: Color,
    side: Side,
}

impl<R: BufRead, W: Write, S: MoveSearcher> Game<R, W, S> {
    pub fn new(
        reader: R,
        writer: W,
        encoder: StoneStorageEncoder,
        searcher: S,
        board: Board,
        human_color: Color,
    ) -> Self {
        Self {
            reader,
            writer,
            encoder,
            searcher,
            board,
            human_color,
            side: Side::new(human_color),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the game is decided or the input ends.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            let color = match self.side {
                Side::Human => self.human_color,
                Side::Searcher => self.human_color.negative(),
            };
            let turn = match self.side {
                Side::Human => self.read_move(color)?,
                Side::Searcher => self.search_move(color)?,
            };

            let mv = match turn {
                Turn::Move(mv) => mv,
                Turn::Retry => continue,
                Turn::GameOver(result) => {
                    writeln!(self.writer, "{}", make_prompt(color, result))?;
                    self.writer.flush()?;
                    info!("game over: {} {}", encode_color(color), result);
                    return Ok(Outcome::Finished { color, result });
                }
                Turn::EndOfInput => {
                    writeln!(self.writer)?;
                    self.writer.flush()?;
                    info!("input ended before the game");
                    return Ok(Outcome::Interrupted);
                }
            };

            self.board = self.board.apply_move(&mv);
            self.side = self.side.invert();
            debug!("position {}", encode_board(&self.board));
        }
    }

    /// Renders the board and the prompt for `color`, unless the game is
    /// already decided for it.
    fn write_prompt(&mut self, color: Color) -> Result<Option<GameError>> {
        writeln!(self.writer, "{}", self.encoder.encode(&self.board))?;
        if let Err(err) = self.board.legal_moves(color) {
            return Ok(Some(err));
        }

        let mark = match self.side {
            Side::Searcher => "(searching) ",
            Side::Human => "",
        };
        // no line break: the answer follows the prompt
        write!(self.writer, "{}", make_prompt(color, mark))?;
        self.writer.flush()?;
        Ok(None)
    }

    fn read_move(&mut self, color: Color) -> Result<Turn> {
        if let Some(err) = self.write_prompt(color)? {
            return Ok(Turn::GameOver(err));
        }

        let mut text = String::new();
        let read = self
            .reader
            .read_line(&mut text)
            .context("unable to read the move")?;
        if read == 0 {
            return Ok(Turn::EndOfInput);
        }

        let point = match decode_point(&text) {
            Ok(point) => point,
            Err(err) => {
                warn!("unable to decode the point: {err}");
                return Ok(Turn::Retry);
            }
        };
        let mv = Move::new(color, point);
        if let Err(err) = self.board.check_move(&mv) {
            warn!("incorrect move: {err}");
            return Ok(Turn::Retry);
        }
        Ok(Turn::Move(mv))
    }

    fn search_move(&mut self, color: Color) -> Result<Turn> {
        if let Some(err) = self.write_prompt(color)? {
            return Ok(Turn::GameOver(err));
        }

        match self.searcher.search_move(&self.board, color) {
            Ok(mv) => {
                writeln!(self.writer, "{}", encode_point(mv.point))?;
                Ok(Turn::Move(mv))
            }
            Err(err) => {
                writeln!(self.writer)?;
                Ok(Turn::GameOver(err))
            }
        }
    }
}

fn make_prompt(color: Color, data: impl Display) -> String {
    format!("{}> {}", encode_color(color), data)
}
