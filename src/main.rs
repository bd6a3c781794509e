//! Atari-Rust: Atari Go against a Monte Carlo searcher.
//!
//! ## Usage
//!
//! - `atari-rust` - Play a game (same as `atari-rust play`)
//! - `atari-rust render` - Print the board and exit
//! - `atari-rust render --as-sgf` - Print the board setup in SGF and exit
//!
//! Moves are typed in SGF notation: column letter then row letter, `ba` is
//! the second column of the bottom row. Set `RUST_LOG=debug` to see the
//! search statistics.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::info;

use atari_rust::config::DisplayOptions;
use atari_rust::constants::{
    DEFAULT_BLACK_COLOR, DEFAULT_DURATION, DEFAULT_PASSES, DEFAULT_WHITE_COLOR,
};
use atari_rust::game::{Game, Outcome};
use atari_rust::glyphs::{Palette, decode_color};
use atari_rust::models::{Board, Color, StoneStorage};
use atari_rust::search::{MonteCarloSearcher, SearchSettings};
use atari_rust::encoder::StoneStorageEncoder;
use atari_rust::sgf::{decode_board, encode_board};

/// Atari-Rust: Atari Go in the terminal
#[derive(Parser)]
#[command(name = "atari-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board in Smart Game Format (default: empty board 5x5)
    #[arg(long, global = true, default_value = "")]
    sgf: String,

    /// Human color (allowed: random, black, white)
    #[arg(long, global = true, default_value = "random")]
    human_color: String,

    /// Building passes per searched move
    #[arg(long, global = true, default_value_t = DEFAULT_PASSES)]
    passes: usize,

    /// Building duration per searched move (e.g. 72h3m0.5s)
    #[arg(long, global = true, default_value = DEFAULT_DURATION, value_parser = humantime::parse_duration)]
    duration: Duration,

    /// Use Unicode to display stones
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    unicode: bool,

    /// Use colors to display stones
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    colorful: bool,

    /// SGR parameter of ANSI escape sequences for black stones
    #[arg(long, global = true, default_value_t = DEFAULT_BLACK_COLOR)]
    black_color: u8,

    /// SGR parameter of ANSI escape sequences for white stones
    #[arg(long, global = true, default_value_t = DEFAULT_WHITE_COLOR)]
    white_color: u8,

    /// Display the board wide
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    wide: bool,

    /// Display the board grid
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    grid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the searcher
    Play,
    /// Print the board and exit
    Render {
        /// Print the board in Smart Game Format instead of drawing it
        #[arg(long)]
        as_sgf: bool,
    },
}

impl Cli {
    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            unicode: self.unicode,
            colorful: self.colorful,
            palette: Palette {
                black: self.black_color,
                white: self.white_color,
            },
            wide: self.wide,
            grid: self.grid,
        }
    }

    fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            passes: self.passes,
            duration: self.duration,
        }
    }

    fn pick_human_color(&self) -> Result<Color> {
        match decode_color(&self.human_color) {
            Ok(color) => Ok(color),
            Err(_) if self.human_color == "random" => {
                Ok(if fastrand::bool() { Color::Black } else { Color::White })
            }
            Err(err) => bail!("unable to decode the color: {err}"),
        }
    }
}

/// Decodes the starting position. Rows only line up on square boards, so
/// other sizes are refused.
fn load_board(sgf: &str) -> Result<Board> {
    let board = decode_board(sgf).context("unable to decode the board")?;
    let size = board.size();
    if !size.is_square() {
        bail!(
            "unsupported board size {}x{}: the board must be square",
            size.width,
            size.height
        );
    }
    Ok(board)
}

fn render(board: &Board, encoder: &StoneStorageEncoder, as_sgf: bool) -> String {
    if as_sgf {
        encode_board(board)
    } else {
        encoder.encode(board)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let board = load_board(&cli.sgf)?;
    let encoder = cli.display_options().build_encoder();

    match &cli.command {
        Some(Commands::Render { as_sgf }) => {
            println!("{}", render(&board, &encoder, *as_sgf));
        }
        Some(Commands::Play) | None => {
            let human_color = cli.pick_human_color()?;
            info!("human plays {human_color:?}");

            let searcher = MonteCarloSearcher::new(cli.search_settings());
            let stdin = io::stdin();
            let mut game = Game::new(
                stdin.lock(),
                io::stdout(),
                encoder,
                searcher,
                board,
                human_color,
            );
            if game.run()? == Outcome::Interrupted {
                info!("game interrupted");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atari_rust::models::Size;

    #[test]
    fn test_duration_flag() {
        let cli = Cli::try_parse_from(["atari-rust", "--duration", "1m30s"]).unwrap();
        assert_eq!(cli.search_settings().duration, Duration::from_secs(90));

        let cli = Cli::try_parse_from(["atari-rust", "render", "--duration", "0.5s"]).unwrap();
        assert_eq!(cli.search_settings().duration, Duration::from_millis(500));

        let cli = Cli::try_parse_from(["atari-rust"]).unwrap();
        assert_eq!(cli.search_settings().duration, Duration::from_secs(10));

        assert!(Cli::try_parse_from(["atari-rust", "--duration", "10"]).is_err());
    }

    #[test]
    fn test_load_board_requires_square() {
        assert_eq!(load_board("(;SZ[3])").unwrap().size(), Size::square(3));
        assert_eq!(load_board("").unwrap().size(), Size::square(5));
        assert!(load_board("(;SZ[4:2])").is_err());
        assert!(load_board("(;SZ[2:3])").is_err());
        assert!(load_board("(;SZ[3").is_err());
    }

    #[test]
    fn test_render_as_sgf() {
        let cli = Cli::try_parse_from(["atari-rust", "render", "--as-sgf", "--unicode", "false"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Render { as_sgf: true })));

        let encoder = cli.display_options().build_encoder();
        let board = load_board("(; GM[1] SZ[3] AW[ba] AB[bb] )").unwrap();
        assert_eq!(render(&board, &encoder, true), "(;SZ[3]AB[bb]AW[ba])");
        assert_eq!(render(&board, &encoder, false), encoder.encode(&board));
    }
}
