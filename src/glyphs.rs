//! Stone glyphs, color names and terminal colors.

use thiserror::Error;

use crate::models::Color;
use crate::sgf::encode_color as encode_sgf_color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color {0:?} (allowed: black, white)")]
pub struct ColorError(pub String);

pub fn encode_ascii_stone(color: Color) -> String {
    match color {
        Color::Black => "*",
        Color::White => "o",
    }
    .to_string()
}

pub fn encode_unicode_stone(color: Color) -> String {
    match color {
        Color::Black => "\u{25cf}",
        Color::White => "\u{25cb}",
    }
    .to_string()
}

pub fn encode_sgf_stone(color: Color) -> String {
    encode_sgf_color(color).to_string()
}

/// Name of a color as typed and shown by the CLI.
pub fn encode_color(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

pub fn decode_color(text: &str) -> Result<Color, ColorError> {
    match text.trim().to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "white" => Ok(Color::White),
        _ => Err(ColorError(text.to_string())),
    }
}

/// SGR parameters for the stones of each color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub black: u8,
    pub white: u8,
}

impl Palette {
    pub fn code(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Wraps `text` in the escape sequence for `color` and a reset.
pub fn colorize(text: &str, color: Color, palette: Palette) -> String {
    format!("{}{}{}", set_tty_mode(palette.code(color)), text, set_tty_mode(0))
}

fn set_tty_mode(mode: u8) -> String {
    format!("\x1b[{mode}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_stone() {
        assert_eq!(encode_ascii_stone(Color::Black), "*");
        assert_eq!(encode_ascii_stone(Color::White), "o");
    }

    #[test]
    fn test_unicode_stone() {
        assert_eq!(encode_unicode_stone(Color::Black), "\u{25cf}");
        assert_eq!(encode_unicode_stone(Color::White), "\u{25cb}");
    }

    #[test]
    fn test_sgf_stone() {
        assert_eq!(encode_sgf_stone(Color::Black), "B");
        assert_eq!(encode_sgf_stone(Color::White), "W");
    }

    #[test]
    fn test_color_names() {
        assert_eq!(encode_color(Color::White), "white");
        assert_eq!(decode_color("black"), Ok(Color::Black));
        assert_eq!(decode_color(" White "), Ok(Color::White));
        assert_eq!(
            decode_color("random"),
            Err(ColorError("random".to_string()))
        );
    }

    #[test]
    fn test_colorize() {
        let palette = Palette {
            black: 34,
            white: 31,
        };
        assert_eq!(colorize("o", Color::White, palette), "\x1b[31mo\x1b[0m");
        assert_eq!(colorize("*", Color::Black, palette), "\x1b[34m*\x1b[0m");
    }
}
