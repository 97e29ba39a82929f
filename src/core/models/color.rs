//! Terminal color specifications
//!
//! A color is parsed from a phrase such as `bold red on bright blue`. Colors are
//! combined with [`Color::blend`]: attributes accumulate and the other color's
//! foreground/background, when set, replace ours.

use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};
use thiserror::Error;

/// Error parsing a color phrase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A word that is neither a color name nor an attribute
    #[error("unrecognized color word: {0}")]
    UnknownWord(String),
}

/// One of the eight base terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseColor {
    /// black
    Black,
    /// red
    Red,
    /// green
    Green,
    /// yellow
    Yellow,
    /// blue
    Blue,
    /// magenta
    Magenta,
    /// cyan
    Cyan,
    /// white
    White,
}

impl BaseColor {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word {
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    const fn to_colored(self, bright: bool) -> colored::Color {
        use colored::Color as C;
        match (self, bright) {
            (Self::Black, false) => C::Black,
            (Self::Red, false) => C::Red,
            (Self::Green, false) => C::Green,
            (Self::Yellow, false) => C::Yellow,
            (Self::Blue, false) => C::Blue,
            (Self::Magenta, false) => C::Magenta,
            (Self::Cyan, false) => C::Cyan,
            (Self::White, false) => C::White,
            (Self::Black, true) => C::BrightBlack,
            (Self::Red, true) => C::BrightRed,
            (Self::Green, true) => C::BrightGreen,
            (Self::Yellow, true) => C::BrightYellow,
            (Self::Blue, true) => C::BrightBlue,
            (Self::Magenta, true) => C::BrightMagenta,
            (Self::Cyan, true) => C::BrightCyan,
            (Self::White, true) => C::BrightWhite,
        }
    }
}

/// A foreground or background color, optionally bright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    /// Base color
    pub base: BaseColor,
    /// Bright variant
    pub bright: bool,
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bright {
            write!(f, "bright {}", self.base.as_str())
        } else {
            f.write_str(self.base.as_str())
        }
    }
}

/// A parsed color specification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    /// Foreground color
    pub fg: Option<Shade>,
    /// Background color
    pub bg: Option<Shade>,
    /// Bold text
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// Swapped foreground/background
    pub inverse: bool,
}

impl Color {
    /// Parse a color phrase, logging and ignoring anything unrecognized
    #[must_use]
    pub fn parse_lossy(spec: &str) -> Self {
        spec.parse().unwrap_or_else(|e: ColorError| {
            log::warn!("ignoring color '{spec}': {e}");
            Self::default()
        })
    }

    /// An underline-only color
    #[must_use]
    pub const fn underlined() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            underline: true,
            inverse: false,
        }
    }

    /// Whether applying this color changes anything
    #[must_use]
    pub const fn nontrivial(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || self.bold || self.underline || self.inverse
    }

    /// Blend another color into this one
    pub fn blend(&mut self, other: &Self) {
        self.bold |= other.bold;
        self.underline |= other.underline;
        self.inverse |= other.inverse;
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
    }

    /// Return a blended copy
    #[must_use]
    pub fn blended(mut self, other: &Self) -> Self {
        self.blend(other);
        self
    }

    /// Apply this color to text
    #[must_use]
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(fg) = self.fg {
            painted = painted.color(fg.base.to_colored(fg.bright));
        }
        if let Some(bg) = self.bg {
            painted = painted.on_color(bg.base.to_colored(bg.bright));
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.underline {
            painted = painted.underline();
        }
        if self.inverse {
            painted = painted.reversed();
        }
        painted
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut color = Self::default();
        let mut background = false;
        let mut bright = false;

        for word in s.split_whitespace().map(str::to_lowercase) {
            match word.as_str() {
                "bold" => color.bold = true,
                "underline" => color.underline = true,
                "inverse" => color.inverse = true,
                "bright" => bright = true,
                "on" => background = true,
                other => {
                    let (name, is_bright) = other
                        .strip_prefix("bright_")
                        .map_or((other, bright), |rest| (rest, true));
                    let base = BaseColor::from_word(name)
                        .ok_or_else(|| ColorError::UnknownWord(other.to_string()))?;
                    let shade = Shade {
                        base,
                        bright: is_bright,
                    };
                    if background {
                        color.bg = Some(shade);
                    } else {
                        color.fg = Some(shade);
                    }
                    bright = false;
                },
            }
        }

        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<String> = Vec::new();
        if self.bold {
            words.push("bold".to_string());
        }
        if self.underline {
            words.push("underline".to_string());
        }
        if self.inverse {
            words.push("inverse".to_string());
        }
        if let Some(fg) = self.fg {
            words.push(fg.to_string());
        }
        if let Some(bg) = self.bg {
            words.push(format!("on {bg}"));
        }
        f.write_str(&words.join(" "))
    }
}
