//! RGB color values parsed from hex notation

use crate::io::error::{PatternError, Result};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Construct a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (case-insensitive, leading `#` required)
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidColor`] if the text is not a hex color
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || PatternError::InvalidColor {
            value: value.to_string(),
        };

        let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(invalid)
        };

        match digits.len() {
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                // #abc expands to #aabbcc
                let expand = |v: u8| v * 0x11;
                Ok(Self::new(
                    expand(channel(0..1)?),
                    expand(channel(1..2)?),
                    expand(channel(2..3)?),
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// Brightest of the three channels
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Whether the color is dark enough to sit behind generated shapes
    pub fn is_dark(self, threshold: u8) -> bool {
        self.max_channel() <= threshold
    }
}

impl FromStr for Rgb {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
