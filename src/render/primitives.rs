use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` must be #rgb or #rrggbb"
                )));
            }
        };

        let channel = |range: std::ops::Range<usize>| -> ChartResult<f64> {
            let raw = expanded.get(range).ok_or_else(|| {
                ChartError::InvalidData(format!("color `{input}` is not ASCII hex"))
            })?;
            u8::from_str_radix(raw, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("color `{input}` is not valid hex")))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Horizontal text alignment relative to the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchoring relative to the anchor y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

/// Font selection for label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_pt: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_pt: f64) -> Self {
        Self {
            family: family.into(),
            size_pt,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Helvetica", 8.0)
    }
}
