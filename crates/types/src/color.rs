use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Color must start with #, got: {0}")]
    MissingHash(String),
    #[error("Invalid hex color length: expected 3 or 6, got {0}")]
    InvalidLength(usize),
    #[error("Invalid {channel} component in '{input}'")]
    InvalidComponent { channel: &'static str, input: String },
}

/// An opaque sRGB color. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        let component = |channel: &'static str, digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidComponent {
                channel,
                input: s.to_string(),
            })
        };

        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidComponent { channel: "red", input: s.to_string() });
        }

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component("red", &hex[0..1].repeat(2))?;
                let g = component("green", &hex[1..2].repeat(2))?;
                let b = component("blue", &hex[2..3].repeat(2))?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = component("red", &hex[0..2])?;
                let g = component("green", &hex[2..4])?;
                let b = component("blue", &hex[4..6])?;
                Ok(Color { r, g, b })
            }
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
