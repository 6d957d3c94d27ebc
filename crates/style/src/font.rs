use serde::{de, Deserialize, Deserializer, Serialize};

/// The three faces a flyer uses. Any CSS-style weight snaps to the nearest.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }

    /// `100..=300` is light, `400..=500` regular, `600` and up bold.
    pub fn from_numeric(weight: u16) -> Self {
        match weight {
            0..=349 => FontWeight::Light,
            350..=549 => FontWeight::Regular,
            _ => FontWeight::Bold,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" | "thin" => Some(FontWeight::Light),
            "regular" | "normal" | "medium" => Some(FontWeight::Regular),
            "bold" | "semibold" | "black" => Some(FontWeight::Bold),
            other => other.parse().ok().map(Self::from_numeric),
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Weight(u16),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => Self::from_name(&name)
                .ok_or_else(|| de::Error::custom(format!("Invalid font weight: '{}'", name))),
            Raw::Weight(weight) => Ok(Self::from_numeric(weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_snap_to_available_faces() {
        assert_eq!(FontWeight::from_numeric(100), FontWeight::Light);
        assert_eq!(FontWeight::from_numeric(500), FontWeight::Regular);
        assert_eq!(FontWeight::from_numeric(600), FontWeight::Bold);

        let parsed: FontWeight = serde_json::from_str("\"800\"").unwrap();
        assert_eq!(parsed, FontWeight::Bold);
        let parsed: FontWeight = serde_json::from_str("300").unwrap();
        assert_eq!(parsed, FontWeight::Light);
        assert!(serde_json::from_str::<FontWeight>("\"heavy-ish\"").is_err());
    }
}
