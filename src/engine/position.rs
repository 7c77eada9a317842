use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical position category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Strict parse of a position label; `None` for anything unrecognized.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "gk" | "goalkeeper" | "keeper" => Some(Self::Goalkeeper),
            "def" | "defender" | "df" => Some(Self::Defender),
            "mid" | "midfielder" | "mf" => Some(Self::Midfielder),
            "fwd" | "forward" | "fw" | "striker" => Some(Self::Forward),
            _ => None,
        }
    }

    /// Tolerant parse: unrecognized or missing labels fall back to midfield.
    pub fn normalize(label: Option<&str>) -> Self {
        match label.and_then(Self::parse_label) {
            Some(position) => position,
            None => {
                tracing::warn!(
                    label = label.unwrap_or("<missing>"),
                    "unrecognized position label, defaulting to MID"
                );
                Self::Midfielder
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_accepts_synonyms_case_insensitively() {
        assert_eq!(Position::parse_label("Goalkeeper"), Some(Position::Goalkeeper));
        assert_eq!(Position::parse_label("KEEPER"), Some(Position::Goalkeeper));
        assert_eq!(Position::parse_label("defender"), Some(Position::Defender));
        assert_eq!(Position::parse_label(" DF "), Some(Position::Defender));
        assert_eq!(Position::parse_label("Midfielder"), Some(Position::Midfielder));
        assert_eq!(Position::parse_label("mf"), Some(Position::Midfielder));
        assert_eq!(Position::parse_label("Striker"), Some(Position::Forward));
        assert_eq!(Position::parse_label("forward"), Some(Position::Forward));
        assert_eq!(Position::parse_label("FWD"), Some(Position::Forward));
    }

    #[test]
    fn parse_label_rejects_unknown_values() {
        assert_eq!(Position::parse_label("winger"), None);
        assert_eq!(Position::parse_label(""), None);
    }

    #[test]
    fn normalize_falls_back_to_midfield() {
        assert_eq!(Position::normalize(Some("sweeper")), Position::Midfielder);
        assert_eq!(Position::normalize(None), Position::Midfielder);
        assert_eq!(Position::normalize(Some("gk")), Position::Goalkeeper);
    }

    #[test]
    fn serializes_as_canonical_label() {
        let rendered = serde_json::to_string(&Position::Forward).expect("position should serialize");
        assert_eq!(rendered, "\"FWD\"");
    }
}
