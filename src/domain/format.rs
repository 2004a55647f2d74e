//! Entry format definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape in which entries are written to the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryFormat {
    /// `{"text": ..., "timestamp": ...}` records
    #[default]
    Stamped,
    /// Bare strings without a timestamp
    Plain,
}

impl EntryFormat {
    /// Whether entries written in this format carry a timestamp
    pub fn has_timestamps(&self) -> bool {
        matches!(self, EntryFormat::Stamped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryFormat::Stamped => "stamped",
            EntryFormat::Plain => "plain",
        }
    }
}

impl fmt::Display for EntryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stamped" => Ok(EntryFormat::Stamped),
            "plain" => Ok(EntryFormat::Plain),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: stamped, plain",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            EntryFormat::from_str("stamped").unwrap(),
            EntryFormat::Stamped
        );
        assert_eq!(EntryFormat::from_str("PLAIN").unwrap(), EntryFormat::Plain);
        assert!(EntryFormat::from_str("markdown").is_err());
    }

    #[test]
    fn test_default_is_stamped() {
        assert_eq!(EntryFormat::default(), EntryFormat::Stamped);
        assert!(EntryFormat::default().has_timestamps());
        assert!(!EntryFormat::Plain.has_timestamps());
    }

    #[test]
    fn test_display_matches_from_str() {
        for format in [EntryFormat::Stamped, EntryFormat::Plain] {
            assert_eq!(EntryFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
