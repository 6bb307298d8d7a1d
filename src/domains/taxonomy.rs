//! Domain taxonomy for taskforge.
//!
//! Defines the subject domains used to select generation vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The subject domains a theme can be classified into.
///
/// `Other` is the universal fallback for text that matches no keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Ai,
    Economics,
    Ecology,
    Other,
}

impl Domain {
    /// Returns all domains in classification precedence order.
    pub fn all() -> [Domain; 4] {
        [Domain::Ai, Domain::Economics, Domain::Ecology, Domain::Other]
    }

    /// Returns the canonical lowercase identifier for this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Ai => "ai",
            Domain::Economics => "economics",
            Domain::Ecology => "ecology",
            Domain::Other => "other",
        }
    }

    /// Returns the human-readable display name for this domain.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Ai => "Artificial Intelligence",
            Domain::Economics => "Economics",
            Domain::Ecology => "Ecology",
            Domain::Other => "Other",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ai" => Ok(Domain::Ai),
            "economics" => Ok(Domain::Economics),
            "ecology" => Ok(Domain::Ecology),
            "other" => Ok(Domain::Other),
            other => Err(format!(
                "unknown domain '{}': must be 'ai', 'economics', 'ecology', or 'other'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_all_order() {
        let all = Domain::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Domain::Ai);
        assert_eq!(all[3], Domain::Other);
    }

    #[test]
    fn test_domain_from_str() {
        assert_eq!("ai".parse::<Domain>(), Ok(Domain::Ai));
        assert_eq!(" Economics ".parse::<Domain>(), Ok(Domain::Economics));
        assert_eq!("ECOLOGY".parse::<Domain>(), Ok(Domain::Ecology));
        assert_eq!("other".parse::<Domain>(), Ok(Domain::Other));
        assert!("physics".parse::<Domain>().is_err());
    }

    #[test]
    fn test_domain_serde_lowercase() {
        let json = serde_json::to_string(&Domain::Economics).expect("serialize");
        assert_eq!(json, "\"economics\"");

        let parsed: Domain = serde_json::from_str("\"ai\"").expect("deserialize");
        assert_eq!(parsed, Domain::Ai);
    }

    #[test]
    fn test_display_matches_as_str() {
        for domain in Domain::all() {
            assert_eq!(domain.to_string(), domain.as_str());
        }
    }
}
