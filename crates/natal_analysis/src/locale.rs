//! Output language for labels and summaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Locale {
    /// BCP 47 language tag.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Vietnamese => "vi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "vi" | "vietnamese" => Ok(Self::Vietnamese),
            other => Err(format!("unknown locale '{other}' (expected en or vi)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("VI".parse::<Locale>().unwrap(), Locale::Vietnamese);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Locale::Vietnamese).unwrap(), "\"vi\"");
        let l: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(l, Locale::English);
    }
}
