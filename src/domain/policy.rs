use crate::domain::error::ConfigurationError;
use crate::domain::path::PathSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How paths that end in a rejection clause are treated before case aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionMode {
    /// Drop rejection-terminated paths; rejections produce no case at all.
    #[default]
    Trim,
    /// Replace each rejection-terminated path by the single terminal answer, once per answer.
    Collapse,
}

impl RejectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionMode::Trim => "trim",
            RejectionMode::Collapse => "collapse",
        }
    }
}

impl FromStr for RejectionMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trim" => Ok(RejectionMode::Trim),
            "collapse" => Ok(RejectionMode::Collapse),
            other => Err(ConfigurationError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for RejectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection policy - transforms an enumerated path set
pub trait RejectionPolicy: Send + Sync {
    fn apply<'g>(&self, paths: PathSet<'g>) -> PathSet<'g>;

    fn mode(&self) -> RejectionMode;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("trim".parse::<RejectionMode>(), Ok(RejectionMode::Trim));
        assert_eq!(
            "collapse".parse::<RejectionMode>(),
            Ok(RejectionMode::Collapse)
        );
        assert_eq!(RejectionMode::default().to_string(), "trim");
    }

    #[test]
    fn test_unknown_mode_keeps_offending_string() {
        assert_eq!(
            "merge".parse::<RejectionMode>(),
            Err(ConfigurationError::UnknownMode("merge".into()))
        );
        // Matching is exact
        assert!("Trim".parse::<RejectionMode>().is_err());
    }
}
