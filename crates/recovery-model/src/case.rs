//! Case status and priority enumerations.
//!
//! Stored as uppercase string tags by the surrounding system; modeled as
//! closed enums so every consumer matches exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a recovery case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl CaseStatus {
    /// The canonical stored tag.
    pub fn as_tag(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "PENDING",
            CaseStatus::InProgress => "INPROGRESS",
            CaseStatus::Completed => "COMPLETED",
            CaseStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable label shown in case listings.
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Completed => "Completed",
            CaseStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for CaseStatus {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(CaseStatus::Pending),
            "INPROGRESS" => Ok(CaseStatus::InProgress),
            "COMPLETED" => Ok(CaseStatus::Completed),
            "CANCELLED" => Ok(CaseStatus::Cancelled),
            _ => Err(UnknownTag(s.to_string())),
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Triage priority of a recovery case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CasePriority {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "URGENT")]
    Urgent,
}

impl CasePriority {
    /// The canonical stored tag.
    pub fn as_tag(&self) -> &'static str {
        match self {
            CasePriority::Low => "LOW",
            CasePriority::Medium => "MEDIUM",
            CasePriority::High => "HIGH",
            CasePriority::Urgent => "URGENT",
        }
    }

    /// Human-readable label shown in case listings.
    pub fn label(&self) -> &'static str {
        match self {
            CasePriority::Low => "Low",
            CasePriority::Medium => "Medium",
            CasePriority::High => "High",
            CasePriority::Urgent => "Urgent",
        }
    }
}

impl FromStr for CasePriority {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(CasePriority::Low),
            "MEDIUM" => Ok(CasePriority::Medium),
            "HIGH" => Ok(CasePriority::High),
            "URGENT" => Ok(CasePriority::Urgent),
            _ => Err(UnknownTag(s.to_string())),
        }
    }
}

impl fmt::Display for CasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A string tag that matched no enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag: {0}")]
pub struct UnknownTag(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tag_roundtrip() {
        for status in [
            CaseStatus::Pending,
            CaseStatus::InProgress,
            CaseStatus::Completed,
            CaseStatus::Cancelled,
        ] {
            assert_eq!(status.as_tag().parse::<CaseStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_priority_tag_roundtrip() {
        for priority in [
            CasePriority::Low,
            CasePriority::Medium,
            CasePriority::High,
            CasePriority::Urgent,
        ] {
            assert_eq!(priority.as_tag().parse::<CasePriority>().unwrap(), priority);
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert!("OPEN".parse::<CaseStatus>().is_err());
        assert!("pending".parse::<CaseStatus>().is_err());
        assert!("CRITICAL".parse::<CasePriority>().is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(CasePriority::Low < CasePriority::Medium);
        assert!(CasePriority::High < CasePriority::Urgent);
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::InProgress).unwrap(),
            "\"INPROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<CasePriority>("\"URGENT\"").unwrap(),
            CasePriority::Urgent
        );
    }
}
