// ABOUTME: Deployment lifecycle status enumeration.
// ABOUTME: Closed set of four states, each with a fixed string label.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid deployment status label: {0}")]
pub struct InvalidStatusLabel(pub String);

/// Lifecycle status of a deployment.
///
/// The set is closed: exactly these four states exist, and each carries a
/// label identical to its symbolic name. The label is the only externally
/// observable form; serializers emit it and deserializers accept nothing
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentStatus {
    NotStarted,
    Started,
    Error,
    Completed,
}

impl DeploymentStatus {
    /// All variants in declaration order.
    pub const ALL: [DeploymentStatus; 4] = [
        DeploymentStatus::NotStarted,
        DeploymentStatus::Started,
        DeploymentStatus::Error,
        DeploymentStatus::Completed,
    ];

    /// The string label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            DeploymentStatus::NotStarted => "NOT_STARTED",
            DeploymentStatus::Started => "STARTED",
            DeploymentStatus::Error => "ERROR",
            DeploymentStatus::Completed => "COMPLETED",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.label()
    }
}

impl FromStr for DeploymentStatus {
    type Err = InvalidStatusLabel;

    /// Labels are matched exactly: case-sensitive, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(DeploymentStatus::NotStarted),
            "STARTED" => Ok(DeploymentStatus::Started),
            "ERROR" => Ok(DeploymentStatus::Error),
            "COMPLETED" => Ok(DeploymentStatus::Completed),
            _ => Err(InvalidStatusLabel(s.to_string())),
        }
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for DeploymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DeploymentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
