//! Resource identifiers.

use derive_more::{Display, From};
use serde::Serialize;
use serde_json::Value;

/// The id of a DeployBot user, deployment, repository, environment or server.
///
/// DeployBot hands out numeric ids, but callers often carry them around as
/// strings. Numeric ids are sent as JSON numbers and anything else as a JSON
/// string, so a body carries whatever the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display, From)]
#[serde(untagged)]
pub enum ResourceId {
    #[display("{_0}")]
    Numeric(u64),
    #[display("{_0}")]
    Named(String),
}

impl ResourceId {
    /// An id that is empty or only whitespace cannot address a resource.
    pub fn is_blank(&self) -> bool {
        match self {
            ResourceId::Numeric(_) => false,
            ResourceId::Named(s) => s.trim().is_empty(),
        }
    }

    /// `.` or `..`, which a URL resolver treats as a relative path step
    /// rather than a segment.
    pub fn is_dot_segment(&self) -> bool {
        match self {
            ResourceId::Numeric(_) => false,
            ResourceId::Named(s) => matches!(s.trim(), "." | ".."),
        }
    }

    /// The JSON value sent for this id in a request body.
    pub fn to_value(&self) -> Value {
        match self {
            ResourceId::Numeric(n) => Value::from(*n),
            ResourceId::Named(s) => Value::from(s.as_str()),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::Named(s.to_string())
    }
}

impl From<u32> for ResourceId {
    fn from(n: u32) -> Self {
        Self::Numeric(n.into())
    }
}

impl From<&ResourceId> for Value {
    fn from(id: &ResourceId) -> Self {
        id.to_value()
    }
}

impl From<ResourceId> for Value {
    fn from(id: ResourceId) -> Self {
        id.to_value()
    }
}

impl std::str::FromStr for ResourceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<u64>() {
            // Only canonical digits: "007" or "+7" must reach DeployBot as written.
            Ok(n) if n.to_string() == trimmed => Self::Numeric(n),
            _ => Self::Named(s.to_string()),
        })
    }
}
