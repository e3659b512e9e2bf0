//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Monotonic tag attached to every letter submission.
///
/// Sequences start at 1; a larger value always means a later submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSequence(u64);

impl RequestSequence {
    /// The first sequence ever issued.
    pub const FIRST: RequestSequence = RequestSequence(1);

    /// Wraps a raw sequence number.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence number.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the sequence that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Correlates one enhancement call across log lines and provider requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Creates a new random TraceId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TraceId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_ordered() {
        let first = RequestSequence::FIRST;
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn sequence_displays_with_hash() {
        assert_eq!(RequestSequence::new(7).to_string(), "#7");
    }

    #[test]
    fn sequence_serializes_transparently() {
        let json = serde_json::to_string(&RequestSequence::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn trace_ids_are_unique() {
        assert_ne!(TraceId::new(), TraceId::new());
    }

    #[test]
    fn trace_id_round_trips_through_string() {
        let id = TraceId::new();
        let parsed: TraceId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn trace_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<TraceId>().is_err());
    }
}
