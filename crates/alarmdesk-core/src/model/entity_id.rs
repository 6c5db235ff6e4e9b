// ── Core identity type ──
//
// Every alarm, operator, note, and notification is keyed by an EntityId.
// Seeded records carry human-readable ids ("alarm-001"); records created at
// runtime get a fresh UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Canonical identifier for any alarmdesk entity.
///
/// Wraps either a generated UUID or a named string id. Parsing a string that
/// happens to be a valid UUID yields the `Uuid` form, so ids survive a
/// display/parse round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Uuid(Uuid),
    Named(String),
}

impl EntityId {
    /// A fresh random id for records created at runtime.
    pub fn generate() -> Self {
        Self::Uuid(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            Self::Named(_) => None,
        }
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(s) => Some(s),
            Self::Uuid(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Named(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Named(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_uuid_string() {
        let id = EntityId::from("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.as_uuid().is_some());
    }

    #[test]
    fn entity_id_from_named_string() {
        let id = EntityId::from("alarm-001");
        assert_eq!(id.as_named(), Some("alarm-001"));
    }

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert!(a.as_uuid().is_some());
        assert_ne!(a, b);
    }

    #[test]
    fn display_parse_round_trip() {
        let generated = EntityId::generate();
        let parsed: EntityId = generated.to_string().parse().unwrap();
        assert_eq!(parsed, generated);
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&EntityId::from("cso-002")).unwrap();
        assert_eq!(json, "\"cso-002\"");
    }
}
