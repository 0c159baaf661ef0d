//! RecordId - Identity of a catalog entry

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const PENDING_PREFIX: &str = "pending:";

/// Record identity
///
/// Store-assigned ids and locally synthesized ids live in separate
/// variants, so a pending record can never collide with a confirmed one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum RecordId {
    /// Assigned by the store
    Confirmed(i64),
    /// Local token for a record the store did not echo back
    Pending(Uuid),
}

impl RecordId {
    pub fn new_pending() -> Self {
        RecordId::Pending(Uuid::new_v4())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RecordId::Pending(_))
    }

    pub fn confirmed(&self) -> Option<i64> {
        match self {
            RecordId::Confirmed(id) => Some(*id),
            RecordId::Pending(_) => None,
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Confirmed(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Confirmed(id) => write!(f, "{}", id),
            RecordId::Pending(token) => write!(f, "{}{}", PENDING_PREFIX, token),
        }
    }
}

impl std::str::FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(token) = s.strip_prefix(PENDING_PREFIX) {
            return Uuid::parse_str(token)
                .map(RecordId::Pending)
                .map_err(|e| format!("Invalid pending id '{}': {}", s, e));
        }
        s.parse::<i64>()
            .map(RecordId::Confirmed)
            .map_err(|_| format!("Invalid record id: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = RecordId::Confirmed(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<RecordId>().unwrap(), id);

        let pending = RecordId::new_pending();
        assert!(pending.to_string().starts_with("pending:"));
        assert_eq!(pending.to_string().parse::<RecordId>().unwrap(), pending);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<RecordId>().is_err());
        assert!("pending:nope".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_pending_never_equals_confirmed() {
        let pending = RecordId::new_pending();
        assert_ne!(pending, RecordId::Confirmed(0));
        assert_eq!(pending.confirmed(), None);
        assert_eq!(RecordId::from(7).confirmed(), Some(7));
    }
}
