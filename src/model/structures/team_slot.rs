use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel stored when a side filled a spot with an anonymous walk-in.
const GUEST_SENTINEL: &str = "guest";

/// Prefix on legacy entries that name a player without a member account.
const LEGACY_NAME_PREFIX: &str = "name:";

/// One entry in a match team array.
///
/// The club app stores member uuids, the literal `"guest"` sentinel, and
/// legacy free-form name entries in the same column. Only the sentinel is
/// excluded from rating; named entries play as real participants, keyed by
/// a uuid derived from their raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeamSlot {
    Member(Uuid),
    Named(String),
    Guest
}

impl From<String> for TeamSlot {
    fn from(raw: String) -> TeamSlot {
        if raw == GUEST_SENTINEL {
            return TeamSlot::Guest;
        }

        match Uuid::parse_str(&raw) {
            Ok(id) => TeamSlot::Member(id),
            Err(_) => TeamSlot::Named(raw)
        }
    }
}

impl From<TeamSlot> for String {
    fn from(slot: TeamSlot) -> String {
        match slot {
            TeamSlot::Member(id) => id.to_string(),
            TeamSlot::Named(raw) => raw,
            TeamSlot::Guest => GUEST_SENTINEL.to_string()
        }
    }
}

impl TeamSlot {
    pub fn member_id(&self) -> Option<Uuid> {
        match self {
            TeamSlot::Member(id) => Some(*id),
            _ => None
        }
    }

    /// Ladder key for rateable entries. A named entry derives its id from
    /// the raw text, so the same entry resolves to the same player on every
    /// replay.
    pub fn player_id(&self) -> Option<Uuid> {
        match self {
            TeamSlot::Member(id) => Some(*id),
            TeamSlot::Named(raw) => Some(Uuid::new_v5(&Uuid::NAMESPACE_OID, raw.as_bytes())),
            TeamSlot::Guest => None
        }
    }

    /// Display name carried by a legacy entry, without the `name:` prefix.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            TeamSlot::Named(raw) => Some(raw.strip_prefix(LEGACY_NAME_PREFIX).unwrap_or(raw)),
            _ => None
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, TeamSlot::Guest)
    }
}
