use serde::{Deserialize, Serialize};

/// Outcome of one match from a single player's perspective. Serialized as
/// the "W"/"L" markers the club app stores in rating history rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss
}

impl MatchResult {
    pub fn from_win(did_win: bool) -> MatchResult {
        if did_win {
            MatchResult::Win
        } else {
            MatchResult::Loss
        }
    }
}
