use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::structures::{score_type::ScoreType, team_slot::TeamSlot};

/// One row of the club's `matches` table, as exported to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub team1_ids: Vec<TeamSlot>,
    pub team2_ids: Vec<TeamSlot>,
    pub team1_sets: i32,
    pub team2_sets: i32,
    /// Raw score_type column; parse with [`Match::score_type`].
    #[serde(default)]
    pub score_type: Option<String>,
    /// Point target when the match was played to points.
    #[serde(default)]
    pub score_target: Option<i32>,
    /// Set when the match was generated by a tournament bracket.
    #[serde(default)]
    pub source_tournament_id: Option<Uuid>
}

impl Match {
    pub fn score_type(&self) -> ScoreType {
        ScoreType::from_column(self.score_type.as_deref())
    }
}

/// One row of the `profiles` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>
}
