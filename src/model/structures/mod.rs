pub mod match_result;
pub mod player_delta;
pub mod score_type;
pub mod team_slot;
