/// Named inputs for one player's rating delta in one match.
///
/// The caller resolves the team-level values (average rating, expected
/// score, margin and match weight) once per match and reuses them for every
/// player on the side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerDeltaParams {
    pub player_elo: f64,
    pub player_games: i32,
    pub team_average_elo: f64,
    pub expected_score: f64,
    pub did_win: bool,
    pub margin_multiplier: f64,
    pub match_weight: f64
}
