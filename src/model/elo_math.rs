use crate::{
    model::{
        constants::{
            EXPECTED_SCORE_DIVISOR, HIGH_K, HIGH_K_GAMES_MAX, LONG_MATCH_WEIGHT, LONG_SET_MIN, MAX_MARGIN_MULTIPLIER,
            MAX_PLAYER_WEIGHT, MID_K, MID_K_GAMES_MAX, MID_MATCH_WEIGHT, MID_POINTS_MAX, MIN_PLAYER_WEIGHT,
            PLAYER_WEIGHT_DIVISOR, SHORT_MATCH_WEIGHT, SHORT_POINTS_MAX, SHORT_SET_MAX, SINGLES_MATCH_WEIGHT, BASE_K
        },
        structures::{player_delta::PlayerDeltaParams, score_type::ScoreType}
    },
    snapshot::club_structs::Match
};

/// Logistic win expectation of `rating` against `opponent_rating`,
/// in (0, 1). Symmetric: `expected_score(a, b) + expected_score(b, a) == 1`.
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / EXPECTED_SCORE_DIVISOR))
}

/// Rating volatility by experience. Newcomers move fast, veterans slowly.
pub fn k_factor(games_played: i32) -> f64 {
    if games_played < HIGH_K_GAMES_MAX {
        return HIGH_K;
    }
    if games_played < MID_K_GAMES_MAX {
        return MID_K;
    }

    BASE_K
}

/// Victory margin bonus, tiered and capped.
///
/// A 2 set difference (e.g. 8-6) has the same impact as a 1 set difference
/// (1.1x): margin 1 for diff 1 or 2, margin 2 for diff 3 or more. Non-finite
/// set counts score neutrally instead of propagating NaN.
pub fn margin_multiplier(team1_sets: f64, team2_sets: f64) -> f64 {
    if !team1_sets.is_finite() || !team2_sets.is_finite() {
        return 1.0;
    }

    let diff = (team1_sets - team2_sets).abs();
    let margin: f64 = if diff > 2.0 {
        2.0
    } else if diff > 0.0 {
        1.0
    } else {
        0.0
    };

    1.0 + (margin * 0.1).min(MAX_MARGIN_MULTIPLIER - 1.0)
}

/// Per-player adjustment within a team result. Players below their team
/// average get a weight above 1, players above it a weight below 1, clamped
/// to [MIN_PLAYER_WEIGHT, MAX_PLAYER_WEIGHT]. Non-finite inputs are neutral.
pub fn player_weight(player_elo: f64, team_average_elo: f64) -> f64 {
    if !player_elo.is_finite() || !team_average_elo.is_finite() {
        return 1.0;
    }

    let adjustment = 1.0 + (team_average_elo - player_elo) / PLAYER_WEIGHT_DIVISOR;

    adjustment.clamp(MIN_PLAYER_WEIGHT, MAX_PLAYER_WEIGHT)
}

/// Scales rating impact by match seriousness. Tournament matches always
/// count at full weight regardless of length; otherwise the weight follows
/// the set count or point target.
pub fn match_weight(match_: &Match) -> f64 {
    if match_.source_tournament_id.is_some() {
        return LONG_MATCH_WEIGHT;
    }

    match match_.score_type() {
        ScoreType::Sets => {
            let max_sets = match_.team1_sets.max(match_.team2_sets);
            if max_sets <= SHORT_SET_MAX {
                SHORT_MATCH_WEIGHT
            } else if max_sets >= LONG_SET_MIN {
                LONG_MATCH_WEIGHT
            } else {
                MID_MATCH_WEIGHT
            }
        }
        ScoreType::Points => {
            let target = match_.score_target.unwrap_or(0);
            if target <= SHORT_POINTS_MAX {
                SHORT_MATCH_WEIGHT
            } else if target <= MID_POINTS_MAX {
                MID_MATCH_WEIGHT
            } else {
                LONG_MATCH_WEIGHT
            }
        }
        ScoreType::Unknown => MID_MATCH_WEIGHT
    }
}

/// [`match_weight`] with the singles reduction applied: 1-vs-1 results are
/// halved relative to doubles by club policy.
pub fn singles_adjusted_match_weight(match_: &Match, is_singles_match: bool) -> f64 {
    let multiplier = if is_singles_match { SINGLES_MATCH_WEIGHT } else { 1.0 };

    match_weight(match_) * multiplier
}

/// Composes one signed rating delta for one player.
///
/// The player weight is applied directly on a win and inverted on a loss:
/// a below-average player on a winning team gains more, and the same player
/// on a losing team loses less.
///
/// Rounding is half toward positive infinity (JS `Math.round`), the mode
/// the club's web client uses. `f64::round` would send a -5.5 delta to -6
/// and break historical parity.
pub fn player_delta(params: &PlayerDeltaParams) -> i32 {
    let player_k = k_factor(params.player_games);
    let weight = player_weight(params.player_elo, params.team_average_elo);
    let effective_weight = if params.did_win { weight } else { 1.0 / weight };
    let actual = if params.did_win { 1.0 } else { 0.0 };

    let delta = player_k
        * params.margin_multiplier
        * params.match_weight
        * effective_weight
        * (actual - params.expected_score);

    round_half_up(delta) as i32
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
