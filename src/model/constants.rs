// Rating model constants. The web client computes the same ladder from the
// same match rows; every value here must match its constant table exactly or
// historical ratings diverge between platforms.
pub const ELO_BASELINE: f64 = 1000.0;
pub const BASE_K: f64 = 20.0;
pub const HIGH_K: f64 = 40.0;
pub const MID_K: f64 = 30.0;
pub const MAX_MARGIN_MULTIPLIER: f64 = 1.2;
pub const MAX_PLAYER_WEIGHT: f64 = 1.25;
pub const MIN_PLAYER_WEIGHT: f64 = 0.75;
pub const EXPECTED_SCORE_DIVISOR: f64 = 300.0;
pub const PLAYER_WEIGHT_DIVISOR: f64 = 800.0;
// Experience tiers for the K-factor step function
pub const HIGH_K_GAMES_MAX: i32 = 10;
pub const MID_K_GAMES_MAX: i32 = 30;
// Match length thresholds
pub const SHORT_SET_MAX: i32 = 3;
pub const LONG_SET_MIN: i32 = 6;
pub const SHORT_POINTS_MAX: i32 = 15;
pub const MID_POINTS_MAX: i32 = 21;
// Match weights
pub const SHORT_MATCH_WEIGHT: f64 = 0.5;
pub const MID_MATCH_WEIGHT: f64 = 0.5;
pub const LONG_MATCH_WEIGHT: f64 = 1.0;
pub const SINGLES_MATCH_WEIGHT: f64 = 0.5;
