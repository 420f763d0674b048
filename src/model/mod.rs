pub mod constants;
pub mod elo_math;
pub mod ladder;
pub mod structures;
