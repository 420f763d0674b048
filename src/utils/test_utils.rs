use chrono::{DateTime, Duration, Utc};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::{
    model::structures::team_slot::TeamSlot,
    snapshot::club_structs::{Match, Profile}
};

pub fn generate_profile(name: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        avatar_url: None
    }
}

pub fn generate_profiles(n: usize) -> Vec<Profile> {
    (1..=n).map(|i| generate_profile(&format!("Player {i}"))).collect()
}

pub fn generate_match(team1: &[Uuid], team2: &[Uuid], team1_sets: i32, team2_sets: i32) -> Match {
    generate_match_at(team1, team2, team1_sets, team2_sets, Utc::now())
}

pub fn generate_match_at(
    team1: &[Uuid],
    team2: &[Uuid],
    team1_sets: i32,
    team2_sets: i32,
    created_at: DateTime<Utc>
) -> Match {
    Match {
        id: Uuid::new_v4(),
        created_at,
        team1_ids: team1.iter().copied().map(TeamSlot::Member).collect(),
        team2_ids: team2.iter().copied().map(TeamSlot::Member).collect(),
        team1_sets,
        team2_sets,
        score_type: None,
        score_target: None,
        source_tournament_id: None
    }
}

/// Generates a plausible doubles match history: each match picks four
/// distinct players and a decisive score. Seeded for reproducible results.
pub fn generate_match_history(profiles: &[Profile], n: i32, seed: u64) -> Vec<Match> {
    assert!(profiles.len() >= 4, "Doubles history needs at least 4 profiles");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base = Utc::now() - Duration::days(n as i64);
    let mut matches = Vec::with_capacity(n as usize);

    for i in 0..n {
        let mut ids: Vec<Uuid> = profiles.iter().map(|p| p.id).collect();
        ids.shuffle(&mut rng);

        let winner_sets = rng.random_range(1..=6);
        let loser_sets = rng.random_range(0..winner_sets);
        let team1_wins = rng.random_bool(0.5);
        let (team1_sets, team2_sets) = if team1_wins {
            (winner_sets, loser_sets)
        } else {
            (loser_sets, winner_sets)
        };

        matches.push(generate_match_at(
            &ids[0..2],
            &ids[2..4],
            team1_sets,
            team2_sets,
            base + Duration::days(i as i64)
        ));
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_reproducible() {
        let profiles = generate_profiles(6);
        let a = generate_match_history(&profiles, 10, 42);
        let b = generate_match_history(&profiles, 10, 42);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.team1_sets, y.team1_sets);
            assert_eq!(x.team2_sets, y.team2_sets);
        }
    }

    #[test]
    fn test_history_matches_are_decisive() {
        let profiles = generate_profiles(8);
        for m in generate_match_history(&profiles, 25, 7) {
            assert_ne!(m.team1_sets, m.team2_sets);
            assert_eq!(m.team1_ids.len(), 2);
            assert_eq!(m.team2_ids.len(), 2);
        }
    }

    #[test]
    fn test_history_is_chronological() {
        let profiles = generate_profiles(4);
        let matches = generate_match_history(&profiles, 10, 1);

        for pair in matches.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
    }
}
