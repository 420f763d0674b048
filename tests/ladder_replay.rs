//! End-to-end replay tests over generated match histories.

use padel_elo_processor::model::constants::ELO_BASELINE;
use padel_elo_processor::model::ladder::Ladder;
use padel_elo_processor::utils::test_utils::{generate_match_history, generate_profiles};

#[test]
fn replay_is_deterministic() {
    let profiles = generate_profiles(8);
    let matches = generate_match_history(&profiles, 100, 42);

    let mut first = Ladder::new(&profiles);
    first.process(&matches);
    let mut second = Ladder::new(&profiles);
    second.process(&matches);

    for profile in &profiles {
        assert_eq!(
            first.player(&profile.id).unwrap().rating,
            second.player(&profile.id).unwrap().rating
        );
    }
}

#[test]
fn replay_keeps_player_state_consistent() {
    let profiles = generate_profiles(8);
    let matches = generate_match_history(&profiles, 100, 7);

    let mut ladder = Ladder::new(&profiles);
    ladder.process(&matches);

    for player in ladder.players() {
        assert!(player.rating.is_finite());
        assert_eq!(player.games, player.wins + player.losses);
        assert_eq!(player.history.len(), player.games as usize);

        // History must be contiguous: each adjustment starts where the
        // previous one ended, beginning at the baseline.
        let mut rating = ELO_BASELINE;
        for adjustment in &player.history {
            assert_eq!(adjustment.rating_before, rating);
            assert_eq!(adjustment.rating_after, rating + adjustment.delta as f64);
            rating = adjustment.rating_after;
        }
        assert_eq!(rating, player.rating);
    }
}

#[test]
fn each_doubles_match_credits_two_wins_and_two_losses() {
    let profiles = generate_profiles(8);
    let matches = generate_match_history(&profiles, 50, 3);

    let mut ladder = Ladder::new(&profiles);
    ladder.process(&matches);

    let wins: i32 = ladder.players().map(|p| p.wins).sum();
    let losses: i32 = ladder.players().map(|p| p.losses).sum();
    assert_eq!(wins, matches.len() as i32 * 2);
    assert_eq!(losses, matches.len() as i32 * 2);
}

#[test]
fn standings_cover_all_profiles_sorted() {
    let profiles = generate_profiles(10);
    let matches = generate_match_history(&profiles, 80, 11);

    let mut ladder = Ladder::new(&profiles);
    ladder.process(&matches);

    let standings = ladder.standings();
    assert_eq!(standings.len(), profiles.len());
    for pair in standings.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
    for entry in &standings {
        assert_eq!(entry.recent_results.len(), entry.games as usize);
    }
}

#[test]
fn incremental_replay_equals_full_replay() {
    let profiles = generate_profiles(8);
    let matches = generate_match_history(&profiles, 60, 99);
    let (older, newer) = matches.split_at(40);

    let mut full = Ladder::new(&profiles);
    full.process(&matches);

    let mut head = Ladder::new(&profiles);
    head.process(older);
    let mut resumed = Ladder::from_state(head.into_state(), &profiles);
    resumed.process(newer);

    for profile in &profiles {
        let a = full.player(&profile.id).unwrap();
        let b = resumed.player(&profile.id).unwrap();
        assert_eq!(a.rating, b.rating);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.losses, b.losses);
        assert_eq!(a.partners.len(), b.partners.len());
    }
}
