use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    model::{
        constants::ELO_BASELINE,
        elo_math::{expected_score, margin_multiplier, player_delta, singles_adjusted_match_weight},
        structures::{match_result::MatchResult, player_delta::PlayerDeltaParams, team_slot::TeamSlot}
    },
    snapshot::club_structs::{Match, Profile},
    utils::progress_utils::progress_bar
};

/// Fallback display name for members that appear in match rows without a
/// profile row (deleted accounts, partial exports).
const UNKNOWN_NAME: &str = "Unknown";

/// Minimum games together before a teammate qualifies as a best partner.
const BEST_PARTNER_MIN_GAMES: i32 = 2;

/// Append-only history entry for one player's rating change in one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingAdjustment {
    pub match_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub result: MatchResult,
    pub delta: i32,
    pub rating_before: f64,
    pub rating_after: f64
}

/// Games and wins recorded with one specific teammate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub games: i32,
    pub wins: i32
}

/// Full per-player ladder state: current rating plus everything needed to
/// render a player page (history, counters, partner records).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub start_rating: f64,
    pub wins: i32,
    pub losses: i32,
    pub games: i32,
    pub history: Vec<RatingAdjustment>,
    pub partners: IndexMap<Uuid, PartnerRecord>
}

impl PlayerStats {
    fn new(id: Uuid, name: String) -> PlayerStats {
        PlayerStats {
            id,
            name,
            rating: ELO_BASELINE,
            start_rating: ELO_BASELINE,
            wins: 0,
            losses: 0,
            games: 0,
            history: Vec::new(),
            partners: IndexMap::new()
        }
    }
}

/// The teammate a player wins most with, given at least
/// [`BEST_PARTNER_MIN_GAMES`] games together.
#[derive(Debug, Clone, Serialize)]
pub struct BestPartner {
    pub partner_id: Uuid,
    pub name: String,
    pub games: i32,
    pub wins: i32,
    pub win_rate: f64
}

/// One row of the computed standings.
#[derive(Debug, Clone, Serialize)]
pub struct LadderEntry {
    pub id: Uuid,
    pub name: String,
    pub rating: f64,
    pub wins: i32,
    pub losses: i32,
    pub games: i32,
    /// W/L sequence in chronological order.
    pub recent_results: Vec<MatchResult>,
    pub best_partner: Option<BestPartner>
}

/// Replays match rows in chronological order into per-player rating state.
///
/// The rating math itself is stateless ([`crate::model::elo_math`]); the
/// ladder owns the one invariant the math cannot: deltas compound on a
/// moving rating, so matches must be applied oldest first.
pub struct Ladder {
    players: IndexMap<Uuid, PlayerStats>,
    profile_names: HashMap<Uuid, String>
}

impl Ladder {
    /// Seeds every profiled member at the baseline rating with no history.
    pub fn new(profiles: &[Profile]) -> Ladder {
        let mut ladder = Ladder {
            players: IndexMap::new(),
            profile_names: profiles.iter().map(|p| (p.id, p.name.clone())).collect()
        };

        for profile in profiles {
            ladder.ensure_player(profile.id);
        }

        ladder
    }

    /// Restores previously computed state so a partial window of newer
    /// matches can be replayed on top of it (weekly incremental runs).
    pub fn from_state(players: IndexMap<Uuid, PlayerStats>, profiles: &[Profile]) -> Ladder {
        let mut ladder = Ladder {
            players,
            profile_names: profiles.iter().map(|p| (p.id, p.name.clone())).collect()
        };

        for profile in profiles {
            ladder.ensure_player(profile.id);
        }

        ladder
    }

    /// Extracts the player state, e.g. for persisting between incremental
    /// runs.
    pub fn into_state(self) -> IndexMap<Uuid, PlayerStats> {
        self.players
    }

    pub fn player(&self, id: &Uuid) -> Option<&PlayerStats> {
        self.players.get(id)
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerStats> {
        self.players.values()
    }

    /// Replays all matches, oldest first. Input order does not matter; the
    /// rows are sorted by `created_at` before applying.
    pub fn process(&mut self, matches: &[Match]) {
        let mut ordered: Vec<&Match> = matches.iter().collect();
        ordered.sort_by_key(|m| m.created_at);

        let bar = progress_bar(ordered.len() as u64, "Replaying match history".to_string());
        for match_ in ordered {
            self.process_match(match_);
            bar.inc(1);
        }
        bar.finish();

        info!(
            matches = matches.len(),
            players = self.players.len(),
            "replay complete"
        );
    }

    fn process_match(&mut self, match_: &Match) {
        let team1 = self.active_team(&match_.team1_ids);
        let team2 = self.active_team(&match_.team2_ids);

        if team1.is_empty() || team2.is_empty() {
            debug!(match_id = %match_.id, "skipping match without two rateable sides");
            return;
        }

        let team1_average = self.team_average(&team1);
        let team2_average = self.team_average(&team2);
        let team1_expected = expected_score(team1_average, team2_average);

        // Ties count as a team1 loss; the club app records no draws.
        let team1_won = match_.team1_sets > match_.team2_sets;
        let margin = margin_multiplier(match_.team1_sets as f64, match_.team2_sets as f64);
        let is_singles = team1.len() == 1 && team2.len() == 1;
        let weight = singles_adjusted_match_weight(match_, is_singles);

        self.apply_team(match_, &team1, team1_average, team1_expected, team1_won, margin, weight);
        self.apply_team(match_, &team2, team2_average, 1.0 - team1_expected, !team1_won, margin, weight);

        self.record_partners(&team1, team1_won);
        self.record_partners(&team2, !team1_won);
    }

    /// Resolves a team column to rateable player ids, creating baseline
    /// entries for players seen for the first time. Only the guest sentinel
    /// drops out; legacy named entries are rated under their derived id.
    fn active_team(&mut self, slots: &[TeamSlot]) -> Vec<Uuid> {
        let mut team = Vec::with_capacity(slots.len());

        for slot in slots {
            let Some(id) = slot.player_id() else {
                continue;
            };
            self.ensure_player_with_name(id, slot.display_name());
            team.push(id);
        }

        team
    }

    fn ensure_player(&mut self, id: Uuid) {
        self.ensure_player_with_name(id, None);
    }

    fn ensure_player_with_name(&mut self, id: Uuid, name_hint: Option<&str>) {
        if self.players.contains_key(&id) {
            return;
        }

        let name = self
            .profile_names
            .get(&id)
            .cloned()
            .or_else(|| name_hint.map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        self.players.insert(id, PlayerStats::new(id, name));
    }

    fn team_average(&self, team: &[Uuid]) -> f64 {
        let sum: f64 = team
            .iter()
            .map(|id| self.players.get(id).map_or(ELO_BASELINE, |p| p.rating))
            .sum();

        sum / team.len() as f64
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_team(
        &mut self,
        match_: &Match,
        team: &[Uuid],
        team_average: f64,
        expected: f64,
        did_win: bool,
        margin_multiplier: f64,
        match_weight: f64
    ) {
        for id in team {
            let Some(player) = self.players.get_mut(id) else {
                continue;
            };

            let delta = player_delta(&PlayerDeltaParams {
                player_elo: player.rating,
                player_games: player.games,
                team_average_elo: team_average,
                expected_score: expected,
                did_win,
                margin_multiplier,
                match_weight
            });

            let rating_before = player.rating;
            player.rating += delta as f64;
            if did_win {
                player.wins += 1;
            } else {
                player.losses += 1;
            }
            player.games += 1;
            player.history.push(RatingAdjustment {
                match_id: match_.id,
                timestamp: match_.created_at,
                result: MatchResult::from_win(did_win),
                delta,
                rating_before,
                rating_after: player.rating
            });
        }
    }

    fn record_partners(&mut self, team: &[Uuid], did_win: bool) {
        for player_id in team {
            for partner_id in team {
                if player_id == partner_id {
                    continue;
                }

                let Some(player) = self.players.get_mut(player_id) else {
                    continue;
                };
                let record = player.partners.entry(*partner_id).or_default();
                record.games += 1;
                if did_win {
                    record.wins += 1;
                }
            }
        }
    }

    /// Per-player summaries sorted by rating descending.
    pub fn standings(&self) -> Vec<LadderEntry> {
        self.players
            .values()
            .map(|player| LadderEntry {
                id: player.id,
                name: player.name.clone(),
                rating: player.rating,
                wins: player.wins,
                losses: player.losses,
                games: player.games,
                recent_results: player.history.iter().map(|entry| entry.result).collect(),
                best_partner: self.best_partner(player)
            })
            .sorted_by(|a, b| b.rating.total_cmp(&a.rating))
            .collect()
    }

    /// Best partner: win rate first, then games together, then wins.
    fn best_partner(&self, player: &PlayerStats) -> Option<BestPartner> {
        player
            .partners
            .iter()
            .filter(|(_, record)| record.games >= BEST_PARTNER_MIN_GAMES)
            .map(|(partner_id, record)| BestPartner {
                partner_id: *partner_id,
                name: self.display_name(partner_id),
                games: record.games,
                wins: record.wins,
                win_rate: record.wins as f64 / record.games as f64
            })
            .sorted_by(|a, b| {
                b.win_rate
                    .total_cmp(&a.win_rate)
                    .then(b.games.cmp(&a.games))
                    .then(b.wins.cmp(&a.wins))
            })
            .next()
    }

    fn display_name(&self, id: &Uuid) -> String {
        self.profile_names
            .get(id)
            .cloned()
            .or_else(|| self.players.get(id).map(|p| p.name.clone()))
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }
}
