//! Counter clamping, per-tick scoring and ranking

use serde::Serialize;

use crate::core::config::GameConfig;
use crate::core::types::PlayerId;
use crate::entity::{Roster, Snake};
use crate::rules::mode::GameMode;

pub const MIN_SCORE: i32 = -99;
pub const MAX_SCORE: i32 = 999;

#[inline]
fn clamp(value: i32) -> i32 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Clamp every counter, then recompute the score from scratch
pub fn validate_scores(roster: &mut Roster, mode: GameMode, config: &GameConfig) {
    for snake in roster.iter_mut() {
        let stats = &mut snake.stats;
        stats.apples = clamp(stats.apples);
        stats.deaths = clamp(stats.deaths);
        stats.kills = clamp(stats.kills);
        stats.players_eaten = clamp(stats.players_eaten);
        stats.max_length = clamp(stats.max_length);

        let score = mode.score(snake, config);
        snake.stats.score = clamp(score);
    }
}

/// One row of the score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub player: PlayerId,
    pub glyph: char,
    pub apples: i32,
    pub kills: i32,
    pub deaths: i32,
    pub players_eaten: i32,
    pub length: i32,
    pub max_length: i32,
    pub score: i32,
}

impl From<&Snake> for RankEntry {
    fn from(snake: &Snake) -> Self {
        Self {
            player: snake.id,
            glyph: snake.glyph,
            apples: snake.stats.apples,
            kills: snake.stats.kills,
            deaths: snake.stats.deaths,
            players_eaten: snake.stats.players_eaten,
            length: snake.current_length(),
            max_length: snake.stats.max_length,
            score: snake.stats.score,
        }
    }
}

/// Stable sort by descending score: equal scores keep roster order
pub fn rank<'a>(snakes: impl IntoIterator<Item = &'a Snake>) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = snakes.into_iter().map(RankEntry::from).collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Ranked table of everyone who is playing or has played
pub fn standings(roster: &Roster) -> Vec<RankEntry> {
    rank(roster.iter().filter(|s| s.active || s.ever_active))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_clamped() {
        let mut roster = Roster::new();
        {
            let stats = &mut roster.get_mut(PlayerId(0)).stats;
            stats.apples = 5000;
            stats.deaths = 1;
        }
        roster.get_mut(PlayerId(1)).stats.deaths = 2000;

        validate_scores(&mut roster, GameMode::FreeForAll, &GameConfig::default());

        let a = roster.get(PlayerId(0)).stats;
        assert_eq!(a.apples, MAX_SCORE);
        assert_eq!(a.score, MAX_SCORE);

        let b = roster.get(PlayerId(1)).stats;
        assert_eq!(b.deaths, MAX_SCORE);
        assert_eq!(b.score, MIN_SCORE);
    }

    #[test]
    fn test_score_is_recomputed_not_accumulated() {
        let mut roster = Roster::new();
        roster.get_mut(PlayerId(0)).stats.apples = 3;
        let config = GameConfig::default();
        validate_scores(&mut roster, GameMode::FreeForAll, &config);
        validate_scores(&mut roster, GameMode::FreeForAll, &config);
        assert_eq!(roster.get(PlayerId(0)).stats.score, 3);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let mut roster = Roster::new();
        roster.get_mut(PlayerId(2)).stats.score = 4;
        roster.get_mut(PlayerId(5)).stats.score = 9;
        roster.get_mut(PlayerId(7)).stats.score = 4;
        roster.get_mut(PlayerId(9)).stats.score = 4;

        let order: Vec<u8> = rank(roster.iter()).iter().map(|e| e.player.0).collect();
        assert_eq!(&order[..4], &[5, 2, 7, 9]);
        // Zero scores follow in roster order
        assert_eq!(&order[4..], &[0, 1, 3, 4, 6, 8, 10, 11]);
    }

    #[test]
    fn test_standings_skip_players_who_never_joined() {
        let mut roster = Roster::new();
        roster.get_mut(PlayerId(3)).spawn();
        roster.get_mut(PlayerId(8)).spawn();
        roster.get_mut(PlayerId(8)).kill();

        let players: Vec<u8> = standings(&roster).iter().map(|e| e.player.0).collect();
        assert_eq!(players, vec![3, 8]);
    }
}
