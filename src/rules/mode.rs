//! Game modes: spawn eligibility, score formula and end condition

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::entity::{Roster, Snake};

/// BattleRoyale cannot end before this many seconds have passed
pub const BATTLE_ROYALE_GRACE_SECONDS: u64 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Endless play, score = apples + kills - deaths
    #[default]
    FreeForAll,
    /// First to the configured score wins
    ScoreAttack,
    /// Limited lives, then sudden death once time runs out
    BattleRoyale,
    /// Longest snake when time runs out
    Survivor,
    /// Longest length ever reached when time runs out
    KingOfTheHill,
}

/// Session facts the rules are evaluated against
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a GameConfig,
    pub elapsed_seconds: u64,
    pub hazard_active: bool,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::FreeForAll => "Free For All",
            GameMode::ScoreAttack => "Score Attack",
            GameMode::BattleRoyale => "Battle Royale",
            GameMode::Survivor => "Survivor",
            GameMode::KingOfTheHill => "King of the Hill",
        }
    }

    /// Whether `snake` may join (or rejoin) right now
    pub fn can_spawn(self, snake: &Snake, ctx: &RuleContext) -> bool {
        match self {
            GameMode::BattleRoyale => {
                !ctx.hazard_active && snake.stats.deaths < ctx.config.max_lives
            }
            GameMode::FreeForAll
            | GameMode::ScoreAttack
            | GameMode::Survivor
            | GameMode::KingOfTheHill => true,
        }
    }

    /// Unclamped score from the snake's counters
    pub fn score(self, snake: &Snake, config: &GameConfig) -> i32 {
        let stats = &snake.stats;
        match self {
            GameMode::FreeForAll | GameMode::ScoreAttack => {
                stats.apples + stats.kills - stats.deaths
            }
            GameMode::BattleRoyale => config.max_lives - stats.deaths,
            GameMode::Survivor => snake.current_length(),
            GameMode::KingOfTheHill => stats.max_length,
        }
    }

    /// True when BattleRoyale's clock has run out and sudden death should begin
    pub fn hazard_due(self, ctx: &RuleContext) -> bool {
        self == GameMode::BattleRoyale
            && !ctx.hazard_active
            && ctx.elapsed_seconds >= ctx.config.max_time_seconds
    }

    /// End-of-session check against already scored counters
    pub fn is_finished(self, roster: &Roster, ctx: &RuleContext) -> bool {
        match self {
            GameMode::FreeForAll => false,
            GameMode::ScoreAttack => roster
                .iter()
                .map(|s| s.stats.score)
                .max()
                .is_some_and(|lead| lead >= ctx.config.max_score),
            GameMode::BattleRoyale => {
                if ctx.elapsed_seconds < BATTLE_ROYALE_GRACE_SECONDS {
                    return false;
                }
                let joined = roster.iter().filter(|s| s.ever_active).count();
                let remaining = roster
                    .iter()
                    .filter(|s| s.ever_active && (s.active || self.can_spawn(s, ctx)))
                    .count();
                joined > 0 && remaining <= 1
            }
            GameMode::Survivor | GameMode::KingOfTheHill => {
                ctx.elapsed_seconds >= ctx.config.max_time_seconds
            }
        }
    }
}
