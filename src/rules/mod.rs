//! Game-mode rules: who may spawn, how scores are computed, when play ends

pub mod mode;
pub mod scoring;

pub use mode::{GameMode, RuleContext, BATTLE_ROYALE_GRACE_SECONDS};
pub use scoring::{rank, standings, validate_scores, RankEntry, MAX_SCORE, MIN_SCORE};
