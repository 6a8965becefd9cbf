//! Twelve Snakes - tick-driven twelve-player snake simulation

pub mod arena;
pub mod core;
pub mod entity;
pub mod interface;
pub mod rules;
pub mod simulation;
pub mod spatial;
pub mod ui;
