//! UI state for the terminal front-end

use std::collections::VecDeque;

use crate::core::types::{PlayerId, Tick};
use crate::simulation::{DeathCause, SimulationEvent};

/// Maximum action log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// Which screen the front-end is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Arena,
    /// Paused on the score table
    Scores,
    /// Final table after the session ended
    GameOver,
}

/// Game UI state
#[derive(Debug, Default)]
pub struct GameUI {
    pub screen: Screen,
    /// Action log entries
    pub action_log: VecDeque<LogEntry>,
    /// Set when the next frame has to repaint the whole arena
    pub needs_redraw: bool,
}

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub tick: Tick,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Join,
    Death,
    Food,
    System,
}

fn name(player: PlayerId) -> String {
    format!("P{}", player.0 + 1)
}

impl GameUI {
    pub fn new() -> Self {
        Self {
            screen: Screen::Arena,
            action_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            needs_redraw: true,
        }
    }

    /// Add an entry to the action log
    pub fn log(&mut self, tick: Tick, message: String, category: LogCategory) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry {
            tick,
            message,
            category,
        });
    }

    /// Turn tick events into log lines; switches to the final table on game over
    pub fn record(&mut self, events: &[SimulationEvent]) {
        for event in events {
            match *event {
                SimulationEvent::Spawned { player, tick } => {
                    self.log(tick, format!("{} joined", name(player)), LogCategory::Join);
                }
                SimulationEvent::Died { player, cause, tick } => {
                    let how = match cause {
                        Some(DeathCause::Wall) => "hit the wall".to_string(),
                        Some(DeathCause::SelfBody) => "bit itself".to_string(),
                        Some(DeathCause::Body { owner }) => format!("crashed into {}", name(owner)),
                        Some(DeathCause::Eaten { by }) => format!("was eaten by {}", name(by)),
                        Some(DeathCause::Hazard) => "was caught by sudden death".to_string(),
                        None => "died".to_string(),
                    };
                    self.log(tick, format!("{} {}", name(player), how), LogCategory::Death);
                }
                SimulationEvent::PlayerEaten { eater, victim, gained, tick } => {
                    self.log(
                        tick,
                        format!("{} swallowed {} (+{})", name(eater), name(victim), gained),
                        LogCategory::Food,
                    );
                }
                SimulationEvent::AppleEaten { player, length, tick } => {
                    self.log(
                        tick,
                        format!("{} ate an apple (length {})", name(player), length),
                        LogCategory::Food,
                    );
                }
                SimulationEvent::SuddenDeathStarted { tick } => {
                    self.log(tick, "Sudden death!".to_string(), LogCategory::System);
                }
                SimulationEvent::GameOver { winner, tick } => {
                    let message = match winner {
                        Some(p) => format!("Game over, {} wins", name(p)),
                        None => "Game over".to_string(),
                    };
                    self.log(tick, message, LogCategory::System);
                    self.screen = Screen::GameOver;
                }
            }
        }
    }

    /// Flip between the arena and the paused score table
    pub fn toggle_scores(&mut self) {
        self.screen = match self.screen {
            Screen::Arena => Screen::Scores,
            Screen::Scores => {
                self.needs_redraw = true;
                Screen::Arena
            }
            Screen::GameOver => Screen::GameOver,
        };
    }

    pub fn is_paused(&self) -> bool {
        self.screen != Screen::Arena
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded() {
        let mut ui = GameUI::new();
        for i in 0..(MAX_LOG_ENTRIES as u64 + 10) {
            ui.log(i, format!("entry {}", i), LogCategory::System);
        }
        assert_eq!(ui.action_log.len(), MAX_LOG_ENTRIES);
        assert_eq!(ui.action_log.front().map(|e| e.tick), Some(10));
    }

    #[test]
    fn test_record_formats_deaths() {
        let mut ui = GameUI::new();
        ui.record(&[SimulationEvent::Died {
            player: PlayerId(0),
            cause: Some(DeathCause::Eaten { by: PlayerId(4) }),
            tick: 3,
        }]);
        let entry = ui.action_log.back().unwrap();
        assert_eq!(entry.message, "P1 was eaten by P5");
        assert_eq!(entry.category, LogCategory::Death);
    }

    #[test]
    fn test_game_over_switches_screen() {
        let mut ui = GameUI::new();
        ui.record(&[SimulationEvent::GameOver { winner: Some(PlayerId(2)), tick: 9 }]);
        assert_eq!(ui.screen, Screen::GameOver);
        ui.toggle_scores();
        assert_eq!(ui.screen, Screen::GameOver);
    }

    #[test]
    fn test_leaving_score_view_requests_redraw() {
        let mut ui = GameUI::new();
        ui.needs_redraw = false;
        ui.toggle_scores();
        assert!(ui.is_paused());
        ui.toggle_scores();
        assert!(!ui.is_paused());
        assert!(ui.needs_redraw);
    }
}
