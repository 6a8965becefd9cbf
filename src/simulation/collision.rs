//! Collision engine: wall, body and hazard checks against post-move heads
//!
//! Nothing is removed here. A collision only flags the snake as dying; the
//! death sweep runs after every snake has been checked.

use crate::arena;
use crate::core::types::PlayerId;
use crate::entity::Snake;
use crate::simulation::hazard::HazardGrid;

/// Why a snake stopped (or, for `Ate`, why it survived) this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    /// Ran into its own body
    SelfBody,
    /// Ran into another snake; `owner` is credited with the kill
    Body { owner: PlayerId },
    /// Head-on with a snake at most half its length, which it swallowed
    Ate { victim: PlayerId, gained: i32 },
    Hazard,
}

/// Check one snake and apply the outcome to the roster.
///
/// Order is wall, then bodies in roster order, then hazard. The first hit
/// decides; the rest are skipped. A head-on eat only happens when the
/// victim's head is the one thing in the cell. Returns `None` for an
/// out-of-range `idx`.
pub fn check_snake(
    roster: &mut [Snake],
    idx: usize,
    hazard: Option<&HazardGrid>,
) -> Option<Collision> {
    let snake = roster.get(idx)?;
    if !snake.active {
        return None;
    }
    let head = snake.head()?;

    if arena::hits_wall(head, snake.heading) {
        roster[idx].dying = true;
        return Some(Collision::Wall);
    }

    let attacker_len = snake.current_length();
    let hits: Vec<(usize, bool, i32)> = roster
        .iter()
        .enumerate()
        .filter(|(_, t)| t.active)
        .flat_map(|(j, other)| {
            // A head never collides with itself
            let skip = usize::from(j == idx);
            other
                .body
                .segments()
                .enumerate()
                .skip(skip)
                .filter(move |&(_, seg)| seg == head)
                .map(move |(k, _)| (j, k == 0, other.current_length()))
        })
        .collect();

    if let Some(&(j, head_on, victim_len)) = hits.first() {
        let alone = hits.len() == 1;
        if j != idx && head_on && alone && attacker_len >= 2 * victim_len {
            roster[j].dying = true;
            let eater = &mut roster[idx];
            eater.stats.players_eaten += 1;
            eater.grow(victim_len as usize);
            return Some(Collision::Ate {
                victim: roster[j].id,
                gained: victim_len,
            });
        }

        roster[idx].dying = true;
        if j == idx {
            return Some(Collision::SelfBody);
        }
        roster[j].stats.kills += 1;
        return Some(Collision::Body { owner: roster[j].id });
    }

    if let Some(grid) = hazard {
        if grid.is_active() && grid.is_filled(head) {
            roster[idx].dying = true;
            return Some(Collision::Hazard);
        }
    }

    None
}

/// Check every active snake in index order
pub fn check_all(
    roster: &mut [Snake],
    hazard: Option<&HazardGrid>,
) -> Vec<(PlayerId, Collision)> {
    (0..roster.len())
        .filter_map(|idx| check_snake(roster, idx, hazard).map(|c| (roster[idx].id, c)))
        .collect()
}
