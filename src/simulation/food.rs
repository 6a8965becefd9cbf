//! Food engine: placement on free cells and consumption

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::arena;
use crate::core::error::{Result, SnakeError};
use crate::core::types::{PlayerId, Position};
use crate::entity::Roster;
use crate::simulation::hazard::HazardGrid;

/// Random draws before falling back to scanning the free cells
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// The single apple on the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new() -> Self {
        Self { position: arena::INITIAL_FOOD }
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}

fn is_free(pos: Position, roster: &Roster, hazard: &HazardGrid) -> bool {
    !roster.occupies(pos) && !hazard.is_filled(pos)
}

/// Pick a uniformly random interior cell no active snake occupies.
///
/// Also skips filled hazard cells. Errors with `ArenaFull` when no free
/// cell remains.
pub fn place_food<R: Rng>(rng: &mut R, roster: &Roster, hazard: &HazardGrid) -> Result<Position> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range((arena::WALL_LEFT + 1)..arena::WALL_RIGHT),
            rng.gen_range((arena::WALL_TOP + 1)..arena::WALL_BOTTOM),
        );
        if is_free(candidate, roster, hazard) {
            return Ok(candidate);
        }
    }

    tracing::warn!(
        "No free cell after {} draws, scanning the arena",
        MAX_PLACEMENT_ATTEMPTS
    );
    arena::interior_cells()
        .filter(|&p| is_free(p, roster, hazard))
        .choose(rng)
        .ok_or(SnakeError::ArenaFull)
}

/// First active snake (index order) whose head is on the food eats it.
///
/// The eater grows by one and counts an apple, and the food moves. At most
/// one snake eats per tick.
pub fn check_consumption<R: Rng>(
    food: &mut Food,
    roster: &mut Roster,
    hazard: &HazardGrid,
    rng: &mut R,
) -> Result<Option<PlayerId>> {
    let eater = roster
        .active()
        .find(|s| s.head() == Some(food.position))
        .map(|s| s.id);

    let Some(id) = eater else {
        return Ok(None);
    };

    let snake = roster.get_mut(id);
    snake.grow(1);
    snake.stats.apples += 1;

    food.position = place_food(rng, roster, hazard)?;
    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_placement_is_interior_and_free() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut roster = Roster::new();
        for id in PlayerId::all() {
            roster.get_mut(id).spawn();
        }
        let hazard = HazardGrid::for_arena();

        for _ in 0..200 {
            let pos = place_food(&mut rng, &roster, &hazard).unwrap();
            assert!(arena::is_interior(pos));
            assert!(!roster.occupies(pos));
        }
    }

    #[test]
    fn test_placement_finds_last_free_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let roster = Roster::new();
        let mut hazard = HazardGrid::for_arena();
        while hazard.filled_count() < hazard.cell_count() - 1 {
            hazard.advance();
        }

        let pos = place_food(&mut rng, &roster, &hazard).unwrap();
        assert!(!hazard.is_filled(pos));
        assert!(arena::is_interior(pos));
    }

    #[test]
    fn test_full_arena_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let roster = Roster::new();
        let mut hazard = HazardGrid::for_arena();
        while !hazard.is_complete() {
            hazard.advance();
        }

        let err = place_food(&mut rng, &roster, &hazard).unwrap_err();
        assert!(matches!(err, SnakeError::ArenaFull));
    }

    #[test]
    fn test_consumption_grows_and_moves_food() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut roster = Roster::new();
        let hazard = HazardGrid::for_arena();
        let mut food = Food::new();

        roster
            .get_mut(PlayerId(2))
            .spawn_at(food.position, Direction::Right);

        let eater = check_consumption(&mut food, &mut roster, &hazard, &mut rng).unwrap();
        assert_eq!(eater, Some(PlayerId(2)));

        let snake = roster.get(PlayerId(2));
        assert_eq!(snake.current_length(), 4);
        assert_eq!(snake.stats.apples, 1);
        assert_eq!(snake.stats.max_length, 4);
        assert_ne!(food.position, arena::INITIAL_FOOD);
        assert!(!roster.occupies(food.position));
    }

    #[test]
    fn test_only_first_snake_in_index_order_eats() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut roster = Roster::new();
        let hazard = HazardGrid::for_arena();
        let mut food = Food::new();
        let spot = food.position;

        roster.get_mut(PlayerId(5)).spawn_at(spot, Direction::Up);
        roster.get_mut(PlayerId(9)).spawn_at(spot, Direction::Down);

        let eater = check_consumption(&mut food, &mut roster, &hazard, &mut rng).unwrap();
        assert_eq!(eater, Some(PlayerId(5)));
        assert_eq!(roster.get(PlayerId(9)).stats.apples, 0);
        assert_eq!(roster.get(PlayerId(9)).current_length(), 3);
    }

    #[test]
    fn test_no_consumption_leaves_food() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut roster = Roster::new();
        let hazard = HazardGrid::for_arena();
        let mut food = Food::new();
        roster.get_mut(PlayerId(0)).spawn();

        assert_eq!(
            check_consumption(&mut food, &mut roster, &hazard, &mut rng).unwrap(),
            None
        );
        assert_eq!(food.position, arena::INITIAL_FOOD);
    }
}
