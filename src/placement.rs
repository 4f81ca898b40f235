use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Draws a uniformly random cell that is not in `occupied`.
///
/// Resamples the whole grid until a free cell comes up. Returns `None` when
/// `occupied` already covers every cell of the grid, the only case in which
/// resampling could never succeed.
#[must_use]
pub fn place_random<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    let free_cells = bounds.total_cells().saturating_sub(
        occupied
            .iter()
            .filter(|position| position.is_within_bounds(bounds))
            .count(),
    );
    if free_cells == 0 {
        return None;
    }

    let side = i32::from(bounds.side());
    loop {
        let candidate = Position {
            x: rng.gen_range(0..side),
            y: rng.gen_range(0..side),
        };
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }
}

/// Places `count` obstacles that avoid the snake and each other.
///
/// Each obstacle joins the occupied set before the next draw. Stops early
/// only if the grid runs out of cells, which a validated config rules out.
#[must_use]
pub fn place_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    count: usize,
) -> Vec<Position> {
    let mut occupied: HashSet<Position> = snake.segments().copied().collect();
    let mut obstacles = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(obstacle) = place_random(rng, bounds, &occupied) else {
            break;
        };
        occupied.insert(obstacle);
        obstacles.push(obstacle);
    }

    obstacles
}

/// Places food against the union of the full snake body and all obstacles.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    obstacles: &[Position],
) -> Option<Position> {
    let occupied: HashSet<Position> = snake
        .segments()
        .chain(obstacles.iter())
        .copied()
        .collect();

    place_random(rng, bounds, &occupied)
}
