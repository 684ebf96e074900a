/// Randomized, collision-free placement of goal, stars and enemies.
///
/// All sampling is rejection sampling over uniform cells: draw a row, then a
/// column, and retry on collision. `place_goal` and `place_unique` retry
/// without limit (config validation guarantees free cells exist);
/// `place_respawn` gives up after a bounded number of tries.

use log::trace;

use crate::config::BoardConfig;

use super::entity::Pos;
use super::rng::RandomSource;

/// Uniformly random in-bounds cell.
pub fn random_pos(rng: &mut dyn RandomSource, board: BoardConfig) -> Pos {
    let row = rng.below(board.rows as u32) as i32;
    let col = rng.below(board.cols as u32) as i32;
    Pos::new(row, col)
}

/// Any cell except the player's.
pub fn place_goal(rng: &mut dyn RandomSource, board: BoardConfig, player: Pos) -> Pos {
    loop {
        let p = random_pos(rng, board);
        if p != player {
            return p;
        }
        trace!("goal sample {p:?} hit the player, resampling");
    }
}

/// `count` distinct cells, none of them in `excluded`.
pub fn place_unique(
    rng: &mut dyn RandomSource,
    board: BoardConfig,
    count: usize,
    excluded: &[Pos],
) -> Vec<Pos> {
    let mut placed: Vec<Pos> = Vec::with_capacity(count);
    while placed.len() < count {
        let p = random_pos(rng, board);
        if excluded.contains(&p) || placed.contains(&p) {
            trace!("placement sample {p:?} collided, resampling");
            continue;
        }
        placed.push(p);
    }
    placed
}

/// One free cell within `max_tries` samples, or `None`.
pub fn place_respawn(
    rng: &mut dyn RandomSource,
    board: BoardConfig,
    excluded: &[Pos],
    max_tries: u32,
) -> Option<Pos> {
    (0..max_tries)
        .map(|_| random_pos(rng, board))
        .find(|p| !excluded.contains(p))
}
