/// Enemy AI: uniform random wander.
///
/// Each enemy draws one of five options (four directions or stay). The move
/// is dropped if it would leave the board or land on the goal. Enemies do not
/// look at the player and do not avoid each other.

use crate::config::BoardConfig;

use super::entity::{Pos, ENEMY_STEPS};
use super::rng::RandomSource;

/// Where the enemy at `from` ends up this turn.
pub fn wander(rng: &mut dyn RandomSource, board: BoardConfig, from: Pos, goal: Pos) -> Pos {
    let pick = rng.below(ENEMY_STEPS.len() as u32) as usize;
    let Some(dir) = ENEMY_STEPS[pick] else { return from };
    let to = from.step(dir);
    if to.in_bounds(board.rows, board.cols) && to != goal {
        to
    } else {
        from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rng::{ScriptedRng, SeededRng};

    const BOARD: BoardConfig = BoardConfig { rows: 12, cols: 30 };
    const GOAL: Pos = Pos::new(0, 0);

    #[test]
    fn each_draw_maps_to_one_option() {
        let from = Pos::new(5, 5);
        let expected = [
            Pos::new(4, 5),
            Pos::new(6, 5),
            Pos::new(5, 4),
            Pos::new(5, 6),
            Pos::new(5, 5),
        ];
        for (draw, want) in expected.iter().enumerate() {
            let mut rng = ScriptedRng::new(&[draw as u32]);
            assert_eq!(wander(&mut rng, BOARD, from, GOAL), *want);
        }
    }

    #[test]
    fn edge_move_is_dropped() {
        let mut rng = ScriptedRng::new(&[0]);
        assert_eq!(wander(&mut rng, BOARD, Pos::new(0, 10), GOAL), Pos::new(0, 10));
        let mut rng = ScriptedRng::new(&[3]);
        assert_eq!(wander(&mut rng, BOARD, Pos::new(3, 29), GOAL), Pos::new(3, 29));
    }

    #[test]
    fn never_steps_onto_goal() {
        let mut rng = ScriptedRng::new(&[2]);
        assert_eq!(wander(&mut rng, BOARD, Pos::new(0, 1), GOAL), Pos::new(0, 1));

        let mut rng = SeededRng::new(11);
        let mut e = Pos::new(1, 1);
        for _ in 0..500 {
            e = wander(&mut rng, BOARD, e, GOAL);
            assert_ne!(e, GOAL);
            assert!(e.in_bounds(BOARD.rows, BOARD.cols));
        }
    }
}
