/// WorldState: the complete snapshot of a running game.
///
/// The snapshot is plain data. `step` mutates it, the renderer reads it,
/// and nothing in here performs I/O.

use log::debug;

use crate::config::{BoardConfig, GameConfig};
use crate::domain::entity::Pos;
use crate::domain::placement;
use crate::domain::rng::RandomSource;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::Running)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub board: BoardConfig,

    // ── Entities ──
    pub player: Pos,
    pub goal: Pos,
    /// Distinct cells, never the goal.
    pub stars: Vec<Pos>,
    /// May share cells with each other once they start moving.
    pub enemies: Vec<Pos>,

    // ── Game tracking ──
    pub score: u32,
    pub turns: u32,
    pub phase: Phase,
}

impl WorldState {
    /// Fresh game: player in the centre, everything else placed at random.
    pub fn new_game(config: &GameConfig, rng: &mut dyn RandomSource) -> Self {
        let board = config.board;
        let player = Pos::new(board.rows / 2, board.cols / 2);
        let goal = placement::place_goal(rng, board, player);
        let stars = placement::place_unique(rng, board, config.entities.stars, &[player, goal]);
        let enemies = placement::place_unique(rng, board, config.entities.enemies, &[player, goal]);
        debug!("new game: player {player:?} goal {goal:?} stars {stars:?} enemies {enemies:?}");
        WorldState {
            board,
            player,
            goal,
            stars,
            enemies,
            score: 0,
            turns: 0,
            phase: Phase::Running,
        }
    }

    pub fn in_bounds(&self, p: Pos) -> bool {
        p.in_bounds(self.board.rows, self.board.cols)
    }

    pub fn enemy_at(&self, p: Pos) -> bool {
        self.enemies.contains(&p)
    }
}

#[cfg(test)]
impl WorldState {
    /// Hand-built layout for scenario tests.
    pub fn with_layout(
        board: BoardConfig,
        player: Pos,
        goal: Pos,
        stars: &[Pos],
        enemies: &[Pos],
    ) -> Self {
        WorldState {
            board,
            player,
            goal,
            stars: stars.to_vec(),
            enemies: enemies.to_vec(),
            score: 0,
            turns: 0,
            phase: Phase::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rng::SeededRng;

    #[test]
    fn new_game_respects_placement_rules() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let mut rng = SeededRng::new(seed);
            let w = WorldState::new_game(&config, &mut rng);
            assert_eq!(w.player, Pos::new(6, 15));
            assert_ne!(w.goal, w.player);
            assert_eq!(w.stars.len(), 6);
            assert_eq!(w.enemies.len(), 3);
            for s in &w.stars {
                assert!(w.in_bounds(*s));
                assert_ne!(*s, w.player);
                assert_ne!(*s, w.goal);
                assert_eq!(w.stars.iter().filter(|o| *o == s).count(), 1);
            }
            for e in &w.enemies {
                assert!(w.in_bounds(*e));
                assert_ne!(*e, w.player);
                assert_ne!(*e, w.goal);
                assert_eq!(w.enemies.iter().filter(|o| *o == e).count(), 1);
            }
            assert_eq!(w.phase, Phase::Running);
            assert_eq!((w.score, w.turns), (0, 0));
        }
    }

    #[test]
    fn only_running_is_live() {
        assert!(!Phase::Running.is_over());
        assert!(Phase::Won.is_over());
        assert!(Phase::Lost.is_over());
    }
}
