/// Board: the character grid derived from a `WorldState`.
///
/// Never stored between turns. Stamp order is goal, stars, enemies, player,
/// so a later stamp wins a shared cell and the player is always visible.

use crate::domain::entity::Pos;
use crate::domain::tile::Glyph;

use super::world::WorldState;

pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Glyph>,
}

impl Board {
    pub fn blank(rows: usize, cols: usize) -> Self {
        Board { rows, cols, cells: vec![Glyph::Empty; rows * cols] }
    }

    pub fn rebuild(world: &WorldState) -> Self {
        let mut board = Board::blank(world.board.rows as usize, world.board.cols as usize);
        board.set(world.goal, Glyph::Goal);
        for &s in &world.stars {
            board.set(s, Glyph::Star);
        }
        for &e in &world.enemies {
            board.set(e, Glyph::Enemy);
        }
        board.set(world.player, Glyph::Player);
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (r, c) = (p.row as usize, p.col as usize);
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    fn set(&mut self, p: Pos, g: Glyph) {
        if let Some(i) = self.index(p) {
            self.cells[i] = g;
        }
    }

    pub fn get(&self, p: Pos) -> Glyph {
        self.index(p).map_or(Glyph::Empty, |i| self.cells[i])
    }

    /// Row `r` as text, one char per cell.
    pub fn row_text(&self, r: usize) -> String {
        (0..self.cols)
            .map(|c| self.get(Pos::new(r as i32, c as i32)).as_char())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    fn world() -> WorldState {
        WorldState::with_layout(
            BoardConfig { rows: 3, cols: 4 },
            Pos::new(1, 1),
            Pos::new(0, 0),
            &[Pos::new(0, 3), Pos::new(2, 2)],
            &[Pos::new(2, 0)],
        )
    }

    #[test]
    fn stamps_every_entity() {
        let b = Board::rebuild(&world());
        assert_eq!(b.rows(), 3);
        assert_eq!(b.row_text(0), "G  *");
        assert_eq!(b.row_text(1), " @  ");
        assert_eq!(b.row_text(2), "E * ");
    }

    #[test]
    fn later_stamps_win() {
        let mut w = world();
        w.enemies = vec![Pos::new(0, 3), Pos::new(1, 1)];
        let b = Board::rebuild(&w);
        assert_eq!(b.get(Pos::new(0, 3)), Glyph::Enemy);
        assert_eq!(b.get(Pos::new(1, 1)), Glyph::Player);
    }

    #[test]
    fn out_of_bounds_reads_blank() {
        let b = Board::rebuild(&world());
        assert_eq!(b.get(Pos::new(-1, 0)), Glyph::Empty);
        assert_eq!(b.get(Pos::new(0, 4)), Glyph::Empty);
    }
}
