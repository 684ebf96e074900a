/// Entities: positions and the moves that act on them.
///
/// Everything on the board (player, goal, stars, enemies) is just a `Pos`;
/// what a cell means is decided by which collection holds it.

/// A board cell. Signed so a candidate one step past an edge is representable
/// and can be rejected by `in_bounds`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Pos { row, col }
    }

    pub fn in_bounds(self, rows: i32, cols: i32) -> bool {
        self.row >= 0 && self.row < rows && self.col >= 0 && self.col < cols
    }

    /// The neighbouring cell in `dir`. May be out of bounds.
    pub fn step(self, dir: MoveDir) -> Pos {
        let (dr, dc) = dir.delta();
        Pos { row: self.row + dr, col: self.col + dc }
    }
}

/// One directional command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveDir {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDir {
    /// `(row, col)` offset.
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDir::Up => (-1, 0),
            MoveDir::Down => (1, 0),
            MoveDir::Left => (0, -1),
            MoveDir::Right => (0, 1),
        }
    }

    /// W/A/S/D, either case.
    pub fn from_key(c: char) -> Option<MoveDir> {
        match c.to_ascii_lowercase() {
            'w' => Some(MoveDir::Up),
            's' => Some(MoveDir::Down),
            'a' => Some(MoveDir::Left),
            'd' => Some(MoveDir::Right),
            _ => None,
        }
    }
}

/// What an enemy does on its turn. Index order is the draw order of the RNG.
pub const ENEMY_STEPS: [Option<MoveDir>; 5] = [
    Some(MoveDir::Up),
    Some(MoveDir::Down),
    Some(MoveDir::Left),
    Some(MoveDir::Right),
    None,
];
