/// Cell contents and their glyphs.
/// Glyph characters are queried via methods so board semantics are
/// centralized here.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Glyph {
    #[default]
    Empty,
    Goal,
    Star,
    Enemy,
    Player,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Empty => ' ',
            Glyph::Goal => 'G',
            Glyph::Star => '*',
            Glyph::Enemy => 'E',
            Glyph::Player => '@',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        assert_eq!(Glyph::default(), Glyph::Empty);
        assert_eq!(Glyph::default().as_char(), ' ');
    }
}
