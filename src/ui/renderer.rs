/// Presentation layer: clear-and-redraw console renderer.
///
/// How it works:
///   1. Rebuild the `Board` from the world snapshot
///   2. Queue a full clear + cursor home
///   3. Queue every row framed by `|`, then the status and help lines
///   4. Flush once
///
/// The renderer only reads `WorldState`; it never decides game outcomes.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::sim::board::Board;
use crate::sim::event::GameEvent;
use crate::sim::world::WorldState;

const BORDER: char = '|';
const HELP_LINE: &str = "Controls: W A S D + Enter. Reach 'G' to win. Collect '*' for +1. Avoid 'E'.";
const PROMPT: &str = "Move (W/A/S/D): ";
pub const INVALID_KEY: &str = "Invalid key. Use W/A/S/D.";

/// Player-facing text for an event, if it has any.
pub fn event_message(event: &GameEvent) -> Option<&'static str> {
    match event {
        GameEvent::ReachedGoal => Some("You reached the goal. You win!"),
        GameEvent::BumpedEnemy => Some("You bumped into an enemy. Game over."),
        GameEvent::EnemyContact => Some("An enemy caught you. Game over."),
        GameEvent::AllStarsCollected => Some("All stars collected. Now go to G for a bonus!"),
        _ => None,
    }
}

pub struct Renderer<W: Write> {
    writer: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W) -> Self {
        Renderer { writer }
    }

    pub fn render(&mut self, world: &WorldState) -> io::Result<()> {
        let board = Board::rebuild(world);
        queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        for r in 0..board.rows() {
            queue!(self.writer, Print(format!("{BORDER}{}{BORDER}\n", board.row_text(r))))?;
        }
        queue!(
            self.writer,
            Print(format!("\nScore: {}    Turns: {}\n", world.score, world.turns)),
            Print(format!("{HELP_LINE}\n"))
        )?;
        self.writer.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()
    }

    /// A notice on its own paragraph, e.g. win/lose.
    pub fn announce(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "\n{text}")?;
        self.writer.flush()
    }

    /// Inline feedback right under the prompt.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    pub fn summary(&mut self, world: &WorldState) -> io::Result<()> {
        writeln!(
            self.writer,
            "\nFinal score: {}   Turns: {}\nThanks for playing.",
            world.score, world.turns
        )?;
        self.writer.flush()
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::domain::entity::Pos;

    fn output(r: &Renderer<Vec<u8>>) -> String {
        String::from_utf8(r.writer().clone()).unwrap()
    }

    #[test]
    fn frame_has_bordered_rows_and_status() {
        let mut w = WorldState::with_layout(
            BoardConfig { rows: 2, cols: 3 },
            Pos::new(1, 2),
            Pos::new(0, 0),
            &[Pos::new(0, 1)],
            &[Pos::new(1, 0)],
        );
        w.score = 4;
        w.turns = 9;
        let mut r = Renderer::new(Vec::new());
        r.render(&w).unwrap();
        let out = output(&r);

        assert!(out.starts_with("\x1b[2J"), "frame must start with a clear: {out:?}");
        assert!(out.contains("|G* |\n|E @|\n"));
        assert!(out.contains("\nScore: 4    Turns: 9\n"));
        assert!(out.ends_with(&format!("{HELP_LINE}\n")));
    }

    #[test]
    fn summary_and_prompt_text() {
        let w = WorldState::with_layout(
            BoardConfig { rows: 1, cols: 2 }, Pos::new(0, 0), Pos::new(0, 1), &[], &[],
        );
        let mut r = Renderer::new(Vec::new());
        r.prompt().unwrap();
        r.summary(&w).unwrap();
        assert_eq!(
            output(&r),
            "Move (W/A/S/D): \nFinal score: 0   Turns: 0\nThanks for playing.\n"
        );
    }

    #[test]
    fn only_outcomes_and_notice_have_text() {
        assert!(event_message(&GameEvent::ReachedGoal).is_some());
        assert!(event_message(&GameEvent::EnemyContact).is_some());
        assert!(event_message(&GameEvent::BumpedEnemy).is_some());
        assert!(event_message(&GameEvent::AllStarsCollected).is_some());
        assert!(event_message(&GameEvent::PlayerBlocked).is_none());
        assert!(event_message(&GameEvent::RespawnSkipped).is_none());
    }
}
