/// Line-based command reader.
///
/// One line per turn. Only the first character matters; the rest of the line
/// (and any `\r` from Windows line endings) is ignored.

use std::io::{self, BufRead};

use crate::domain::entity::MoveDir;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(MoveDir),
    /// Blank line: prompt again, no turn consumed.
    Empty,
    /// Unrecognised first character.
    Invalid(char),
    /// Input stream closed.
    Eof,
}

pub fn read_command<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Command> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(Command::Eof);
    }
    Ok(parse_line(&line))
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\n', '\r']);
    match line.chars().next() {
        None => Command::Empty,
        Some(c) => MoveDir::from_key(c).map_or(Command::Invalid(c), Command::Move),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn first_char_selects_direction() {
        assert_eq!(parse_line("w\n"), Command::Move(MoveDir::Up));
        assert_eq!(parse_line("Dance\n"), Command::Move(MoveDir::Right));
        assert_eq!(parse_line("s"), Command::Move(MoveDir::Down));
        assert_eq!(parse_line("A\r\n"), Command::Move(MoveDir::Left));
    }

    #[test]
    fn blank_and_bad_lines() {
        assert_eq!(parse_line("\n"), Command::Empty);
        assert_eq!(parse_line("\r\n"), Command::Empty);
        assert_eq!(parse_line("x\n"), Command::Invalid('x'));
        assert_eq!(parse_line(" w\n"), Command::Invalid(' '));
    }

    #[test]
    fn reads_lines_until_eof() {
        let mut input = Cursor::new("d\n\nq\nw");
        assert_eq!(read_command(&mut input).unwrap(), Command::Move(MoveDir::Right));
        assert_eq!(read_command(&mut input).unwrap(), Command::Empty);
        assert_eq!(read_command(&mut input).unwrap(), Command::Invalid('q'));
        assert_eq!(read_command(&mut input).unwrap(), Command::Move(MoveDir::Up));
        assert_eq!(read_command(&mut input).unwrap(), Command::Eof);
        assert_eq!(read_command(&mut input).unwrap(), Command::Eof);
    }
}
