use oxmo_parse::{Parse as _, Parser as Input};

use crate::{
    command::{Command, Kind},
    Point,
};

#[derive(Default)]
pub(crate) struct Parser {
    points: Vec<Point>,
    current_command: Option<Command>,
    current: Point,
    subpath_start: Point,
    pending_start: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// An error that can occur while reading path data
pub enum Error {
    /// Coordinates were given before any command
    NoCommand(usize),
    /// A command other than `m` or `M` started the path
    InvalidFirstCommand(char),
    /// A command letter outside of the path grammar was found
    UnknownCommand(char, usize),
    /// A command was missing some of its arguments
    CommandEndedTooEarly(char, usize),
}

impl Parser {
    pub fn parse(mut self, definition: &str) -> Result<Vec<Point>, Error> {
        let mut input = Input::new(definition);
        input.skip_separators();
        while !input.is_empty() {
            let cursor = input.cursor();
            let command = match input.current() {
                Ok(char) if char.is_alphabetic() => {
                    input.advance();
                    Command::from_letter(char).ok_or(Error::UnknownCommand(char, cursor))?
                }
                _ => self
                    .current_command
                    .and_then(Command::implicit)
                    .ok_or(Error::NoCommand(cursor))?,
            };
            if self.current_command.is_none() && command.kind != Kind::Move {
                return Err(Error::InvalidFirstCommand(command.letter()));
            }

            let mut args = [0.0; 7];
            for arg in args.iter_mut().take(command.arity()) {
                input.skip_separators();
                *arg = f64::parse(&mut input)
                    .map_err(|_| Error::CommandEndedTooEarly(command.letter(), input.cursor()))?;
            }
            self.apply(command, &args);
            input.skip_separators();
        }
        Ok(self.points)
    }

    fn apply(&mut self, command: Command, args: &[f64; 7]) {
        let previous = self.current_command.replace(command);
        let [x, y] = self.current.0;
        let [dx, dy] = if command.relative { [x, y] } else { [0.0; 2] };
        let next = match command.kind {
            Kind::Move => {
                self.current = Point([dx + args[0], dy + args[1]]);
                self.subpath_start = self.current;
                self.pending_start = true;
                return;
            }
            Kind::Close => {
                // a subpath closed right after its move is a single point
                if previous.is_some_and(|previous| previous.kind == Kind::Move) {
                    self.points.push(self.subpath_start);
                }
                self.current = self.subpath_start;
                self.pending_start = true;
                return;
            }
            Kind::Horizontal => Point([dx + args[0], y]),
            Kind::Vertical => Point([x, dy + args[0]]),
            _ => {
                let end = command.arity() - 2;
                if command.is_curve() {
                    log::debug!("approximating `{}` with a straight segment", command.letter());
                }
                Point([dx + args[end], dy + args[end + 1]])
            }
        };
        if self.pending_start {
            self.points.push(self.current);
            self.pending_start = false;
        }
        self.points.push(next);
        self.current = next;
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommand(cursor) => write!(f, "expected a path command at {cursor}"),
            Self::InvalidFirstCommand(char) => {
                write!(f, "path data must start with `M` or `m`, not `{char}`")
            }
            Self::UnknownCommand(char, cursor) => {
                write!(f, "unknown path command `{char}` at {cursor}")
            }
            Self::CommandEndedTooEarly(char, cursor) => {
                write!(f, "`{char}` is missing arguments at {cursor}")
            }
        }
    }
}

impl std::error::Error for Error {}
