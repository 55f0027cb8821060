//! The commands of path data, such as `M` or `c`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a path command draws
pub enum Kind {
    /// `M`, starts a new subpath
    Move,
    /// `Z`, returns to the start of the subpath
    Close,
    /// `L`
    Line,
    /// `H`, a line along the x axis
    Horizontal,
    /// `V`, a line along the y axis
    Vertical,
    /// `C`
    Cubic,
    /// `S`
    SmoothCubic,
    /// `Q`
    Quadratic,
    /// `T`
    SmoothQuadratic,
    /// `A`
    Arc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A path command, read from its letter
pub struct Command {
    /// What the command draws
    pub kind: Kind,
    /// Whether the coordinates are offsets from the current point, written in lowercase
    pub relative: bool,
}

impl Command {
    /// Reads a command letter, returning `None` for letters outside of the path grammar
    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => Kind::Move,
            'Z' => Kind::Close,
            'L' => Kind::Line,
            'H' => Kind::Horizontal,
            'V' => Kind::Vertical,
            'C' => Kind::Cubic,
            'S' => Kind::SmoothCubic,
            'Q' => Kind::Quadratic,
            'T' => Kind::SmoothQuadratic,
            'A' => Kind::Arc,
            _ => return None,
        };
        Some(Self {
            kind,
            relative: letter.is_ascii_lowercase(),
        })
    }

    /// The letter the command is written with
    pub fn letter(self) -> char {
        let letter = match self.kind {
            Kind::Move => 'M',
            Kind::Close => 'Z',
            Kind::Line => 'L',
            Kind::Horizontal => 'H',
            Kind::Vertical => 'V',
            Kind::Cubic => 'C',
            Kind::SmoothCubic => 'S',
            Kind::Quadratic => 'Q',
            Kind::SmoothQuadratic => 'T',
            Kind::Arc => 'A',
        };
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// The number of arguments the command takes. The last two are always the end point, for
    /// commands that take two or more.
    pub fn arity(self) -> usize {
        match self.kind {
            Kind::Close => 0,
            Kind::Horizontal | Kind::Vertical => 1,
            Kind::Move | Kind::Line | Kind::SmoothQuadratic => 2,
            Kind::SmoothCubic | Kind::Quadratic => 4,
            Kind::Cubic => 6,
            Kind::Arc => 7,
        }
    }

    /// Whether the command draws a curve, which can only be approximated by its end point
    pub fn is_curve(self) -> bool {
        matches!(
            self.kind,
            Kind::Cubic | Kind::SmoothCubic | Kind::Quadratic | Kind::SmoothQuadratic | Kind::Arc
        )
    }

    /// The command repeated by coordinates that follow this one without a letter.
    /// Coordinates after a move draw lines.
    pub fn implicit(self) -> Option<Self> {
        match self.kind {
            Kind::Close => None,
            Kind::Move => Some(Self {
                kind: Kind::Line,
                ..self
            }),
            _ => Some(self),
        }
    }
}

#[test]
fn letters() {
    for letter in "MmZzLlHhVvCcSsQqTtAa".chars() {
        let command = Command::from_letter(letter);
        assert_eq!(command.map(Command::letter), Some(letter));
    }
    assert_eq!(Command::from_letter('X'), None);
    assert_eq!(Command::from_letter('z').map(Command::arity), Some(0));
    assert_eq!(
        Command::from_letter('m').and_then(Command::implicit),
        Command::from_letter('l')
    );
}
