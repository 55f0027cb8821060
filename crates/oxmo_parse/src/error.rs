//! Errors raised while reading attribute and style values
use std::fmt;

/// The reason a value could not be read
#[derive(Debug, Clone, PartialEq)]
pub enum Error<'input> {
    /// The value ended while more was expected
    EndOfInput,
    /// A number is malformed or out of range
    InvalidNumber,
    /// A complete value was read but more input follows it
    ExpectedDone,
    /// A delimiter such as a parenthesis is missing
    ExpectedChar {
        /// The delimiter expected
        expected: char,
        /// What was found in its place
        received: char,
    },
    /// A keyword, such as the name of a transform function, is missing or unknown
    ExpectedIdent {
        /// A description of the keywords expected
        expected: &'static str,
        /// What was found in its place
        received: &'input str,
    },
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput => f.write_str("value ended too early"),
            Self::InvalidNumber => f.write_str("invalid number"),
            Self::ExpectedDone => f.write_str("unexpected content after value"),
            Self::ExpectedChar { expected, received } => {
                write!(f, "expected `{expected}`, found `{received}`")
            }
            Self::ExpectedIdent { expected, received } => {
                write!(f, "expected {expected}, found `{received}`")
            }
        }
    }
}

impl std::error::Error for Error<'_> {}
