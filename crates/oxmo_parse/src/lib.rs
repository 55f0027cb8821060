//! Cursor-based reading of SVG attribute and style values, such as numbers, colours, and
//! transform functions.
//!
//! ```
//! use oxmo_parse::{Parse, Parser};
//!
//! let mut input = Parser::new("10,-2.5e1");
//! assert_eq!(f64::parse(&mut input), Ok(10.0));
//! input.skip_separators();
//! assert_eq!(f64::parse(&mut input), Ok(-25.0));
//! assert!(input.is_empty());
//! ```
use error::Error;

pub mod error;
mod number;

/// A cursor over the text of a single value
#[derive(Debug, Clone)]
pub struct Parser<'input> {
    input: &'input str,
    cursor: usize,
}

impl<'input> Parser<'input> {
    /// Starts reading from the beginning of `input`
    pub fn new(input: &'input str) -> Self {
        Self { input, cursor: 0 }
    }

    /// The byte offset of the next character
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The input that is yet to be read
    pub fn slice(&self) -> &'input str {
        &self.input[self.cursor..]
    }

    /// Whether all the input has been read
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.input.len()
    }

    /// Peeks at the next character
    ///
    /// # Errors
    /// At the end of the input
    pub fn current(&self) -> Result<char, Error<'input>> {
        self.slice().chars().next().ok_or(Error::EndOfInput)
    }

    /// Steps over the next character, if any
    pub fn advance(&mut self) {
        if let Some(char) = self.slice().chars().next() {
            self.cursor += char.len_utf8();
        }
    }

    /// Runs `f`, restoring the cursor when it fails
    ///
    /// # Errors
    /// When `f` fails
    pub fn try_parse<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        let start = self.cursor;
        f(self).inspect_err(|_| self.cursor = start)
    }

    /// Reads the longest run of characters matching `f`
    pub fn take_matches(&mut self, f: impl FnMut(char) -> bool) -> &'input str {
        let rest = self.slice();
        let skipped = rest.len() - rest.trim_start_matches(f).len();
        self.cursor += skipped;
        &rest[..skipped]
    }

    /// Steps over `char` when it is next, returning whether it was
    pub fn skip_char(&mut self, char: char) -> bool {
        let found = self.slice().starts_with(char);
        if found {
            self.cursor += char.len_utf8();
        }
        found
    }

    /// Steps over any whitespace
    pub fn skip_whitespace(&mut self) {
        self.take_matches(char::is_whitespace);
    }

    /// Steps over whitespace and at most one comma, as found between the items of a list
    pub fn skip_separators(&mut self) {
        self.skip_whitespace();
        if self.skip_char(',') {
            self.skip_whitespace();
        }
    }

    /// # Errors
    /// When there is input left to read
    pub fn expect_done(&self) -> Result<(), Error<'input>> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::ExpectedDone)
        }
    }

    /// Reads `expected` as the next character
    ///
    /// # Errors
    /// When another character, or nothing, is next
    pub fn expect_char(&mut self, expected: char) -> Result<(), Error<'input>> {
        let received = self.current()?;
        if received != expected {
            return Err(Error::ExpectedChar { expected, received });
        }
        self.advance();
        Ok(())
    }

    /// Reads a keyword, such as `rotate`, made of ASCII letters, digits, `-`, and `_`, that
    /// doesn't start with a digit or `-`
    ///
    /// # Errors
    /// When no keyword is next
    pub fn expect_ident(&mut self) -> Result<&'input str, Error<'input>> {
        if !self.current()?.is_ascii_alphabetic() && self.current()? != '_' {
            return Err(Error::ExpectedIdent {
                expected: "a keyword",
                received: self.slice(),
            });
        }
        Ok(self.take_matches(|char| char.is_ascii_alphanumeric() || matches!(char, '-' | '_')))
    }

    /// Reads the keyword `expected`
    ///
    /// # Errors
    /// When another keyword, or none, is next
    pub fn expect_ident_matching(&mut self, expected: &'static str) -> Result<(), Error<'input>> {
        match self.expect_ident()? {
            received if received == expected => Ok(()),
            received => Err(Error::ExpectedIdent { expected, received }),
        }
    }
}

/// A value that can be read from the text of an attribute or style declaration
pub trait Parse<'input>: Sized {
    /// Reads the value from the cursor onward, leaving anything after it
    ///
    /// # Errors
    /// If the value is malformed
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>>;

    /// Reads the value from the whole of `input`, allowing surrounding whitespace
    ///
    /// # Errors
    /// If the value is malformed or followed by anything else
    fn parse_string(input: &'input str) -> Result<Self, Error<'input>> {
        let mut parser = Parser::new(input);
        parser.skip_whitespace();
        let value = Self::parse(&mut parser)?;
        parser.skip_whitespace();
        parser.expect_done()?;
        Ok(value)
    }
}
