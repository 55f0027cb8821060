//! Absolute lengths and the unit conversions used for fonts and dimensions.
//!
//! Modelica coordinates are treated as millimetres, and one SVG user unit (`px`) is taken to be
//! one millimetre.
use oxmo_parse::{Parse as _, Parser};

use crate::error::Error;

/// Millimetres per point
const MM_PER_PT: f64 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An absolute unit of length
pub enum Unit {
    /// Points, 1/72 of an inch
    Pt,
    /// Pixels, or unitless user units
    Px,
    /// Picas, 12 points
    Pc,
    /// Millimetres
    Mm,
    /// Centimetres
    Cm,
    /// Inches
    In,
}

impl Unit {
    /// The number of millimetres in one of this unit
    pub fn to_mm(self) -> f64 {
        match self {
            Self::Pt => MM_PER_PT,
            Self::Px | Self::Mm => 1.0,
            Self::Pc => 12.0 * MM_PER_PT,
            Self::Cm => 10.0,
            Self::In => 25.4,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "pt" => Self::Pt,
            "" | "px" => Self::Px,
            "pc" => Self::Pc,
            "mm" => Self::Mm,
            "cm" => Self::Cm,
            "in" => Self::In,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A number with an absolute unit
pub struct Length {
    /// The magnitude in `unit`
    pub value: f64,
    /// The unit of `value`
    pub unit: Unit,
}

impl Length {
    /// Reads a `<number><unit>` value.
    ///
    /// Relative units (`em`, `%`, ...) are read as pixels unless `strict` is set.
    ///
    /// # Errors
    ///
    /// When the value is not a number followed by a unit, or the unit is relative and `strict` is
    /// set
    pub fn parse(property: &str, value: &str, strict: bool) -> Result<Self, Error> {
        let mut input = Parser::new(value.trim());
        let number = f64::parse(&mut input).map_err(|_| Error::malformed(property, value))?;
        let suffix = input.take_matches(|char| char.is_ascii_alphabetic() || char == '%');
        input
            .expect_done()
            .map_err(|_| Error::malformed(property, value))?;

        let unit = match Unit::from_suffix(suffix) {
            Some(unit) => unit,
            None if strict => return Err(Error::unsupported(property, value)),
            None => {
                log::warn!("`{property}: {value}` uses an unsupported unit, reading it as px");
                Unit::Px
            }
        };
        Ok(Self {
            value: number,
            unit,
        })
    }

    /// Converts the length to millimetres
    pub fn to_mm(self) -> f64 {
        self.value * self.unit.to_mm()
    }

    /// Converts the length to points
    pub fn to_pt(self) -> f64 {
        self.to_mm() / MM_PER_PT
    }
}

/// Reads the number at the start of a value, ignoring anything that follows it.
pub fn leading_number(value: &str) -> Option<f64> {
    let mut input = Parser::new(value);
    input.skip_whitespace();
    f64::parse(&mut input).ok()
}
