//! Numbers, as written in path data, lengths, and transform arguments
use crate::{error::Error, Parse, Parser};

fn skip_sign(input: &mut Parser) {
    let _ = input.skip_char('-') || input.skip_char('+');
}

fn skip_digits(input: &mut Parser) -> usize {
    input.take_matches(|char| char.is_ascii_digit()).len()
}

impl<'input> Parse<'input> for f64 {
    /// Reads a number with an optional sign, fraction, and exponent.
    ///
    /// Numbers may be written back-to-back, as in `10-5.5.5`, and an `e` followed by `m` or `x`
    /// is left as the start of a unit.
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();
        let number = input.slice();
        let start = input.cursor();

        skip_sign(input);
        let mut digits = skip_digits(input);
        if input.skip_char('.') {
            digits += skip_digits(input);
        }
        if digits == 0 {
            return Err(Error::InvalidNumber);
        }

        let rest = input.slice();
        if rest.starts_with(['e', 'E']) && !rest[1..].starts_with(['m', 'x']) {
            input.advance();
            skip_sign(input);
            if skip_digits(input) == 0 {
                return Err(Error::InvalidNumber);
            }
        }

        number[..input.cursor() - start]
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .ok_or(Error::InvalidNumber)
    }
}
