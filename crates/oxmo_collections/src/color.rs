//! Colours written as hex or `rgb()` values
use oxmo_parse::{error::Error, Parse, Parser};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// An opaque colour of 8-bit channels
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// The colour used for lines when an element has no styles
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Reads a colour from a style value.
    ///
    /// Returns `None` for anything other than a hex or `rgb()` colour, such as named colours,
    /// `none`, `currentColor`, or `url()` references.
    pub fn resolve(value: &str) -> Option<Self> {
        Self::parse_string(value).ok()
    }

    fn parse_hex<'input>(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.expect_char('#')?;
        let digits = input.take_matches(|char| char.is_ascii_hexdigit());
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidNumber)
        };
        match digits.len() {
            3 => {
                // #rgb is short for #rrggbb
                let nibble = |i: usize| channel(i..i + 1).map(|n| n * 17);
                Ok(Self {
                    r: nibble(0)?,
                    g: nibble(1)?,
                    b: nibble(2)?,
                })
            }
            6 => Ok(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
            }),
            _ => Err(Error::InvalidNumber),
        }
    }

    fn parse_rgb<'input>(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.expect_ident_matching("rgb")?;
        input.skip_whitespace();
        input.expect_char('(')?;
        let r = Self::parse_channel(input)?;
        input.skip_separators();
        let g = Self::parse_channel(input)?;
        input.skip_separators();
        let b = Self::parse_channel(input)?;
        input.skip_whitespace();
        input.expect_char(')')?;
        Ok(Self { r, g, b })
    }

    fn parse_channel<'input>(input: &mut Parser<'input>) -> Result<u8, Error<'input>> {
        input.skip_whitespace();
        let value = f64::parse(input)?;
        let value = if input.skip_char('%') {
            // round half up
            (value * 255.0 / 100.0 + 0.5).floor()
        } else {
            value.round()
        };
        Ok(value.clamp(0.0, 255.0) as u8)
    }
}

impl<'input> Parse<'input> for Color {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();
        if input.current()? == '#' {
            Self::parse_hex(input)
        } else {
            Self::parse_rgb(input)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { r, g, b } = self;
        f.write_fmt(format_args!("{{{r},{g},{b}}}"))
    }
}

#[test]
fn equivalent_forms() {
    let red = Some(Color { r: 255, g: 0, b: 0 });
    assert_eq!(Color::resolve("#ff0000"), red);
    assert_eq!(Color::resolve("#F00"), red);
    assert_eq!(Color::resolve("rgb(255,0,0)"), red);
    assert_eq!(Color::resolve("rgb(100%,0%,0%)"), red);
    assert_eq!(Color::resolve(" rgb ( 100% , 0% ,0% ) "), red);
    assert_eq!(Color::resolve("#abc"), Color::resolve("#aabbcc"));
}

#[test]
fn percentages_round_half_up() {
    assert_eq!(
        Color::resolve("rgb(50%,20%,0%)"),
        Some(Color { r: 128, g: 51, b: 0 })
    );
    assert_eq!(
        Color::resolve("rgb(-10,300,12)"),
        Some(Color { r: 0, g: 255, b: 12 })
    );
}

#[test]
fn unsupported_forms() {
    assert_eq!(Color::resolve("red"), None);
    assert_eq!(Color::resolve("none"), None);
    assert_eq!(Color::resolve("currentColor"), None);
    assert_eq!(Color::resolve("inherit"), None);
    assert_eq!(Color::resolve("url(#gradient)"), None);
    assert_eq!(Color::resolve("#ff00"), None);
    assert_eq!(Color::resolve("rgba(0,0,0,0.5)"), None);
    assert_eq!(Color::resolve(""), None);
}

#[test]
fn display() {
    assert_eq!(Color { r: 1, g: 22, b: 255 }.to_string(), "{1,22,255}");
}
