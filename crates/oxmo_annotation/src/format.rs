//! Formatting of the literal values written into annotations
use std::fmt::Display;

use itertools::Itertools as _;

/// Formats a number with at most two decimals.
///
/// Whole numbers drop their decimals and negative zero is written as `0`.
///
/// ```
/// use oxmo_annotation::format::number;
///
/// assert_eq!(number(1.0), "1");
/// assert_eq!(number(-2.346), "-2.35");
/// assert_eq!(number(-0.001), "0");
/// ```
pub fn number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let formatted = formatted.strip_suffix(".00").unwrap_or(&formatted);
    if formatted == "-0" {
        String::from("0")
    } else {
        formatted.to_string()
    }
}

/// Formats a point as `{x, y}`
pub fn point([x, y]: [f64; 2]) -> String {
    format!("{{{}, {}}}", number(x), number(y))
}

/// Formats a list of points as `{{x, y}, ...}`
pub fn points(points: &[[f64; 2]]) -> String {
    list(points.iter().copied().map(point))
}

/// Formats the box spanned by two corners as `{{x1,y1},{x2,y2}}`.
///
/// The corners are written lower-left first, whichever corners are given.
pub fn extent([x1, y1]: [f64; 2], [x2, y2]: [f64; 2]) -> String {
    format!(
        "{{{{{},{}}},{{{},{}}}}}",
        number(x1.min(x2)),
        number(y1.min(y2)),
        number(x1.max(x2)),
        number(y1.max(y2)),
    )
}

/// Formats a list of items inline, as `{a, b}`
pub fn list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    format!("{{{}}}", items.into_iter().join(", "))
}

/// Formats a quoted string literal
pub fn string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for char in value.chars() {
        match char {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            char => quoted.push(char),
        }
    }
    quoted.push('"');
    quoted
}
