//! OXMO Path reads SVG path data into the point lists used by Modelica's `Line` and `Polygon`.
//!
//! Straight commands (`M`, `L`, `H`, `V`, `Z`, absolute and relative) are followed exactly.
//! Curve commands are approximated with a straight segment to their end point, and the path is
//! flagged as [smooth](PathPoints::smooth) so that the target can interpolate between the points.
//!
//! # Example
//!
//! ```
//! use oxmo_path::{PathPoints, Point};
//!
//! let path = PathPoints::parse("M0,0 L10,0 L10,10 Z").unwrap();
//! assert_eq!(
//!     path.points,
//!     vec![Point([0.0, 0.0]), Point([10.0, 0.0]), Point([10.0, -10.0])]
//! );
//! assert!(!path.smooth);
//! ```
pub mod command;
mod parser;

pub use parser::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
/// A point as `[x, y]`
pub struct Point(pub [f64; 2]);

impl Point {
    /// Returns the x coordinate
    pub fn x(self) -> f64 {
        self.0[0]
    }

    /// Returns the y coordinate
    pub fn y(self) -> f64 {
        self.0[1]
    }

    /// Mirrors the point across the x axis, converting between a downward and upward y axis
    #[must_use]
    pub fn flip(self) -> Self {
        Self([self.0[0], -self.0[1]])
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The points visited by a path, with y pointing upwards
pub struct PathPoints {
    /// Every point drawn to, including the start of each subpath
    pub points: Vec<Point>,
    /// Whether the path contains curve commands
    pub smooth: bool,
}

impl PathPoints {
    /// Parses a path definition from a string
    ///
    /// # Errors
    /// If the definition contains an unknown command or is missing arguments
    pub fn parse(definition: &str) -> Result<Self, Error> {
        let points = parser::Parser::default()
            .parse(definition)?
            .into_iter()
            .map(Point::flip)
            .collect();
        Ok(Self {
            points,
            smooth: is_smooth(definition),
        })
    }
}

/// Returns whether the path definition contains any curve commands.
pub fn is_smooth(definition: &str) -> bool {
    definition
        .chars()
        .any(|char| matches!(char.to_ascii_lowercase(), 'c' | 's' | 'q' | 't' | 'a'))
}
