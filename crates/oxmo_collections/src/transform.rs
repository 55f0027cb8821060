//! The transform attribute and the affine matrices it describes
use std::ops::Mul;

use oxmo_parse::{error::Error, Parse, Parser};
use oxmo_path::Point;

/// The tolerance within which a linear part is treated as a pure rotation
pub const ROTATION_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
/// A 2D affine transform, as the first two rows of the matrix
///
/// ```text
/// [a c e]
/// [b d f]
/// [0 0 1]
/// ```
pub struct Matrix {
    /// Horizontal scaling
    pub a: f64,
    /// Vertical skewing
    pub b: f64,
    /// Horizontal skewing
    pub c: f64,
    /// Vertical scaling
    pub d: f64,
    /// Horizontal translation
    pub e: f64,
    /// Vertical translation
    pub f: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// The translation and rotation recovered from a [`Matrix`]
pub struct Decomposed {
    /// The translated x position of the origin
    pub origin_x: f64,
    /// The translated y position of the origin
    pub origin_y: f64,
    /// The counter-clockwise rotation in degrees, in `(-180, 180]`
    pub rotation: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The transform that leaves every point in place
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Mirrors the y axis, converting between the downward y of SVG and the upward y of Modelica
    pub const FLIP: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: -1.0,
        e: 0.0,
        f: 0.0,
    };

    /// A translation by `(x, y)`
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::IDENTITY
        }
    }

    /// A rotation by `angle` degrees about the origin, clockwise when y points downward
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Returns the transform conjugated by [`Matrix::FLIP`], so that it acts on points with an
    /// upward y axis
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            a: self.a,
            b: -self.b,
            c: -self.c,
            d: self.d,
            e: self.e,
            f: -self.f,
        }
    }

    /// Transforms a point
    pub fn apply(&self, point: Point) -> Point {
        let [x, y] = point.0;
        Point([
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        ])
    }

    /// Returns whether the linear part is a rotation, without scaling or skewing
    pub fn is_rotation(&self) -> bool {
        (self.a - self.d).abs() < ROTATION_TOLERANCE
            && (self.b + self.c).abs() < ROTATION_TOLERANCE
            && (self.a * self.a + self.b * self.b - 1.0).abs() < ROTATION_TOLERANCE
    }

    /// Splits the matrix into a translation and a rotation.
    ///
    /// Any scaling or skewing in the linear part is discarded.
    pub fn decompose(&self) -> Decomposed {
        Decomposed {
            origin_x: self.e,
            origin_y: self.f,
            rotation: self.b.atan2(self.a).to_degrees(),
        }
    }
}

impl Mul for Matrix {
    type Output = Self;

    /// Composes the transforms, such that `rhs` is applied first
    fn mul(self, rhs: Self) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A single transform function of the `transform` attribute
///
/// [MDN | transform](https://developer.mozilla.org/en-US/docs/Web/SVG/Reference/Attribute/transform)
pub enum Transform {
    /// `matrix(a, b, c, d, e, f)`
    Matrix(Matrix),
    /// `translate(x [y])`, where `y` defaults to zero
    Translate(f64, f64),
    /// `rotate(a [x y])`, rotating by `a` degrees around `(x, y)`
    Rotate(f64, f64, f64),
}

impl Transform {
    /// Returns the matrix of the transform
    pub fn to_matrix(self) -> Matrix {
        match self {
            Self::Matrix(matrix) => matrix,
            Self::Translate(x, y) => Matrix::translate(x, y),
            Self::Rotate(angle, x, y) => {
                Matrix::translate(x, y) * Matrix::rotate(angle) * Matrix::translate(-x, -y)
            }
        }
    }

    fn parse_optional(input: &mut Parser<'_>) -> Option<f64> {
        input.skip_separators();
        input.try_parse(f64::parse).ok()
    }
}

impl<'input> Parse<'input> for Transform {
    #[allow(clippy::many_single_char_names)]
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        // SVG allows whitespace between the function name and its arguments
        let name = input.expect_ident()?;
        input.skip_whitespace();
        input.expect_char('(')?;
        input.skip_whitespace();

        let transform = match name {
            "matrix" => {
                let a = f64::parse(input)?;
                input.skip_separators();
                let b = f64::parse(input)?;
                input.skip_separators();
                let c = f64::parse(input)?;
                input.skip_separators();
                let d = f64::parse(input)?;
                input.skip_separators();
                let e = f64::parse(input)?;
                input.skip_separators();
                let f = f64::parse(input)?;
                Self::Matrix(Matrix { a, b, c, d, e, f })
            }
            "translate" => {
                let x = f64::parse(input)?;
                let y = Self::parse_optional(input).unwrap_or(0.0);
                Self::Translate(x, y)
            }
            "rotate" => {
                let angle = f64::parse(input)?;
                if let Some(x) = Self::parse_optional(input) {
                    input.skip_separators();
                    let y = f64::parse(input)?;
                    Self::Rotate(angle, x, y)
                } else {
                    Self::Rotate(angle, 0.0, 0.0)
                }
            }
            received => {
                return Err(Error::ExpectedIdent {
                    expected: "`matrix`, `translate`, or `rotate`",
                    received,
                })
            }
        };

        input.skip_whitespace();
        input.expect_char(')')?;
        Ok(transform)
    }
}

#[cfg(test)]
mod tests {
    use oxmo_parse::{error::Error, Parse as _};
    use oxmo_path::Point;

    use super::{Matrix, Transform};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parse() {
        assert_eq!(
            Transform::parse_string("matrix(1 0 0 1 5 6)"),
            Ok(Transform::Matrix(Matrix::translate(5.0, 6.0)))
        );
        assert_eq!(
            Transform::parse_string("translate(10)"),
            Ok(Transform::Translate(10.0, 0.0))
        );
        assert_eq!(
            Transform::parse_string(" translate ( 10, -2e1 ) "),
            Ok(Transform::Translate(10.0, -20.0))
        );
        assert_eq!(
            Transform::parse_string("rotate(45 5,5)"),
            Ok(Transform::Rotate(45.0, 5.0, 5.0))
        );
        assert_eq!(
            Transform::parse_string("rotate(-90)"),
            Ok(Transform::Rotate(-90.0, 0.0, 0.0))
        );
    }

    #[test]
    fn parse_unsupported() {
        assert_eq!(
            Transform::parse_string("scale(2)"),
            Err(Error::ExpectedIdent {
                expected: "`matrix`, `translate`, or `rotate`",
                received: "scale",
            })
        );
        assert_eq!(
            Transform::parse_string("translate(1,2) rotate(3)"),
            Err(Error::ExpectedDone)
        );
        assert!(Transform::parse_string("matrix(1,0,0,1)").is_err());
        assert!(Transform::parse_string("rotate(45 5)").is_err());
    }

    #[test]
    fn associativity() {
        let x = Matrix {
            a: 1.0,
            b: 2.0,
            c: -1.0,
            d: 3.0,
            e: 4.0,
            f: -2.0,
        };
        let y = Matrix::translate(5.0, -7.0);
        let z = Matrix {
            a: 0.0,
            b: -1.0,
            c: 1.0,
            d: 0.0,
            e: 2.0,
            f: 3.0,
        };
        assert_eq!((x * y) * z, x * (y * z));
        assert_eq!(x * Matrix::IDENTITY, x);
        assert_eq!(Matrix::IDENTITY * x, x);
    }

    #[test]
    fn flip() {
        let x = Matrix {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0,
            e: 5.0,
            f: 6.0,
        };
        assert_eq!(x.flipped().flipped(), x);
        assert_eq!(Matrix::FLIP * x * Matrix::FLIP, x.flipped());
        assert_eq!(Matrix::FLIP * Matrix::FLIP, Matrix::IDENTITY);
        assert_eq!(
            Matrix::FLIP.apply(Point([3.0, 4.0])),
            Point([3.0, -4.0])
        );
    }

    #[test]
    fn rotate_about_point() {
        let matrix = Transform::Rotate(90.0, 5.0, 5.0).to_matrix();
        let Point([x, y]) = matrix.apply(Point([5.0, 5.0]));
        assert!(close(x, 5.0) && close(y, 5.0));
        let Point([x, y]) = matrix.apply(Point([10.0, 5.0]));
        assert!(close(x, 5.0) && close(y, 10.0));
    }

    #[test]
    fn decompose() {
        let matrix = Matrix::translate(12.5, -3.0) * Matrix::rotate(30.0);
        let decomposed = matrix.decompose();
        assert!(close(decomposed.origin_x, 12.5));
        assert!(close(decomposed.origin_y, -3.0));
        assert!(close(decomposed.rotation, 30.0));
        assert!(matrix.is_rotation());

        let decomposed = Matrix::rotate(400.0).decompose();
        assert!(close(decomposed.rotation, 40.0));

        // clockwise in SVG is counter-clockwise once flipped
        let decomposed = Matrix::rotate(90.0).flipped().decompose();
        assert!(close(decomposed.rotation, -90.0));

        let scaled = Matrix {
            a: 2.0,
            d: 2.0,
            ..Matrix::IDENTITY
        };
        assert!(!scaled.is_rotation());
        assert!(close(scaled.decompose().rotation, 0.0));
    }
}
