//! Placement of shapes: the transform of each element and the coordinate system of the icon
use oxmo_annotation::{format, Node};
use oxmo_collections::{
    length::Length,
    transform::{Decomposed, Matrix, Transform},
};
use oxmo_parse::Parse as _;
use roxmltree::Node as Element;

use crate::{element::describe, error::Error, Options};

/// The extent of a coordinate system when the document gives no size
const DEFAULT_EXTENT: [[f64; 2]; 2] = [[-100.0, -100.0], [100.0, 100.0]];
/// The width and height that a normalized extent fits into
const NORMALIZED_SIZE: f64 = 200.0;
/// Rotations smaller than this are not written
const ROTATION_EPSILON: f64 = 1e-10;

/// Returns the elements from the root of the document down to and including `element`
pub fn ancestor_chain<'a, 'input>(element: Element<'a, 'input>) -> Vec<Element<'a, 'input>> {
    let mut chain: Vec<_> = element.ancestors().filter(Element::is_element).collect();
    chain.reverse();
    chain
}

/// Composes the transforms of a chain of elements, from the root down, in Modelica's upward y
/// axis.
///
/// # Errors
/// If a transform is unsupported, or the result isn't a pure rotation, in strict mode
pub fn total_transform(chain: &[Element], strict: bool) -> Result<Matrix, Error> {
    let total = chain.iter().try_fold(Matrix::IDENTITY, |total, element| {
        Ok::<_, Error>(total * local_transform(*element, strict)?.flipped())
    })?;
    if strict && !total.is_rotation() {
        if let Some(element) = chain.last() {
            return Err(Error::Unsupported {
                element: describe(*element),
                feature: String::from("a transform with scaling or skewing"),
            });
        }
    }
    Ok(total)
}

fn local_transform(element: Element, strict: bool) -> Result<Matrix, Error> {
    let Some(value) = element.attribute("transform") else {
        return Ok(Matrix::IDENTITY);
    };
    match Transform::parse_string(value) {
        Ok(transform) => Ok(transform.to_matrix()),
        Err(_) if strict => Err(Error::Unsupported {
            element: describe(element),
            feature: format!("`transform=\"{value}\"`"),
        }),
        Err(error) => {
            log::warn!(
                "{}: ignoring unsupported transform `{value}`: {error}",
                describe(element)
            );
            Ok(Matrix::IDENTITY)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// The origin and rotation of a shape
pub struct Placement {
    /// The position that the shape's own coordinates are relative to
    pub origin: [f64; 2],
    /// The counter-clockwise rotation in degrees
    pub rotation: f64,
}

impl Placement {
    /// Resolves the placement of an element from its transform and the transforms of its
    /// ancestors
    ///
    /// # Errors
    /// If a transform is unsupported in strict mode
    pub fn resolve(element: Element, strict: bool) -> Result<Self, Error> {
        let Decomposed {
            origin_x,
            origin_y,
            rotation,
        } = total_transform(&ancestor_chain(element), strict)?.decompose();
        Ok(Self {
            origin: [origin_x, origin_y],
            rotation,
        })
    }

    /// Adds the `origin` and `rotation` to the node, omitting a rotation of zero
    pub fn apply(&self, node: Node, coordinates: &CoordinateSystem) -> Node {
        let rotation = (self.rotation.abs() >= ROTATION_EPSILON).then_some(self.rotation);
        node.with_attribute("origin", format::point(coordinates.origin(self.origin)))
            .with_opt("rotation", rotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Normalization {
    center: [f64; 2],
    scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// The coordinate system of the icon, and how shapes are mapped into it
pub struct CoordinateSystem {
    extent: [[f64; 2]; 2],
    normalization: Option<Normalization>,
}

impl CoordinateSystem {
    /// Reads the extent of the document from the `viewBox`, or else the `width` and `height`, of
    /// the root element.
    ///
    /// # Errors
    /// If the `viewBox` isn't four numbers, or the size of the document is invalid
    pub fn from_root(root: Element, options: &Options) -> Result<Self, Error> {
        let extent = match root.attribute("viewBox") {
            Some(view_box) => {
                let [x, y, width, height] = parse_view_box(view_box).ok_or_else(|| {
                    Error::InvalidNumber {
                        element: describe(root),
                        attribute: "viewBox",
                        value: view_box.to_string(),
                    }
                })?;
                [[x, -y - height], [x + width, -y]]
            }
            None => match (
                document_length(root, "width", options.strict)?,
                document_length(root, "height", options.strict)?,
            ) {
                (Some(width), Some(height)) => [[0.0, -height], [width, 0.0]],
                _ => {
                    log::debug!("document has no size, using the default extent");
                    DEFAULT_EXTENT
                }
            },
        };
        Ok(Self::new(extent, options.normalize_extent))
    }

    /// Creates a coordinate system of the extent, optionally normalized to fit the Modelica
    /// default of 200 by 200 units
    pub fn new(extent: [[f64; 2]; 2], normalize: bool) -> Self {
        let [[x1, y1], [x2, y2]] = extent;
        let (width, height) = (x2 - x1, y2 - y1);
        let normalization = (normalize && width > 0.0 && height > 0.0).then(|| Normalization {
            center: [(x1 + x2) / 2.0, (y1 + y2) / 2.0],
            scale: (NORMALIZED_SIZE / width).min(NORMALIZED_SIZE / height),
        });
        if normalize && normalization.is_none() {
            log::warn!("cannot normalize an empty extent");
        }
        Self {
            extent,
            normalization,
        }
    }

    /// The factor that sizes are multiplied by
    pub fn scale(&self) -> f64 {
        self.normalization
            .map_or(1.0, |normalization| normalization.scale)
    }

    /// Maps a length, such as a thickness or font size
    pub fn length(&self, length: f64) -> f64 {
        length * self.scale()
    }

    /// Maps a point relative to a shape's origin
    pub fn point(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [self.length(x), self.length(y)]
    }

    /// Maps the origin of a shape
    pub fn origin(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        match self.normalization {
            Some(Normalization {
                center: [cx, cy],
                scale,
            }) => [(x - cx) * scale, (y - cy) * scale],
            None => [x, y],
        }
    }

    /// Returns the extent written to the icon
    pub fn extent(&self) -> [[f64; 2]; 2] {
        let [[x1, y1], [x2, y2]] = self.extent;
        match self.normalization {
            Some(Normalization { scale, .. }) => {
                let (half_width, half_height) =
                    ((x2 - x1) * scale / 2.0, (y2 - y1) * scale / 2.0);
                [[-half_width, -half_height], [half_width, half_height]]
            }
            None => self.extent,
        }
    }

    /// Creates the `coordinateSystem` node
    pub fn node(&self) -> Node {
        let [from, to] = self.extent();
        Node::new("coordinateSystem")
            .with_attribute("preserveAspectRatio", false)
            .with_attribute("extent", format::extent(from, to))
    }
}

fn parse_view_box(value: &str) -> Option<[f64; 4]> {
    let mut input = oxmo_parse::Parser::new(value);
    let mut numbers = [0.0; 4];
    for number in &mut numbers {
        input.skip_separators();
        *number = f64::parse(&mut input).ok()?;
    }
    input.skip_whitespace();
    input.expect_done().ok()?;
    Some(numbers)
}

fn document_length(root: Element, attribute: &'static str, strict: bool) -> Result<Option<f64>, Error> {
    let Some(value) = root.attribute(attribute) else {
        return Ok(None);
    };
    if value.trim_end().ends_with('%') {
        log::debug!("ignoring percentage `{attribute}` of document");
        return Ok(None);
    }
    Length::parse(attribute, value, strict)
        .map(|length| Some(length.to_mm()))
        .map_err(|error| Error::Value {
            element: describe(root),
            error,
        })
}
