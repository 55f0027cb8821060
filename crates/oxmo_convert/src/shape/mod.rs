//! Translation of SVG shapes into Modelica graphic primitives.
//!
//! Every shape is translated in the same order: its placement is resolved from the transforms of
//! the element and its ancestors, then its style, then its geometry. The node is then populated
//! with the `origin` and `rotation`, followed by style attributes and geometry attributes.
use oxmo_annotation::Node;
use oxmo_collections::{modelica::LinePattern, style::StyleValues};
use roxmltree::Node as Element;

use crate::{
    element::{self, describe},
    error::Error,
    placement::{CoordinateSystem, Placement},
    Options,
};

mod ellipse;
mod path;
mod rectangle;
mod text;

pub use ellipse::Ellipse;
pub use path::{Line, Polygon};
pub use rectangle::Rectangle;
pub use text::Text;

/// A shape that is positioned by an origin and rotation
pub trait GeometryTransform {
    /// Returns the placement resolved for the shape
    fn placement(&self) -> &Placement;

    /// Adds the `origin` and `rotation` of the shape to the node
    fn place(&self, node: Node, coordinates: &CoordinateSystem) -> Node {
        self.placement().apply(node, coordinates)
    }
}

/// A shape with a line and fill style
pub trait StyleableShape {
    /// Returns the style resolved for the shape
    fn style(&self) -> &StyleValues;

    /// Adds the style attributes of a filled shape to the node
    fn with_style(&self, node: Node, coordinates: &CoordinateSystem) -> Node {
        let style = self.style();
        node.with_opt("lineColor", style.line_color.map(|color| color.to_string()))
            .with_opt("fillColor", style.fill_color.map(|color| color.to_string()))
            .with_attribute("pattern", style.line_pattern.to_string())
            .with_attribute("fillPattern", style.fill_pattern.to_string())
            .with_opt("lineThickness", line_thickness(style, coordinates))
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A graphic primitive of a Modelica icon, keyed on the kind of SVG element it came from
pub enum Shape {
    /// From `<rect>`
    Rectangle(Rectangle),
    /// From `<circle>`, `<ellipse>`, or an arc drawn by Inkscape
    Ellipse(Ellipse),
    /// From a closed or filled `<path>`
    Polygon(Polygon),
    /// From an open, unfilled `<path>`
    Line(Line),
    /// From `<text>`
    Text(Text),
}

impl Shape {
    /// Translates an element, returning `None` when the kind of element isn't a shape
    ///
    /// # Errors
    /// If the element is malformed, or uses unsupported features in strict mode
    pub fn from_element(element: Element, options: &Options) -> Result<Option<Self>, Error> {
        let shape = match element.tag_name().name() {
            "rect" => Self::Rectangle(Rectangle::from_element(element, options)?),
            "circle" | "ellipse" => Self::Ellipse(Ellipse::from_element(element, options)?),
            "path" if element::is_arc(element) => {
                Self::Ellipse(Ellipse::from_element(element, options)?)
            }
            "path" => {
                if path::is_polygon(element)? {
                    Self::Polygon(Polygon::from_element(element, options)?)
                } else {
                    Self::Line(Line::from_element(element, options)?)
                }
            }
            "text" => Self::Text(Text::from_element(element, options)?),
            _ => return Ok(None),
        };
        Ok(Some(shape))
    }

    /// Whether the shape has no points to draw, as for a path that only moves
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Polygon(shape) => shape.is_empty(),
            Self::Line(shape) => shape.is_empty(),
            Self::Rectangle(_) | Self::Ellipse(_) | Self::Text(_) => false,
        }
    }

    /// Creates the node of the shape
    pub fn to_node(&self, coordinates: &CoordinateSystem) -> Node {
        match self {
            Self::Rectangle(shape) => shape.to_node(coordinates),
            Self::Ellipse(shape) => shape.to_node(coordinates),
            Self::Polygon(shape) => shape.to_node(coordinates),
            Self::Line(shape) => shape.to_node(coordinates),
            Self::Text(shape) => shape.to_node(coordinates),
        }
    }
}

/// Resolves the inline style of an element
fn resolve_style(element: Element, strict: bool) -> Result<StyleValues, Error> {
    StyleValues::resolve(element::style(element).as_ref(), strict).map_err(|error| Error::Value {
        element: describe(element),
        error,
    })
}

/// The scaled thickness of a drawn line. Undrawn lines have no thickness.
fn line_thickness(style: &StyleValues, coordinates: &CoordinateSystem) -> Option<f64> {
    if style.line_pattern == LinePattern::None {
        return None;
    }
    style
        .line_thickness
        .map(|thickness| coordinates.length(thickness))
}

/// Maps a point in the shape's coordinates, flipping it to Modelica's upward y axis
fn flipped_point(coordinates: &CoordinateSystem, [x, y]: [f64; 2]) -> [f64; 2] {
    coordinates.point([x, -y])
}
