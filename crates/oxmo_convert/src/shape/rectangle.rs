use oxmo_annotation::{format, Node};
use oxmo_collections::style::StyleValues;
use roxmltree::Node as Element;

use super::{flipped_point, resolve_style, GeometryTransform, StyleableShape};
use crate::{
    element::{self, describe},
    error::Error,
    placement::{CoordinateSystem, Placement},
    Options,
};

#[derive(Debug, Clone, PartialEq)]
/// A `Rectangle`, from `<rect>`
pub struct Rectangle {
    placement: Placement,
    style: StyleValues,
    corners: [[f64; 2]; 2],
    radius: Option<f64>,
}

impl Rectangle {
    /// Translates a `<rect>` element
    ///
    /// # Errors
    /// If `width` or `height` are missing, or strict mode rejects a feature of the element
    pub fn from_element(element: Element, options: &Options) -> Result<Self, Error> {
        let placement = Placement::resolve(element, options.strict)?;
        let style = resolve_style(element, options.strict)?;

        let x = element::number(element, "x")?.unwrap_or(0.0);
        let y = element::number(element, "y")?.unwrap_or(0.0);
        let width = element::required(element, "width")?;
        let height = element::required(element, "height")?;
        let radius = Self::radius(element, options.strict)?;

        Ok(Self {
            placement,
            style,
            corners: [[x, y], [x + width, y + height]],
            radius,
        })
    }

    /// Modelica only has a single corner radius, so `rx` and `ry` are averaged
    fn radius(element: Element, strict: bool) -> Result<Option<f64>, Error> {
        let (rx, ry) = match (
            element::number(element, "rx")?,
            element::number(element, "ry")?,
        ) {
            (None, None) => return Ok(None),
            (Some(rx), None) => (rx, rx),
            (None, Some(ry)) => (ry, ry),
            (Some(rx), Some(ry)) => (rx, ry),
        };
        if (rx - ry).abs() > 1e-9 {
            if strict {
                return Err(Error::Unsupported {
                    element: describe(element),
                    feature: format!("an elliptical corner of `rx=\"{rx}\"` and `ry=\"{ry}\"`"),
                });
            }
            log::warn!(
                "{}: averaging the corner radii `{rx}` and `{ry}`",
                describe(element)
            );
        }
        let radius = (rx + ry) / 2.0;
        Ok((radius > 0.0).then_some(radius))
    }

    /// Creates the `Rectangle` node
    pub fn to_node(&self, coordinates: &CoordinateSystem) -> Node {
        let node = self.place(Node::new("Rectangle"), coordinates);
        let [from, to] = self.corners;
        self.with_style(node, coordinates)
            .with_attribute(
                "extent",
                format::extent(
                    flipped_point(coordinates, from),
                    flipped_point(coordinates, to),
                ),
            )
            .with_opt("radius", self.radius.map(|radius| coordinates.length(radius)))
    }
}

impl GeometryTransform for Rectangle {
    fn placement(&self) -> &Placement {
        &self.placement
    }
}

impl StyleableShape for Rectangle {
    fn style(&self) -> &StyleValues {
        &self.style
    }
}
