use oxmo_annotation::{format, Node};
use oxmo_collections::{
    modelica::{Arrow, Smooth},
    style::StyleValues,
};
use oxmo_path::PathPoints;
use roxmltree::Node as Element;

use super::{line_thickness, resolve_style, GeometryTransform, StyleableShape};
use crate::{
    element::{self, describe},
    error::Error,
    placement::{CoordinateSystem, Placement},
    Options,
};

fn definition<'a>(element: Element<'a, '_>) -> Result<&'a str, Error> {
    element.attribute("d").ok_or_else(|| Error::MissingAttribute {
        element: describe(element),
        attribute: "d",
    })
}

/// Returns whether a `<path>` is drawn as a `Polygon` rather than a `Line`, being either closed
/// or filled
pub(super) fn is_polygon(element: Element) -> Result<bool, Error> {
    let closed = definition(element)?.trim_end().ends_with(['z', 'Z']);
    let filled = element::style(element)
        .and_then(|style| style.get("fill"))
        .is_some_and(|fill| fill != "none");
    Ok(closed || filled)
}

fn read_points(element: Element, strict: bool) -> Result<PathPoints, Error> {
    let path = PathPoints::parse(definition(element)?).map_err(|error| Error::Path {
        element: describe(element),
        error,
    })?;
    if path.smooth {
        if strict {
            return Err(Error::Unsupported {
                element: describe(element),
                feature: String::from("a curved path"),
            });
        }
        log::warn!(
            "{}: curves are approximated by straight segments",
            describe(element)
        );
    }
    Ok(path)
}

fn with_points(node: Node, path: &PathPoints, coordinates: &CoordinateSystem) -> Node {
    let points: Vec<_> = path
        .points
        .iter()
        .map(|point| coordinates.point(point.0))
        .collect();
    node.with_attribute("points", format::points(&points)).with_opt(
        "smooth",
        path.smooth.then(|| Smooth::from(path.smooth).to_string()),
    )
}

#[derive(Debug, Clone, PartialEq)]
/// A `Polygon`, from a closed or filled `<path>`
pub struct Polygon {
    placement: Placement,
    style: StyleValues,
    path: PathPoints,
}

impl Polygon {
    /// Translates a closed or filled `<path>` element
    ///
    /// # Errors
    /// If the path data is malformed, or strict mode rejects a feature of the element
    pub fn from_element(element: Element, options: &Options) -> Result<Self, Error> {
        Ok(Self {
            placement: Placement::resolve(element, options.strict)?,
            style: resolve_style(element, options.strict)?,
            path: read_points(element, options.strict)?,
        })
    }

    pub(super) fn is_empty(&self) -> bool {
        self.path.points.is_empty()
    }

    /// Creates the `Polygon` node
    pub fn to_node(&self, coordinates: &CoordinateSystem) -> Node {
        let node = self.place(Node::new("Polygon"), coordinates);
        let node = self.with_style(node, coordinates);
        with_points(node, &self.path, coordinates)
    }
}

impl GeometryTransform for Polygon {
    fn placement(&self) -> &Placement {
        &self.placement
    }
}

impl StyleableShape for Polygon {
    fn style(&self) -> &StyleValues {
        &self.style
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A `Line`, from an open and unfilled `<path>`
pub struct Line {
    placement: Placement,
    style: StyleValues,
    arrows: Option<[Arrow; 2]>,
    path: PathPoints,
}

impl Line {
    /// Translates an open and unfilled `<path>` element
    ///
    /// # Errors
    /// If the path data is malformed, or strict mode rejects a feature of the element
    pub fn from_element(element: Element, options: &Options) -> Result<Self, Error> {
        let placement = Placement::resolve(element, options.strict)?;
        let style = resolve_style(element, options.strict)?;
        // any marker is drawn as an arrow
        let arrows = element::style(element).and_then(|style| {
            let arrow = |name: &str| {
                if style.has_marker(name) {
                    Arrow::Open
                } else {
                    Arrow::None
                }
            };
            let arrows = [arrow("marker-start"), arrow("marker-end")];
            (arrows != [Arrow::None; 2]).then_some(arrows)
        });
        Ok(Self {
            placement,
            style,
            arrows,
            path: read_points(element, options.strict)?,
        })
    }

    pub(super) fn is_empty(&self) -> bool {
        self.path.points.is_empty()
    }

    /// Creates the `Line` node
    pub fn to_node(&self, coordinates: &CoordinateSystem) -> Node {
        let node = self.place(Node::new("Line"), coordinates);
        let node = self.with_style(node, coordinates);
        with_points(node, &self.path, coordinates)
    }
}

impl GeometryTransform for Line {
    fn placement(&self) -> &Placement {
        &self.placement
    }
}

impl StyleableShape for Line {
    fn style(&self) -> &StyleValues {
        &self.style
    }

    /// Lines have a single colour, pattern, and thickness, and may end in arrows
    fn with_style(&self, node: Node, coordinates: &CoordinateSystem) -> Node {
        let thickness = line_thickness(&self.style, coordinates);
        node.with_opt("color", self.style.line_color.map(|color| color.to_string()))
            .with_attribute("pattern", self.style.line_pattern.to_string())
            .with_opt("thickness", thickness)
            .with_opt("arrow", self.arrows.map(format::list))
            .with_opt("arrowSize", self.arrows.and(thickness))
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use crate::{error::Error, test_convert, Options};

    #[test]
    fn polygon() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(
            r##"<path d="M0,0 L10,0 L10,10 Z" style="fill:#00ff00;stroke:#000000;stroke-width:2"/>"##,
            &Options::default(),
        )?, @r"
        Polygon(
          origin= {0, 0},
          lineColor= {0,0,0},
          fillColor= {0,255,0},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.Solid,
          lineThickness= 2,
          points= {{0, 0}, {10, 0}, {10, -10}}
        )
        ");
        Ok(())
    }

    #[test]
    fn filled_open_path() -> anyhow::Result<()> {
        let output = test_convert(
            r##"<path d="m 0,0 c 1,1 2,2 3,3" style="fill:#abc"/>"##,
            &Options::default(),
        )?;
        assert!(output.starts_with("Polygon("));
        assert!(output.contains("fillColor= {170,187,204}"));
        assert!(output.contains("points= {{0, 0}, {3, -3}},\n  smooth= Smooth.Bezier\n"));
        Ok(())
    }

    #[test]
    fn line() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(
            r##"<path d="M 0,10 H 20" transform="rotate(45)"
                style="fill:none;stroke:#ff0000;stroke-width:0.5;marker-end:url(#Arrow)"/>"##,
            &Options::default(),
        )?, @r"
        Line(
          origin= {0, 0},
          rotation= -45,
          color= {255,0,0},
          pattern= LinePattern.Solid,
          thickness= 0.50,
          arrow= {Arrow.None, Arrow.Open},
          arrowSize= 0.50,
          points= {{0, -10}, {20, -10}}
        )
        ");
        Ok(())
    }

    #[test]
    fn line_without_style() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(r#"<path d="M0,0 10,10"/>"#, &Options::default())?, @r"
        Line(
          origin= {0, 0},
          color= {0,0,0},
          pattern= LinePattern.Solid,
          points= {{0, 0}, {10, -10}}
        )
        ");
        Ok(())
    }

    #[test]
    fn unstroked_line() -> anyhow::Result<()> {
        let output = test_convert(
            r#"<path d="M0,0 L1,0" style="fill:none;stroke:none;stroke-width:2;marker-end:url(#a)"/>"#,
            &Options::default(),
        )?;
        assert!(output.contains("pattern= LinePattern.None,"));
        assert!(output.contains("arrow= {Arrow.None, Arrow.Open},"));
        assert!(!output.contains("thickness"));
        assert!(!output.contains("arrowSize"));
        Ok(())
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            test_convert(r#"<path d="M0,0 X10,10"/>"#, &Options::default()),
            Err(Error::Path { .. })
        ));
        assert!(matches!(
            test_convert(r#"<path/>"#, &Options::default()),
            Err(Error::MissingAttribute { attribute: "d", .. })
        ));
    }

    #[test]
    fn strict_curves() {
        let options = Options {
            strict: true,
            ..Options::default()
        };
        assert!(matches!(
            test_convert(r#"<path d="M0,0 Q5,5 10,0"/>"#, &options),
            Err(Error::Unsupported { .. })
        ));
        assert!(test_convert(r#"<path d="M0,0 L5,5 10,0"/>"#, &options).is_ok());
    }
}
