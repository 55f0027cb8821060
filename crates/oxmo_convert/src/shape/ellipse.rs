use oxmo_annotation::{format, Node};
use oxmo_collections::style::StyleValues;
use roxmltree::Node as Element;

use super::{flipped_point, resolve_style, GeometryTransform, StyleableShape};
use crate::{
    element,
    error::Error,
    placement::{CoordinateSystem, Placement},
    Options,
};

#[derive(Debug, Clone, PartialEq)]
/// An `Ellipse`, from `<circle>`, `<ellipse>`, or an arc drawn by Inkscape
pub struct Ellipse {
    placement: Placement,
    style: StyleValues,
    center: [f64; 2],
    radii: [f64; 2],
    angles: Option<[f64; 2]>,
}

impl Ellipse {
    /// Translates a `<circle>`, `<ellipse>`, or `<path sodipodi:type="arc">` element
    ///
    /// # Errors
    /// If the radii are missing, or strict mode rejects a feature of the element
    pub fn from_element(element: Element, options: &Options) -> Result<Self, Error> {
        let placement = Placement::resolve(element, options.strict)?;
        let style = resolve_style(element, options.strict)?;

        let (center, radii, angles) = match element.tag_name().name() {
            "circle" => {
                let r = element::required(element, "r")?;
                (Self::center(element)?, [r, r], None)
            }
            "ellipse" => (
                Self::center(element)?,
                [
                    element::required(element, "rx")?,
                    element::required(element, "ry")?,
                ],
                None,
            ),
            _ => (
                [
                    element::sodipodi_required(element, "cx")?,
                    element::sodipodi_required(element, "cy")?,
                ],
                [
                    element::sodipodi_required(element, "rx")?,
                    element::sodipodi_required(element, "ry")?,
                ],
                Self::angles(element)?,
            ),
        };

        Ok(Self {
            placement,
            style,
            center,
            radii,
            angles,
        })
    }

    fn center(element: Element) -> Result<[f64; 2], Error> {
        Ok([
            element::number(element, "cx")?.unwrap_or(0.0),
            element::number(element, "cy")?.unwrap_or(0.0),
        ])
    }

    /// Inkscape measures arcs clockwise in radians, and Modelica counter-clockwise in degrees
    fn angles(element: Element) -> Result<Option<[f64; 2]>, Error> {
        let (Some(start), Some(end)) = (
            element::sodipodi_number(element, "start")?,
            element::sodipodi_number(element, "end")?,
        ) else {
            return Ok(None);
        };
        let mut start_angle = 360.0 - end.to_degrees();
        let end_angle = 360.0 - start.to_degrees();
        if start_angle > end_angle {
            start_angle -= 360.0;
        }
        Ok(Some([start_angle, end_angle]))
    }

    /// Creates the `Ellipse` node
    pub fn to_node(&self, coordinates: &CoordinateSystem) -> Node {
        let node = self.place(Node::new("Ellipse"), coordinates);
        let [cx, cy] = self.center;
        let [rx, ry] = self.radii;
        self.with_style(node, coordinates)
            .with_attribute(
                "extent",
                format::extent(
                    flipped_point(coordinates, [cx - rx, cy - ry]),
                    flipped_point(coordinates, [cx + rx, cy + ry]),
                ),
            )
            .with_opt("startAngle", self.angles.map(|[start, _]| start))
            .with_opt("endAngle", self.angles.map(|[_, end]| end))
    }
}

impl GeometryTransform for Ellipse {
    fn placement(&self) -> &Placement {
        &self.placement
    }
}

impl StyleableShape for Ellipse {
    fn style(&self) -> &StyleValues {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use crate::{error::Error, test_convert, Options};

    #[test]
    fn circle() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(
            r#"<circle cx="10" cy="10" r="5" style="fill:none;stroke:rgb(0,0,255);stroke-width:0.5"/>"#,
            &Options::default(),
        )?, @r"
        Ellipse(
          origin= {0, 0},
          lineColor= {0,0,255},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.None,
          lineThickness= 0.50,
          extent= {{5,-15},{15,-5}}
        )
        ");
        Ok(())
    }

    #[test]
    fn ellipse() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(
            r#"<ellipse rx="20" ry="10" transform="translate(50,50)"/>"#,
            &Options::default(),
        )?, @r"
        Ellipse(
          origin= {50, -50},
          lineColor= {0,0,0},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.Solid,
          extent= {{-20,-10},{20,10}}
        )
        ");
        assert!(matches!(
            test_convert(r#"<ellipse rx="20"/>"#, &Options::default()),
            Err(Error::MissingAttribute { attribute: "ry", .. })
        ));
        Ok(())
    }

    #[test]
    fn arc() -> anyhow::Result<()> {
        // a quarter arc from 0 to pi/2 radians, clockwise
        assert_snapshot!(test_convert(
            r#"<path sodipodi:type="arc" sodipodi:cx="0" sodipodi:cy="0"
                sodipodi:rx="10" sodipodi:ry="10"
                sodipodi:start="0" sodipodi:end="1.5707963267948966"
                d="M 10,0 A 10,10 0 0 1 0,10" style="fill:none"/>"#,
            &Options::default(),
        )?, @r"
        Ellipse(
          origin= {0, 0},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.None,
          extent= {{-10,-10},{10,10}},
          startAngle= 270,
          endAngle= 360
        )
        ");
        Ok(())
    }

    #[test]
    fn arc_across_zero() -> anyhow::Result<()> {
        let output = test_convert(
            r#"<path sodipodi:type="arc" sodipodi:cx="0" sodipodi:cy="0"
                sodipodi:rx="10" sodipodi:ry="10"
                sodipodi:start="4.71238898038469" sodipodi:end="1.5707963267948966"
                d="M 0,-10 A 10,10 0 0 1 0,10"/>"#,
            &Options::default(),
        )?;
        assert!(output.contains("startAngle= -90,"));
        assert!(output.contains("endAngle= 90\n"));
        Ok(())
    }
}
