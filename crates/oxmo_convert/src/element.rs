//! Helpers for reading the attributes of source elements
use oxmo_collections::style::Style;
use oxmo_parse::Parse as _;
use roxmltree::Node;

use crate::error::Error;

/// The namespace Inkscape uses for its editor attributes, such as arcs
pub const SODIPODI_NS: &str = "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd";

/// Describes an element for error messages, as `<name id="...">`
pub fn describe(element: Node) -> String {
    let name = element.tag_name().name();
    match element.attribute("id") {
        Some(id) => format!("<{name} id=\"{id}\">"),
        None => format!("<{name}>"),
    }
}

/// Returns the inline style of the element, if it has a `style` attribute
pub fn style<'a>(element: Node<'a, '_>) -> Option<Style<'a>> {
    element.attribute("style").map(Style::parse)
}

fn parse_number(element: Node, attribute: &'static str, value: &str) -> Result<f64, Error> {
    f64::parse_string(value).map_err(|_| Error::InvalidNumber {
        element: describe(element),
        attribute,
        value: value.to_string(),
    })
}

/// Reads a numeric attribute, if present
///
/// # Errors
/// If the attribute isn't a number
pub fn number(element: Node, attribute: &'static str) -> Result<Option<f64>, Error> {
    element
        .attribute(attribute)
        .map(|value| parse_number(element, attribute, value))
        .transpose()
}

/// Reads a numeric attribute which the geometry of the element depends on
///
/// # Errors
/// If the attribute is missing or isn't a number
pub fn required(element: Node, attribute: &'static str) -> Result<f64, Error> {
    number(element, attribute)?.ok_or_else(|| Error::MissingAttribute {
        element: describe(element),
        attribute,
    })
}

/// Reads a numeric attribute in the sodipodi namespace, if present
///
/// # Errors
/// If the attribute isn't a number
pub fn sodipodi_number(element: Node, attribute: &'static str) -> Result<Option<f64>, Error> {
    element
        .attribute((SODIPODI_NS, attribute))
        .map(|value| parse_number(element, attribute, value))
        .transpose()
}

/// Reads a numeric attribute in the sodipodi namespace which the geometry of the element
/// depends on
///
/// # Errors
/// If the attribute is missing or isn't a number
pub fn sodipodi_required(element: Node, attribute: &'static str) -> Result<f64, Error> {
    sodipodi_number(element, attribute)?.ok_or_else(|| Error::MissingAttribute {
        element: describe(element),
        attribute,
    })
}

/// Returns whether the element is a path drawn as an arc by Inkscape
pub fn is_arc(element: Node) -> bool {
    element.attribute((SODIPODI_NS, "type")) == Some("arc")
}

#[cfg(test)]
mod tests {
    use super::{describe, is_arc, number, required, sodipodi_required};
    use crate::error::Error;

    #[test]
    fn attributes() -> anyhow::Result<()> {
        let document = roxmltree::Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"
                xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
                <rect id="box" x=" 1.5 " y="a" sodipodi:type="arc" sodipodi:cx="3"/>
            </svg>"#,
        )?;
        let rect = document
            .descendants()
            .find(|node| node.tag_name().name() == "rect")
            .ok_or(anyhow::anyhow!("missing rect"))?;

        assert_eq!(describe(rect), r#"<rect id="box">"#);
        assert_eq!(describe(document.root_element()), "<svg>");
        assert_eq!(number(rect, "x")?, Some(1.5));
        assert_eq!(number(rect, "width")?, None);
        assert!(matches!(
            number(rect, "y"),
            Err(Error::InvalidNumber { attribute: "y", .. })
        ));
        assert!(matches!(
            required(rect, "height"),
            Err(Error::MissingAttribute {
                attribute: "height",
                ..
            })
        ));
        assert_eq!(sodipodi_required(rect, "cx")?, 3.0);
        assert!(is_arc(rect));
        Ok(())
    }
}
