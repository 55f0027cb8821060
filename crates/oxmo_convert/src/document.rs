//! Translation of a whole document into an `Icon`
use oxmo_annotation::{Model, Node};
use roxmltree::{Document, Node as Element};

use crate::{
    element::describe,
    error::Error,
    placement::CoordinateSystem,
    shape::Shape,
    Options,
};

/// Elements which hold no graphics of their own
const SKIPPED: [&str; 6] = ["defs", "metadata", "namedview", "title", "desc", "style"];

/// Converts the source of an SVG document into a Modelica model with an icon annotation.
///
/// # Errors
/// If the document isn't well-formed, contains malformed shapes, or uses unsupported features in
/// strict mode
pub fn convert(source: &str, options: &Options) -> Result<String, Error> {
    let document = Document::parse_with_options(
        source,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        },
    )?;
    let icon = icon(&document, options)?;
    Ok(Model::new(options.model_name.as_str(), icon).render(options.indent))
}

/// Creates the `Icon` node of a document
///
/// # Errors
/// If the document contains malformed shapes, or uses unsupported features in strict mode
pub fn icon(document: &Document, options: &Options) -> Result<Node, Error> {
    let root = document.root_element();
    let coordinates = CoordinateSystem::from_root(root, options)?;
    let graphics = graphics(root, options, &coordinates)?;
    log::debug!("converted {} shapes", graphics.len());
    Ok(Node::new("Icon")
        .with_child(coordinates.node())
        .with_attribute("graphics", graphics))
}

/// Creates the nodes of every shape in the element, in document order
///
/// # Errors
/// If the element contains malformed shapes, or uses unsupported features in strict mode
pub fn graphics(
    parent: Element,
    options: &Options,
    coordinates: &CoordinateSystem,
) -> Result<Vec<Node>, Error> {
    let mut graphics = Vec::new();
    collect(parent, options, coordinates, &mut graphics)?;
    Ok(graphics)
}

fn collect(
    parent: Element,
    options: &Options,
    coordinates: &CoordinateSystem,
    graphics: &mut Vec<Node>,
) -> Result<(), Error> {
    for child in parent.children().filter(Element::is_element) {
        let name = child.tag_name().name();
        if name == "g" {
            collect(child, options, coordinates, graphics)?;
        } else if SKIPPED.contains(&name) {
            log::debug!("skipping {}", describe(child));
        } else if let Some(shape) = Shape::from_element(child, options)? {
            if shape.is_empty() {
                log::warn!("skipping {} as it draws nothing", describe(child));
            } else {
                graphics.push(shape.to_node(coordinates));
            }
        } else if options.strict {
            return Err(Error::Unsupported {
                element: describe(child),
                feature: String::from("the element"),
            });
        } else {
            log::warn!("skipping unsupported element {}", describe(child));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::convert;
    use crate::{error::Error, test_convert, Options};

    #[test]
    fn document_order() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(
            r#"<defs><rect width="1" height="1"/></defs>
            <title>Icon</title>
            <g><circle r="1"/><g><rect width="2" height="2"/></g></g>
            <image href="icon.png"/>
            <path d="M0,0 L1,1"/>"#,
            &Options::default(),
        )?, @r"
        Ellipse(
          origin= {0, 0},
          lineColor= {0,0,0},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.Solid,
          extent= {{-1,-1},{1,1}}
        ),
        Rectangle(
          origin= {0, 0},
          lineColor= {0,0,0},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.Solid,
          extent= {{0,-2},{2,0}}
        ),
        Line(
          origin= {0, 0},
          color= {0,0,0},
          pattern= LinePattern.Solid,
          points= {{0, 0}, {1, -1}}
        )
        ");
        Ok(())
    }

    #[test]
    fn empty_paths() -> anyhow::Result<()> {
        assert_snapshot!(test_convert(
            r##"<path d="M5,5 Z" style="fill:#f00"/><path d="M1,1" style="fill:#f00"/>"##,
            &Options::default(),
        )?, @r"
        Polygon(
          origin= {0, 0},
          fillColor= {255,0,0},
          pattern= LinePattern.Solid,
          fillPattern= FillPattern.Solid,
          points= {{5, -5}}
        )
        ");
        Ok(())
    }

    #[test]
    fn strict_elements() {
        let options = Options {
            strict: true,
            ..Options::default()
        };
        assert!(matches!(
            test_convert(r#"<image href="icon.png"/>"#, &options),
            Err(Error::Unsupported { .. })
        ));
        assert!(test_convert(r"<metadata/><desc>An icon</desc>", &options).is_ok());
    }

    #[test]
    fn empty_document() -> anyhow::Result<()> {
        assert_snapshot!(convert(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#, &Options::default())?, @r"
        model DummyModel
          annotation(
            Icon(
              coordinateSystem(
                preserveAspectRatio= false,
                extent= {{-100,-100},{100,100}}
              ),
              graphics= {}
            )
          );
        end DummyModel;
        ");
        Ok(())
    }

    #[test]
    fn malformed_xml() {
        assert!(matches!(
            convert("<svg><rect></svg>", &Options::default()),
            Err(Error::Xml(_))
        ));
    }
}
