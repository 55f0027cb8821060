/*!
OXMO Convert translates SVG documents into the `Icon` annotation of a Modelica model.

Rectangles, circles, ellipses, arcs drawn by Inkscape, paths, and text are translated into the
Modelica graphic primitives `Rectangle`, `Ellipse`, `Polygon`, `Line`, and `Text`. Each shape
keeps its position and rotation, colours, fill and line patterns, thickness, and text formatting.

Features without a Modelica equivalent, such as curves, scaling transforms, or named colours,
are approximated or skipped with a warning. With [`Options::strict`] they fail the conversion
instead.

# Example

```
use oxmo_convert::{convert, Options};

let model = convert(
    r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="5"/></svg>"#,
    &Options::default(),
)
.unwrap();
assert!(model.starts_with("model DummyModel\n"));
assert!(model.contains("extent= {{0,-5},{10,0}}"));
```
*/
mod document;
pub mod element;
pub mod error;
mod options;
pub mod placement;
pub mod shape;

pub use document::{convert, graphics, icon};
pub use error::Error;
pub use options::{Options, TextExtent};

#[cfg(test)]
/// Converts the shapes of an SVG fragment, writing each at a depth of one
pub(crate) fn test_convert(content: &str, options: &Options) -> Result<String, Error> {
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:sodipodi="{}">{content}</svg>"#,
        element::SODIPODI_NS
    );
    let document = roxmltree::Document::parse(&source)?;
    let root = document.root_element();
    let coordinates = placement::CoordinateSystem::from_root(root, options)?;
    Ok(graphics(root, options, &coordinates)?
        .iter()
        .map(|node| node.render(1, options.indent))
        .collect::<Vec<_>>()
        .join(",\n"))
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
