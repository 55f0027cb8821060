use oxmo_annotation::{format, Node};
use oxmo_collections::{
    length::{leading_number, Length},
    modelica::{LinePattern, TextAlignment, TextStyle},
    style::{Style, StyleValues},
};
use roxmltree::Node as Element;

use super::{flipped_point, resolve_style, GeometryTransform, StyleableShape};
use crate::{
    element::{self, describe},
    error::Error,
    placement::{CoordinateSystem, Placement},
    Options, TextExtent,
};

/// The font assumed by Modelica tools
const DEFAULT_FONT: &str = "Arial";
/// Assumed ratio of font size to the advance of a character
const GOLDEN_RATIO: f64 = 1.618;
/// Line height relative to font size
const LINE_HEIGHT: f64 = 1.1;
/// Spacing after each line relative to font size
const LINE_SPACING: f64 = 0.2;
/// Position of the baseline within a line, from the bottom
const BASELINE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
/// A `Text`, from `<text>`
pub struct Text {
    placement: Placement,
    style: StyleValues,
    content: String,
    font_name: String,
    font_size: Option<Length>,
    text_styles: Vec<TextStyle>,
    alignment: TextAlignment,
    insertion: [f64; 2],
    mode: TextExtent,
}

impl Text {
    /// Translates a `<text>` element.
    ///
    /// Font declarations of the first child element, usually a `<tspan>`, are preferred over
    /// those of the `<text>` element.
    ///
    /// # Errors
    /// If the font size is malformed, or strict mode rejects a feature of the element
    pub fn from_element(element: Element, options: &Options) -> Result<Self, Error> {
        let placement = Placement::resolve(element, options.strict)?;
        let style = resolve_style(element, options.strict)?;

        let inner = element.children().find(Element::is_element);
        let inner_style = inner.and_then(element::style);
        let outer_style = element::style(element);
        let declared = |name: &str| {
            inner_style
                .as_ref()
                .and_then(|style| style.get(name))
                .or_else(|| outer_style.as_ref().and_then(|style| style.get(name)))
        };

        let font_name = declared("font-family")
            .and_then(font_family)
            .unwrap_or_else(|| String::from(DEFAULT_FONT));
        let font_size = declared("font-size")
            .map(|size| Length::parse("font-size", size, options.strict))
            .transpose()
            .map_err(|error| Error::Value {
                element: describe(element),
                error,
            })?;
        let text_styles = Some(text_styles(inner_style.as_ref()))
            .filter(|styles| !styles.is_empty())
            .unwrap_or_else(|| text_styles(outer_style.as_ref()));
        let alignment = inner_style
            .as_ref()
            .and_then(|style| style.get("text-anchor"))
            .and_then(TextAlignment::from_anchor)
            .or_else(|| {
                let outer = outer_style.as_ref()?;
                outer
                    .get("text-align")
                    .and_then(TextAlignment::from_align)
                    .or_else(|| outer.get("text-anchor").and_then(TextAlignment::from_anchor))
            })
            .unwrap_or(TextAlignment::Left);

        Ok(Self {
            placement,
            style,
            content: content(element),
            font_name,
            font_size,
            text_styles,
            alignment,
            insertion: [
                insertion(element, inner, "x")?,
                insertion(element, inner, "y")?,
            ],
            mode: options.text_extent,
        })
    }

    /// Estimates the box of the text from the number of characters, in the text's own
    /// coordinates with y pointing downward
    fn estimate_extent(&self) -> [[f64; 2]; 2] {
        let size = self.font_size.map_or(0.0, Length::to_mm);
        let lines = self.content.split('\n');
        let line_count = lines.clone().count() as f64;
        let longest = lines.map(|line| line.chars().count()).max().unwrap_or(0) as f64;

        let width = longest * size / GOLDEN_RATIO;
        let line_height = size * LINE_HEIGHT;
        let height = line_count * (line_height + size * LINE_SPACING);
        let ascent = (1.0 - BASELINE) * line_height;

        let [x, y] = self.insertion;
        let (top, bottom) = (y - ascent, y + height - ascent);
        if self.mode == TextExtent::Flow {
            return [[x, y], [x, bottom]];
        }
        match self.alignment {
            TextAlignment::Left => [[x, top], [x + width, bottom]],
            TextAlignment::Right => [[x - width, top], [x, bottom]],
            TextAlignment::Center => [[x - width / 2.0, top], [x + width / 2.0, bottom]],
        }
    }

    /// Creates the `Text` node
    pub fn to_node(&self, coordinates: &CoordinateSystem) -> Node {
        let node = self.place(Node::new("Text"), coordinates);
        let [from, to] = self.estimate_extent();
        let font_size = match self.mode {
            TextExtent::Scaled => 0.0,
            TextExtent::Normal | TextExtent::Flow => {
                coordinates.length(self.font_size.map_or(0.0, Length::to_pt))
            }
        };
        let font_name = (!matches!(self.font_name.as_str(), DEFAULT_FONT | "sans-serif"))
            .then(|| format::string(&self.font_name));
        let text_styles = (!self.text_styles.is_empty()).then(|| format::list(&self.text_styles));

        self.with_style(node, coordinates)
            .with_attribute(
                "extent",
                format::extent(
                    flipped_point(coordinates, from),
                    flipped_point(coordinates, to),
                ),
            )
            .with_attribute("textString", format::string(&self.content))
            .with_attribute("fontSize", font_size)
            .with_opt("fontName", font_name)
            .with_opt("textStyle", text_styles)
            .with_attribute("horizontalAlignment", self.alignment.to_string())
    }
}

impl GeometryTransform for Text {
    fn placement(&self) -> &Placement {
        &self.placement
    }
}

impl StyleableShape for Text {
    fn style(&self) -> &StyleValues {
        &self.style
    }

    /// SVG fills text where Modelica draws it with its line, so the fill is written as the line
    fn with_style(&self, node: Node, _coordinates: &CoordinateSystem) -> Node {
        node.with_opt(
            "lineColor",
            self.style.fill_color.map(|color| color.to_string()),
        )
        .with_attribute(
            "pattern",
            LinePattern::from(self.style.fill_pattern).to_string(),
        )
    }
}

/// The runs of the text in document order, one per line. A run is either a text node of the
/// element itself, skipping whitespace between children, or all the text within a child element.
fn content(element: Element) -> String {
    element
        .children()
        .filter_map(|child| {
            if child.is_element() {
                Some(
                    child
                        .descendants()
                        .filter(Element::is_text)
                        .filter_map(|node| node.text())
                        .collect::<String>(),
                )
            } else if child.is_text() {
                child.text().filter(|text| !text.trim().is_empty()).map(String::from)
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The first family of a `font-family` list, without quotes
fn font_family(value: &str) -> Option<String> {
    let family = value
        .split(',')
        .next()?
        .trim()
        .trim_matches(|char| char == '"' || char == '\'');
    (!family.is_empty()).then(|| family.to_string())
}

fn text_styles(style: Option<&Style>) -> Vec<TextStyle> {
    let Some(style) = style else {
        return Vec::new();
    };
    let italic = style.get("font-style") == Some("italic");
    let bold = style.get("font-weight").is_some_and(|weight| {
        matches!(weight, "bold" | "bolder") || leading_number(weight).is_some_and(|n| n >= 600.0)
    });
    let underline = style
        .get("text-decoration")
        .is_some_and(|decoration| decoration.split_whitespace().any(|value| value == "underline"));
    [
        (italic, TextStyle::Italic),
        (bold, TextStyle::Bold),
        (underline, TextStyle::UnderLine),
    ]
    .into_iter()
    .filter_map(|(declared, text_style)| declared.then_some(text_style))
    .collect()
}

/// The position of the text, from the `<text>` element or else its first child
fn insertion(element: Element, inner: Option<Element>, attribute: &'static str) -> Result<f64, Error> {
    if let Some(value) = element::number(element, attribute)? {
        return Ok(value);
    }
    Ok(match inner {
        Some(inner) => element::number(inner, attribute)?.unwrap_or(0.0),
        None => 0.0,
    })
}
