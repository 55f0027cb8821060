//! Inline `style` declarations and the Modelica values they resolve to
use crate::{
    color::Color,
    error::Error,
    length::leading_number,
    modelica::{FillPattern, LinePattern},
};

#[derive(Debug, Default, Clone, PartialEq)]
/// The declarations of an inline `style` attribute, in the order they were written
pub struct Style<'input> {
    declarations: Vec<(&'input str, &'input str)>,
}

impl<'input> Style<'input> {
    /// Splits a `style` attribute into `name: value` declarations.
    ///
    /// Empty entries and entries without a `:` are dropped.
    pub fn parse(value: &'input str) -> Self {
        let declarations = value
            .split(';')
            .filter_map(|declaration| {
                let (name, value) = declaration.split_once(':')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name, value.trim()))
            })
            .collect();
        Self { declarations }
    }

    /// Returns the value of the last declaration of `name`
    pub fn get(&self, name: &str) -> Option<&'input str> {
        self.declarations
            .iter()
            .rev()
            .find(|(declared, _)| *declared == name)
            .map(|(_, value)| *value)
    }

    /// Returns whether a marker property is declared with a value other than `none`
    pub fn has_marker(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| value != "none")
    }

    /// Returns the number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns whether there are no declarations
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The appearance of a shape, as understood by Modelica.
///
/// Fields which are `None` were not declared, and the Modelica default applies.
pub struct StyleValues {
    /// The colour of the outline, from `stroke`
    pub line_color: Option<Color>,
    /// The colour of the interior, from `fill`
    pub fill_color: Option<Color>,
    /// Whether the outline is drawn
    pub line_pattern: LinePattern,
    /// Whether the interior is drawn
    pub fill_pattern: FillPattern,
    /// The width of the outline, from `stroke-width`
    pub line_thickness: Option<f64>,
}

impl StyleValues {
    /// Resolves the declarations of an element's `style` attribute.
    ///
    /// An element without a `style` attribute gets a black outline. When `strict` is set,
    /// declarations with no Modelica counterpart are errors rather than being ignored.
    ///
    /// # Errors
    ///
    /// When `stroke-width` isn't a number, or when a declaration is unsupported and `strict` is
    /// set
    pub fn resolve(style: Option<&Style>, strict: bool) -> Result<Self, Error> {
        let Some(style) = style else {
            return Ok(Self {
                line_color: Some(Color::BLACK),
                fill_color: None,
                line_pattern: LinePattern::Solid,
                fill_pattern: FillPattern::Solid,
                line_thickness: None,
            });
        };

        let stroke = style.get("stroke");
        let fill = style.get("fill");
        if strict {
            check_default(style, "stroke-dasharray", "none")?;
            check_default_number(style, "stroke-dashoffset", 0.0)?;
            check_default_number(style, "stroke-opacity", 1.0)?;
            check_default_number(style, "fill-opacity", 1.0)?;
        }

        Ok(Self {
            line_color: resolve_color("stroke", stroke, strict)?,
            fill_color: resolve_color("fill", fill, strict)?,
            line_pattern: if stroke == Some("none") {
                LinePattern::None
            } else {
                LinePattern::Solid
            },
            fill_pattern: if fill == Some("none") {
                FillPattern::None
            } else {
                FillPattern::Solid
            },
            line_thickness: resolve_thickness(style.get("stroke-width"), strict)?,
        })
    }
}

fn resolve_color(property: &str, value: Option<&str>, strict: bool) -> Result<Option<Color>, Error> {
    let Some(value) = value else {
        return Ok(None);
    };
    if let Some(color) = Color::resolve(value) {
        return Ok(Some(color));
    }
    if value == "none" {
        return Ok(None);
    }
    if strict {
        return Err(Error::unsupported(property, value));
    }
    log::warn!("`{property}: {value}` is not a hex or rgb colour, leaving it undeclared");
    Ok(None)
}

fn resolve_thickness(value: Option<&str>, strict: bool) -> Result<Option<f64>, Error> {
    let Some(value) = value else {
        return Ok(None);
    };
    // percentages would need the viewport
    if value.contains('%') || value == "inherit" {
        if strict {
            return Err(Error::unsupported("stroke-width", value));
        }
        log::warn!("`stroke-width: {value}` is not supported, using 1");
        return Ok(Some(1.0));
    }
    leading_number(value)
        .map(Some)
        .ok_or_else(|| Error::malformed("stroke-width", value))
}

fn check_default(style: &Style, property: &str, default: &str) -> Result<(), Error> {
    match style.get(property) {
        Some(value) if value != default => Err(Error::unsupported(property, value)),
        _ => Ok(()),
    }
}

fn check_default_number(style: &Style, property: &str, default: f64) -> Result<(), Error> {
    let Some(value) = style.get(property) else {
        return Ok(());
    };
    match leading_number(value) {
        Some(number) if (number - default).abs() < 1e-9 => Ok(()),
        Some(_) => Err(Error::unsupported(property, value)),
        None => Err(Error::malformed(property, value)),
    }
}
