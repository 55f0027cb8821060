//! Enumerations from the Modelica graphical annotations

use std::fmt::Display;

macro_rules! modelica_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$variant_meta:meta])* $variant:ident => $literal:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $literal,)+
                })
            }
        }
    };
}

modelica_enum!(
    /// The pattern used to draw a line or outline
    LinePattern {
        /// No line is drawn
        None => "LinePattern.None",
        /// A continuous line
        Solid => "LinePattern.Solid",
    }
);

modelica_enum!(
    /// The pattern used to fill a shape
    FillPattern {
        /// The shape is not filled
        None => "FillPattern.None",
        /// The shape is filled with its fill colour
        Solid => "FillPattern.Solid",
    }
);

modelica_enum!(
    /// The interpolation between the points of a line or polygon
    Smooth {
        /// Straight segments
        None => "Smooth.None",
        /// Curves through the points
        Bezier => "Smooth.Bezier",
    }
);

modelica_enum!(
    /// The decoration at the end of a line
    Arrow {
        /// No decoration
        None => "Arrow.None",
        /// An open arrow head
        Open => "Arrow.Open",
    }
);

modelica_enum!(
    /// The horizontal placement of text within its extent
    TextAlignment {
        /// Aligned to the left edge
        Left => "TextAlignment.Left",
        /// Centred
        Center => "TextAlignment.Center",
        /// Aligned to the right edge
        Right => "TextAlignment.Right",
    }
);

modelica_enum!(
    /// A text decoration
    TextStyle {
        /// Bold weight
        Bold => "TextStyle.Bold",
        /// Italic style
        Italic => "TextStyle.Italic",
        /// Underlined
        UnderLine => "TextStyle.UnderLine",
    }
);

impl From<FillPattern> for LinePattern {
    /// Text is drawn with line attributes in Modelica, so the fill of SVG text becomes its line
    fn from(value: FillPattern) -> Self {
        match value {
            FillPattern::None => Self::None,
            FillPattern::Solid => Self::Solid,
        }
    }
}

impl From<bool> for Smooth {
    fn from(value: bool) -> Self {
        if value {
            Self::Bezier
        } else {
            Self::None
        }
    }
}

impl TextAlignment {
    /// Maps a `text-anchor` value
    pub fn from_anchor(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Self::Left),
            "middle" => Some(Self::Center),
            "end" => Some(Self::Right),
            _ => None,
        }
    }

    /// Maps a `text-align` value, including the `start` and `end` values written by some editors
    pub fn from_align(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            _ => None,
        }
    }
}

#[test]
fn display() {
    assert_eq!(LinePattern::None.to_string(), "LinePattern.None");
    assert_eq!(FillPattern::Solid.to_string(), "FillPattern.Solid");
    assert_eq!(Smooth::from(true).to_string(), "Smooth.Bezier");
    assert_eq!(TextStyle::UnderLine.to_string(), "TextStyle.UnderLine");
    assert_eq!(LinePattern::from(FillPattern::None), LinePattern::None);
}

#[test]
fn alignment() {
    assert_eq!(TextAlignment::from_anchor("middle"), Some(TextAlignment::Center));
    assert_eq!(TextAlignment::from_anchor("left"), None);
    assert_eq!(TextAlignment::from_align("end"), Some(TextAlignment::Right));
    assert_eq!(TextAlignment::from_align("justify"), None);
}
