//! Options for a conversion
use oxmo_annotation::{Indent, DEFAULT_MODEL_NAME};

#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// How the extent of text is estimated
pub enum TextExtent {
    /// A box guessed from the number of characters and the font size
    #[default]
    Normal,
    /// A box of zero width at the insertion point, letting the text flow from it
    Flow,
    /// The guessed box, with a font size of zero so that the text is scaled to fit it
    Scaled,
}

#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, PartialEq)]
/// Options for converting a document
pub struct Options {
    /// The name of the generated model
    pub model_name: String,
    /// Fail on features with no Modelica equivalent, instead of approximating or skipping them
    pub strict: bool,
    /// Scale and centre the coordinate system to the Modelica default of 200 by 200 units
    pub normalize_extent: bool,
    /// How the extent of text is estimated
    pub text_extent: TextExtent,
    /// The indentation of the output
    pub indent: Indent,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            model_name: String::from(DEFAULT_MODEL_NAME),
            strict: false,
            normalize_extent: false,
            text_extent: TextExtent::default(),
            indent: Indent::default(),
        }
    }
}
