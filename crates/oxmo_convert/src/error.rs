//! Error types.
use std::fmt::Display;

#[derive(Debug)]
/// Errors which abort the conversion of a document
pub enum Error {
    /// The document is not well-formed XML
    Xml(roxmltree::Error),
    /// An element is missing an attribute needed for its geometry
    MissingAttribute {
        /// The element, as `<name id="...">`
        element: String,
        /// The name of the attribute
        attribute: &'static str,
    },
    /// An attribute needed for the geometry of an element isn't a number
    InvalidNumber {
        /// The element, as `<name id="...">`
        element: String,
        /// The name of the attribute
        attribute: &'static str,
        /// The value given
        value: String,
    },
    /// The path data of an element couldn't be read
    Path {
        /// The element, as `<name id="...">`
        element: String,
        /// The error from reading the path data
        error: oxmo_path::Error,
    },
    /// A style or attribute value couldn't be read, or is unsupported in strict mode
    Value {
        /// The element, as `<name id="...">`
        element: String,
        /// The error from resolving the value
        error: oxmo_collections::error::Error,
    },
    /// A feature has no Modelica equivalent, in strict mode
    Unsupported {
        /// The element, as `<name id="...">`
        element: String,
        /// A description of the feature
        feature: String,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml(error) => f.write_fmt(format_args!("Failed to parse document: {error}")),
            Self::MissingAttribute { element, attribute } => {
                f.write_fmt(format_args!("{element} is missing the `{attribute}` attribute"))
            }
            Self::InvalidNumber {
                element,
                attribute,
                value,
            } => f.write_fmt(format_args!(
                "{element} has an invalid number `{value}` for `{attribute}`"
            )),
            Self::Path { element, error } => f.write_fmt(format_args!("{element}: {error}")),
            Self::Value { element, error } => f.write_fmt(format_args!("{element}: {error}")),
            Self::Unsupported { element, feature } => {
                f.write_fmt(format_args!("{element}: {feature} is not supported"))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(error) => Some(error),
            Self::Path { error, .. } => Some(error),
            Self::Value { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(value: roxmltree::Error) -> Self {
        Self::Xml(value)
    }
}
