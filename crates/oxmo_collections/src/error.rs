//! Error types for resolving attribute values

#[derive(Debug, Clone, PartialEq)]
/// An error while resolving an attribute or style value
pub enum Error {
    /// The value is valid SVG but has no Modelica equivalent
    Unsupported {
        /// The attribute or style property
        property: String,
        /// The value given
        value: String,
    },
    /// The value could not be read
    Malformed {
        /// The attribute or style property
        property: String,
        /// The value given
        value: String,
    },
}

impl Error {
    /// Creates an [`Error::Unsupported`] for the property and value
    pub fn unsupported(property: &str, value: &str) -> Self {
        Self::Unsupported {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates an [`Error::Malformed`] for the property and value
    pub fn malformed(property: &str, value: &str) -> Self {
        Self::Malformed {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { property, value } => {
                f.write_fmt(format_args!("`{property}: {value}` is not supported"))
            }
            Self::Malformed { property, value } => {
                f.write_fmt(format_args!("`{property}` has an invalid value `{value}`"))
            }
        }
    }
}
impl std::error::Error for Error {}
