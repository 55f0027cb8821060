use std::str::FromStr;

/// The unit of indentation for each level of nesting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Indent {
    /// Indent with spaces. Preferred range is 0..4.
    Spaces(u8),
    /// Indent with tabs.
    Tabs,
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

impl Indent {
    /// Returns the whitespace for the given depth of nesting
    pub fn repeat(self, depth: usize) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(n) * depth),
            Self::Tabs => "\t".repeat(depth),
        }
    }
}

impl FromStr for Indent {
    type Err = String;

    /// Reads either `tabs` or a number of spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "tabs" => Ok(Self::Tabs),
            _ => s
                .parse()
                .map(Self::Spaces)
                .map_err(|_| format!("expected `tabs` or a number of spaces, found `{s}`")),
        }
    }
}

#[test]
fn repeat() {
    assert_eq!(Indent::default().repeat(2), "    ");
    assert_eq!(Indent::Spaces(4).repeat(1), "    ");
    assert_eq!(Indent::Tabs.repeat(3), "\t\t\t");
    assert_eq!(Indent::Spaces(0).repeat(3), "");
}

#[test]
fn from_str() {
    assert_eq!("tabs".parse::<Indent>(), Ok(Indent::Tabs));
    assert_eq!("4".parse::<Indent>(), Ok(Indent::Spaces(4)));
    assert!("wide".parse::<Indent>().is_err());
}
