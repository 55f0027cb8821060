use itertools::Itertools as _;

use crate::{format, Indent};

#[derive(Debug, Clone, PartialEq)]
/// The value of a named argument
pub enum Value {
    /// Text written as-is, such as a number, colour, or enumeration
    Literal(String),
    /// A nested record
    Node(Node),
    /// An array written with one item per line
    Array(Vec<Value>),
}

impl Value {
    /// Serializes the value with its items at `depth`
    pub fn render(&self, depth: usize, indent: Indent) -> String {
        match self {
            Self::Literal(literal) => literal.clone(),
            Self::Node(node) => node.render(depth, indent),
            Self::Array(items) if items.is_empty() => String::from("{}"),
            Self::Array(items) => {
                let items = items.iter().map(|item| item.render(depth + 1, indent));
                format!("{{{}}}", block(items, depth, indent))
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Literal(format::number(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<Vec<Node>> for Value {
    fn from(value: Vec<Node>) -> Self {
        Self::Array(value.into_iter().map(Self::Node).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A record constructor, such as `Rectangle(extent= {{0,0},{1,1}})`
pub struct Node {
    name: String,
    attributes: Vec<(String, Value)>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a node without children or attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the name of the record
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the named arguments in insertion order
    pub fn attributes(&self) -> &[(String, Value)] {
        &self.attributes
    }

    /// Returns the positional arguments in insertion order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the value of the named argument
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Appends a named argument
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Appends a positional argument
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    #[must_use]
    /// Appends a named argument
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push_attribute(name, value);
        self
    }

    #[must_use]
    /// Appends a named argument if there is a value for it
    pub fn with_opt(self, name: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with_attribute(name, value),
            None => self,
        }
    }

    #[must_use]
    /// Appends a positional argument
    pub fn with_child(mut self, child: Node) -> Self {
        self.push_child(child);
        self
    }

    /// Serializes the node, with the arguments indented to `depth` and the closing parenthesis
    /// to the level before it.
    ///
    /// Positional arguments are written before named arguments.
    pub fn render(&self, depth: usize, indent: Indent) -> String {
        if self.children.is_empty() && self.attributes.is_empty() {
            return format!("{}()", self.name);
        }
        let children = self
            .children
            .iter()
            .map(|child| child.render(depth + 1, indent));
        let attributes = self
            .attributes
            .iter()
            .map(|(name, value)| format!("{name}= {}", value.render(depth + 1, indent)));
        format!(
            "{}({})",
            self.name,
            block(children.chain(attributes), depth, indent)
        )
    }
}

/// Writes each item on its own line at `depth`, followed by a newline at the level before it
fn block(items: impl Iterator<Item = String>, depth: usize, indent: Indent) -> String {
    let prefix = indent.repeat(depth);
    format!(
        "\n{}\n{}",
        items.map(|item| format!("{prefix}{item}")).join(",\n"),
        indent.repeat(depth.saturating_sub(1))
    )
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::{Node, Value};
    use crate::Indent;

    #[test]
    fn attributes() {
        let node = Node::new("name")
            .with_attribute("a", 1.0)
            .with_attribute("b", 2.0);
        assert_eq!(node.render(1, Indent::Spaces(2)), "name(\n  a= 1,\n  b= 2\n)");
    }

    #[test]
    fn empty() {
        assert_eq!(Node::new("Icon").render(3, Indent::default()), "Icon()");
        assert_eq!(
            Node::new("Icon")
                .with_attribute("graphics", Vec::<Node>::new())
                .render(1, Indent::default()),
            "Icon(\n  graphics= {}\n)"
        );
    }

    #[test]
    fn optional_attributes() {
        let node = Node::new("Line")
            .with_opt("color", None::<String>)
            .with_opt("thickness", Some(0.5));
        assert_eq!(node.attributes().len(), 1);
        assert_eq!(
            node.get("thickness"),
            Some(&Value::Literal(String::from("0.50")))
        );
        assert_eq!(node.get("color"), None);
    }

    #[test]
    fn children_before_attributes() {
        let node = Node::new("Icon")
            .with_attribute("graphics", vec![Node::new("Rectangle").with_attribute("extent", "{{0,0},{1,1}}")])
            .with_child(
                Node::new("coordinateSystem")
                    .with_attribute("preserveAspectRatio", false),
            );
        assert_snapshot!(node.render(1, Indent::default()), @r"
        Icon(
          coordinateSystem(
            preserveAspectRatio= false
          ),
          graphics= {
            Rectangle(
              extent= {{0,0},{1,1}}
            )
          }
        )
        ");
    }

    #[test]
    fn tabs() {
        let node = Node::new("Ellipse").with_attribute("startAngle", 90.0);
        assert_eq!(
            node.render(2, Indent::Tabs),
            "Ellipse(\n\t\tstartAngle= 90\n\t)"
        );
    }
}
