use crate::{Indent, Node};

/// The name given to a model when none is chosen
pub const DEFAULT_MODEL_NAME: &str = "DummyModel";

#[derive(Debug, Clone, PartialEq)]
/// A placeholder model declaring nothing but its icon annotation
pub struct Model {
    /// The name of the model
    pub name: String,
    /// The `Icon` node
    pub icon: Node,
}

impl Model {
    /// Creates a model named `name` with the icon
    pub fn new(name: impl Into<String>, icon: Node) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }

    /// Serializes the model declaration, ending with a newline
    pub fn render(&self, indent: Indent) -> String {
        let Self { name, icon } = self;
        format!(
            "model {name}\n{one}annotation(\n{two}{icon}\n{one});\nend {name};\n",
            one = indent.repeat(1),
            two = indent.repeat(2),
            icon = icon.render(3, indent),
        )
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_NAME, Node::new("Icon"))
    }
}

#[test]
fn render() {
    let icon = Node::new("Icon").with_child(
        Node::new("coordinateSystem").with_attribute("preserveAspectRatio", false),
    );
    insta::assert_snapshot!(Model::new("Resistor", icon).render(Indent::default()), @r"
    model Resistor
      annotation(
        Icon(
          coordinateSystem(
            preserveAspectRatio= false
          )
        )
      );
    end Resistor;
    ");
}

#[test]
fn render_default() {
    assert_eq!(
        Model::default().render(Indent::Tabs),
        "model DummyModel\n\tannotation(\n\t\tIcon()\n\t);\nend DummyModel;\n"
    );
}
