//! OXMO Annotation is a small tree for Modelica graphical annotations, such as the `Icon` of a
//! model.
//!
//! Each [`Node`] is a record constructor call with ordered children and ordered named
//! arguments, which serializes itself with indentation proportional to its depth.
//!
//! # Example
//!
//! ```
//! use oxmo_annotation::{Indent, Node};
//!
//! let node = Node::new("name")
//!     .with_attribute("a", "1")
//!     .with_attribute("b", "2");
//! assert_eq!(node.render(1, Indent::default()), "name(\n  a= 1,\n  b= 2\n)");
//! ```
pub mod format;
mod indent;
mod model;
mod node;

pub use indent::Indent;
pub use model::{Model, DEFAULT_MODEL_NAME};
pub use node::{Node, Value};
