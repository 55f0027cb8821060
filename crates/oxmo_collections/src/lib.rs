//! Types for the SVG attribute values understood by OXMO and the Modelica values they map to.
pub mod color;
pub mod error;
pub mod length;
pub mod modelica;
pub mod style;
pub mod transform;
