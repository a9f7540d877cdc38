//! Draw-instruction assembly and GPU vertex tessellation
//!
//! The renderer consumes field state, never owns it. [`renderables`] is the
//! pull-based query a host calls on every paint pass; [`tessellate`] lowers
//! the resulting [`Frame`] into a flat triangle list for GPU-backed hosts.
//! Hosts with their own circle/line primitives can consume the frame directly.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{CircleCmd, Frame, LineCmd, Viewport, renderables};
pub use shapes::tessellate;
pub use vertex::Vertex;
