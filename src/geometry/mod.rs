//! Geometry helpers
//!
//! - [`BoundingBox`]: axis-aligned bounds of mesh vertices
//! - [`order_quad_corners`]: winding-order recovery for four planar points

pub mod bounds;
pub mod quad;

pub use bounds::BoundingBox;
pub use quad::{order_quad_corners, QUAD_EPSILON};
