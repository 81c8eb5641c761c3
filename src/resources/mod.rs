//! Resource definitions
//!
//! Data the exporter reads from materials and meshes:
//! - Image: float RGBA pixel buffers
//! - ShaderGraph / Material: node-based surface descriptions
//! - resolve: base-color texture / constant resolution
//! - primitives: procedural meshes

pub mod image;
pub mod material;
pub mod primitives;
pub mod resolve;
pub mod shader_graph;

pub use image::{Image, ImageHandle, RowOrigin};
pub use material::Material;
pub use resolve::{resolve_base_color, resolve_in_graph, ResolvedSurface};
pub use shader_graph::{
    Link, NodeId, NodeKind, ShaderGraph, ShaderNode, BASE_COLOR_SOCKET, DEFAULT_BASE_COLOR,
};
