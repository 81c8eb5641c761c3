//! Base-color resolution
//!
//! Finds the image that effectively drives a material's base color, or the
//! constant color to use instead.
//!
//! Search order:
//! 1. Depth-first, backwards from every node linked into the surface
//!    shader's `Base Color` input, following all incoming links of each
//!    visited node. A visited set guards against cycles. The first image
//!    texture with an assigned image wins.
//! 2. Otherwise the first image texture with an image in node declaration
//!    order, anywhere in the graph.
//! 3. Otherwise no image; the constant color alone is used.
//!
//! The constant color is always produced: the surface shader's unlinked
//! `Base Color` value, or [`DEFAULT_BASE_COLOR`] when there is no material,
//! no node graph or no surface shader.

use rustc_hash::FxHashSet;

use crate::resources::image::ImageHandle;
use crate::resources::material::Material;
use crate::resources::shader_graph::{
    NodeId, NodeKind, ShaderGraph, BASE_COLOR_SOCKET, DEFAULT_BASE_COLOR,
};

/// Outcome of [`resolve_base_color`].
#[derive(Debug, Clone)]
pub struct ResolvedSurface {
    pub image: Option<ImageHandle>,
    pub base_color: [f32; 3],
}

impl ResolvedSurface {
    fn constant(base_color: [f32; 3]) -> Self {
        Self {
            image: None,
            base_color,
        }
    }
}

/// Resolves the base-color image and constant for an optional material.
#[must_use]
pub fn resolve_base_color(material: Option<&Material>) -> ResolvedSurface {
    match material.and_then(Material::active_graph) {
        Some(graph) => resolve_in_graph(graph),
        None => ResolvedSurface::constant(DEFAULT_BASE_COLOR),
    }
}

/// Resolves against a node graph directly.
#[must_use]
pub fn resolve_in_graph(graph: &ShaderGraph) -> ResolvedSurface {
    let surface = graph.iter().find(|(_, node)| node.is_principled());

    let base_color = surface
        .and_then(|(_, node)| match node.kind {
            NodeKind::PrincipledBsdf { base_color } => {
                Some([base_color[0], base_color[1], base_color[2]])
            }
            _ => None,
        })
        .unwrap_or(DEFAULT_BASE_COLOR);

    let image = surface
        .and_then(|(id, _)| search_upstream(graph, id))
        .or_else(|| first_image(graph));

    if let Some(image) = &image {
        log::debug!("Base color resolved to image '{}'", image.name());
    }

    ResolvedSurface { image, base_color }
}

fn search_upstream(graph: &ShaderGraph, surface: NodeId) -> Option<ImageHandle> {
    let mut stack: Vec<NodeId> = graph
        .upstream_of_socket(surface, BASE_COLOR_SOCKET)
        .collect();
    let mut visited = FxHashSet::default();

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(node) = graph.node(id) else {
            continue;
        };
        if let Some(image) = node.image() {
            return Some(image.clone());
        }
        stack.extend(graph.upstream_of(id));
    }

    None
}

fn first_image(graph: &ShaderGraph) -> Option<ImageHandle> {
    graph.nodes().iter().find_map(|node| node.image().cloned())
}
