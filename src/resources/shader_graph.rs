//! Shading graph model
//!
//! A material's node tree: nodes in declaration order plus directed links
//! from an output socket of one node to an input socket of another. Only the
//! node kinds the base-color resolver cares about are modelled; everything
//! else is [`NodeKind::Other`].

use serde::{Deserialize, Serialize};

use crate::resources::image::ImageHandle;

/// Name of the surface input whose texture or constant the exporter resolves.
pub const BASE_COLOR_SOCKET: &str = "Base Color";

/// Default surface color when a material provides none.
pub const DEFAULT_BASE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Index of a node in [`ShaderGraph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Principled surface shader; `base_color` is the unlinked default of its
    /// `Base Color` input (RGBA).
    PrincipledBsdf { base_color: [f32; 4] },
    /// Image texture sampler. `image` is `None` when no image is assigned.
    ImageTexture { image: Option<ImageHandle> },
    /// Any other node (mix, math, mapping, ...), kept for graph connectivity.
    Other { type_name: String },
}

#[derive(Debug, Clone)]
pub struct ShaderNode {
    pub name: String,
    pub kind: NodeKind,
}

impl ShaderNode {
    /// The assigned image, if this node is an image texture that has one.
    #[must_use]
    pub fn image(&self) -> Option<&ImageHandle> {
        match &self.kind {
            NodeKind::ImageTexture { image } => image.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_principled(&self) -> bool {
        matches!(self.kind, NodeKind::PrincipledBsdf { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub from_node: NodeId,
    pub from_socket: String,
    pub to_node: NodeId,
    pub to_socket: String,
}

#[derive(Debug, Clone, Default)]
pub struct ShaderGraph {
    nodes: Vec<ShaderNode>,
    links: Vec<Link>,
}

impl ShaderGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its id. Declaration order is insertion order.
    pub fn add_node(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        self.nodes.push(ShaderNode {
            name: name.into(),
            kind,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Connects `from.from_socket` to `to.to_socket`.
    ///
    /// Links to unknown node ids are kept; traversal simply finds no node there.
    pub fn link(
        &mut self,
        from: NodeId,
        from_socket: impl Into<String>,
        to: NodeId,
        to_socket: impl Into<String>,
    ) {
        self.links.push(Link {
            from_node: from,
            from_socket: from_socket.into(),
            to_node: to,
            to_socket: to_socket.into(),
        });
    }

    #[must_use]
    pub fn nodes(&self) -> &[ShaderNode] {
        &self.nodes
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ShaderNode> {
        self.nodes.get(id.0)
    }

    /// Iterates `(id, node)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ShaderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Nodes feeding any input of `to`, in link order.
    pub fn upstream_of(&self, to: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.links
            .iter()
            .filter(move |l| l.to_node == to)
            .map(|l| l.from_node)
    }

    /// Nodes feeding the input socket named `socket` on `to`, in link order.
    pub fn upstream_of_socket<'a>(
        &'a self,
        to: NodeId,
        socket: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.links
            .iter()
            .filter(move |l| l.to_node == to && l.to_socket == socket)
            .map(|l| l.from_node)
    }
}
