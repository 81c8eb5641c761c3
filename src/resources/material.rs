use crate::resources::shader_graph::ShaderGraph;

/// Surface material as seen by the exporter.
///
/// A material without `use_nodes` (or without a graph) behaves as if it had
/// no shading information at all.
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub name: String,
    pub use_nodes: bool,
    pub graph: Option<ShaderGraph>,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_nodes: false,
            graph: None,
        }
    }

    /// Node-based material driven by `graph`.
    #[must_use]
    pub fn with_graph(name: impl Into<String>, graph: ShaderGraph) -> Self {
        Self {
            name: name.into(),
            use_nodes: true,
            graph: Some(graph),
        }
    }

    /// The graph, only if node shading is enabled.
    #[must_use]
    pub fn active_graph(&self) -> Option<&ShaderGraph> {
        if self.use_nodes { self.graph.as_ref() } else { None }
    }
}
