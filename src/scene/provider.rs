use crate::scene::object::{RenderSettings, SceneObject};

/// Source of the objects to export.
///
/// Implementations hand over objects in a stable order; the exported
/// document lists records in that order within each category.
pub trait SceneProvider {
    fn objects(&self) -> &[SceneObject];

    fn render_settings(&self) -> RenderSettings {
        RenderSettings::default()
    }
}

/// In-memory scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub render: RenderSettings,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_render_settings(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self
    }

    pub fn add(&mut self, object: SceneObject) -> &mut Self {
        self.objects.push(object);
        self
    }
}

impl SceneProvider for Scene {
    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    fn render_settings(&self) -> RenderSettings {
        self.render
    }
}
