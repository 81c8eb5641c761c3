//! Scene Assembler
//!
//! Drives one export run over a [`SceneProvider`]:
//!
//! 1. [`SceneExporter::build`] runs the matching estimator for every object,
//!    in provider order, and collects records, warnings and the textures the
//!    planes reference. Nothing is written.
//! 2. [`SceneExporter::export`] creates the output directories, encodes each
//!    texture once and writes the geometry document.
//!
//! Output files are overwritten in place; a failure part-way through can
//! leave a partially populated export root.

use std::path::PathBuf;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::export::bundle::{ExportBundle, ShapeRecord};
use crate::export::settings::ExportSettings;
use crate::export::writer::write_document;
use crate::scene::object::{ObjectKind, SceneObject, ShapeKind};
use crate::scene::provider::SceneProvider;
use crate::shapes::{
    estimate_camera, estimate_cube, estimate_plane, estimate_point_light, estimate_sphere,
    Estimate, TextureRequest,
};
use crate::texture::ppm::PpmEncoder;
use crate::utils::fs::ensure_dir;

/// Records and pending texture writes of one run.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    pub bundle: ExportBundle,
    /// Texture writes in first-use order. A file name repeats only when
    /// different images sanitize to it; the last write wins.
    pub textures: Vec<TextureRequest>,
}

/// Result of a completed export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub bundle: ExportBundle,
    pub document_path: PathBuf,
    pub textures: Vec<PathBuf>,
}

impl ExportOutcome {
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.bundle.warnings
    }
}

pub struct SceneExporter {
    settings: ExportSettings,
    encoder: PpmEncoder,
}

impl SceneExporter {
    #[must_use]
    pub fn new(settings: ExportSettings) -> Self {
        let encoder = PpmEncoder::new(settings.apply_srgb);
        Self { settings, encoder }
    }

    #[must_use]
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Estimates every object of `provider` without touching the filesystem.
    #[must_use]
    pub fn build<P: SceneProvider + ?Sized>(&self, provider: &P) -> ExportPlan {
        let render = provider.render_settings();
        let mut plan = ExportPlan::default();
        let mut texture_slots: FxHashMap<String, usize> = FxHashMap::default();

        for object in provider.objects() {
            let SceneObject {
                name,
                transform,
                kind,
            } = object;

            let estimate: Option<Estimate<ShapeRecord>> = match kind {
                ObjectKind::Mesh(mesh) => match mesh.shape {
                    ShapeKind::Sphere => {
                        Some(estimate_sphere(name, transform, mesh).map(ShapeRecord::Sphere))
                    }
                    ShapeKind::Cube => Some(estimate_cube(name, transform).map(ShapeRecord::Cube)),
                    ShapeKind::Plane => {
                        let estimate =
                            estimate_plane(name, transform, mesh, &self.settings.textures_dir);
                        Some(estimate.map(|export| {
                            if let Some(request) = export.texture {
                                plan.add_texture(&mut texture_slots, request);
                            }
                            ShapeRecord::Plane(export.record)
                        }))
                    }
                    ShapeKind::Other => {
                        log::debug!("Skipping mesh '{name}' with no exportable shape");
                        None
                    }
                },
                ObjectKind::Light(light) => {
                    estimate_point_light(name, transform, light).map(|e| e.map(ShapeRecord::PointLight))
                }
                ObjectKind::Camera(camera) => {
                    Some(estimate_camera(name, transform, camera, &render).map(ShapeRecord::Camera))
                }
            };

            if let Some(Estimate { record, warnings }) = estimate {
                log::debug!("Exported {} '{name}'", record.category());
                plan.bundle.push(record);
                plan.bundle.extend_warnings(warnings);
            }
        }

        plan
    }

    /// Builds the plan, then writes textures and the geometry document.
    pub fn export<P: SceneProvider + ?Sized>(&self, provider: &P) -> Result<ExportOutcome> {
        let ExportPlan { bundle, textures } = self.build(provider);

        ensure_dir(&self.settings.export_root)?;
        let textures_path = self.settings.textures_path();
        ensure_dir(&textures_path)?;

        let mut written = Vec::with_capacity(textures.len());
        for request in &textures {
            let path = textures_path.join(&request.file_name);
            self.encoder.write_file(&request.image, &path)?;
            written.push(path);
        }

        let document_path = self.settings.document_path();
        write_document(&bundle, &document_path)?;

        for warning in &bundle.warnings {
            log::warn!("{warning}");
        }
        log::info!(
            "Exported {} records, {} textures, {} warnings to {}",
            bundle.len(),
            written.len(),
            bundle.warnings.len(),
            self.settings.export_root.display()
        );

        Ok(ExportOutcome {
            bundle,
            document_path,
            textures: written,
        })
    }
}

impl ExportPlan {
    /// Queues a texture write. The same image under the same name is queued
    /// once; a different image under an already used name is queued again,
    /// so the later one overwrites the file.
    fn add_texture(&mut self, slots: &mut FxHashMap<String, usize>, request: TextureRequest) {
        if let Some(&index) = slots.get(&request.file_name)
            && Arc::ptr_eq(&self.textures[index].image, &request.image)
        {
            return;
        }
        slots.insert(request.file_name.clone(), self.textures.len());
        self.textures.push(request);
    }
}

/// Exports `provider` with `settings`.
pub fn export_scene<P: SceneProvider + ?Sized>(
    provider: &P,
    settings: ExportSettings,
) -> Result<ExportOutcome> {
    SceneExporter::new(settings).export(provider)
}
