//! Scene exporter
//!
//! ```text
//! scene_exporter [--srgb] <scene.json> <export_root>
//! scene_exporter [--srgb] --demo <export_root>
//! ```
//!
//! `--demo` exports a built-in scene made from procedural primitives.
//! Set `RUST_LOG=debug` for per-object output.

use std::sync::Arc;

use anyhow::{bail, Context};
use glam::DVec3;

use scene_export::resources::shader_graph::NodeKind;
use scene_export::scene::{
    load_scene, CameraData, LightData, LightType, RenderSettings, Scene, SceneObject,
};
use scene_export::{
    create_box, create_plane, create_uv_sphere, export_scene, ExportSettings, Image, Material,
    PlaneOptions, ShaderGraph, SphereOptions, WorldTransform,
};

const USAGE: &str = "usage: scene_exporter [--srgb] (<scene.json> | --demo) <export_root>";

struct Args {
    input: Option<String>,
    export_root: String,
    srgb: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut srgb = false;
    let mut demo = false;
    let mut positional = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--srgb" => srgb = true,
            "--demo" => demo = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            _ => positional.push(arg),
        }
    }

    match (demo, positional.as_slice()) {
        (true, [root]) => Ok(Args {
            input: None,
            export_root: root.clone(),
            srgb,
        }),
        (false, [input, root]) => Ok(Args {
            input: Some(input.clone()),
            export_root: root.clone(),
            srgb,
        }),
        _ => bail!("{USAGE}"),
    }
}

fn demo_scene() -> anyhow::Result<Scene> {
    let mut scene = Scene::new().with_render_settings(RenderSettings {
        resolution_x: 1280,
        resolution_y: 720,
        resolution_percentage: 100,
    });

    // Checkerboard floor
    let (w, h) = (8u32, 8u32);
    let mut pixels = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let v = if (x + y) % 2 == 0 { 0.9 } else { 0.1 };
            pixels.extend_from_slice(&[v, v, v, 1.0]);
        }
    }
    let checker = Arc::new(Image::new("checker.png", w, h, pixels, Default::default())?);

    let mut graph = ShaderGraph::new();
    let tex = graph.add_node("Image Texture", NodeKind::ImageTexture { image: Some(checker) });
    let bsdf = graph.add_node(
        "Principled BSDF",
        NodeKind::PrincipledBsdf {
            base_color: [0.8, 0.8, 0.8, 1.0],
        },
    );
    graph.link(tex, "Color", bsdf, "Base Color");

    let floor = create_plane(PlaneOptions {
        width: 10.0,
        height: 10.0,
        ..Default::default()
    })
    .with_material(Material::with_graph("Floor", graph));

    scene
        .add(SceneObject::mesh("Floor Plane", WorldTransform::IDENTITY, floor))
        .add(SceneObject::mesh(
            "Ball",
            WorldTransform::from_trs_euler(DVec3::new(0.0, 0.0, 1.0), DVec3::ZERO, DVec3::ONE),
            create_uv_sphere(SphereOptions::default()),
        ))
        .add(SceneObject::mesh(
            "Crate",
            WorldTransform::from_trs_euler(
                DVec3::new(3.0, 0.0, 1.0),
                DVec3::new(0.0, 0.0, 0.5),
                DVec3::splat(0.5),
            ),
            create_box(2.0, 2.0, 2.0),
        ))
        .add(SceneObject::light(
            "Key Light",
            WorldTransform::from_trs_euler(DVec3::new(4.0, -4.0, 6.0), DVec3::ZERO, DVec3::ONE),
            LightData {
                light_type: LightType::Point,
                energy: 1000.0,
            },
        ))
        .add(SceneObject::camera(
            "Camera",
            WorldTransform::from_trs_euler(
                DVec3::new(0.0, -10.0, 3.0),
                DVec3::new(1.3, 0.0, 0.0),
                DVec3::ONE,
            ),
            CameraData::default(),
        ));

    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = parse_args()?;

    let scene = match &args.input {
        Some(path) => load_scene(path).with_context(|| format!("loading {path}"))?,
        None => demo_scene()?,
    };

    let settings = ExportSettings::new(&args.export_root).with_srgb(args.srgb);
    let outcome = export_scene(&scene, settings)
        .with_context(|| format!("exporting to {}", args.export_root))?;

    println!(
        "Wrote {} ({} records, {} textures)",
        outcome.document_path.display(),
        outcome.bundle.len(),
        outcome.textures.len()
    );
    for warning in outcome.warnings() {
        println!("warning: {warning}");
    }

    Ok(())
}
