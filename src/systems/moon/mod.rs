use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use image::DynamicImage;

pub mod mesh;
pub mod textures;

use mesh::{displace_mesh, moon_sphere};
use textures::{TextureInbox, TextureKind, sources, spawn_fetches};
use crate::config::{
    BUMP_SCALE, DISPLACEMENT_SCALE, LIGHT_INTENSITY, LIGHT_POSITION, LUX_PER_INTENSITY, MOON_RADIUS,
    MOON_SEGMENTS, SKYDOME_RADIUS, SKYDOME_SEGMENTS, SceneConfig,
};
use crate::systems::animation::Spin;

pub struct MoonPlugin;

impl Plugin for MoonPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start)
            .add_systems(Update, apply_textures.run_if(resource_exists::<TextureInbox>));
    }
}

// moon tag
#[derive(Component)]
pub struct Moon;

// skydome tag
#[derive(Component)]
pub struct Skydome;

// handles the fetched maps get written into
#[derive(Resource)]
struct SceneHandles {
    moon_mesh: Handle<Mesh>,
    moon_material: Handle<StandardMaterial>,
    skydome_material: Handle<StandardMaterial>,
}

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    // moon, starts collapsed and grows in with the entrance timeline
    let moon_mesh = meshes.add(moon_sphere(MOON_RADIUS, MOON_SEGMENTS));
    let moon_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        metallic: 0.0,
        reflectance: 0.0,
        perceptual_roughness: 1.0,
        parallax_depth_scale: BUMP_SCALE,
        ..default()
    });

    commands.spawn((
        Mesh3d(moon_mesh.clone()),
        MeshMaterial3d(moon_material.clone()),
        Transform::from_scale(Vec3::ZERO),
        Spin::default(),
        Moon,
    ));

    // skydome, seen from the inside
    let skydome_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SKYDOME_RADIUS).mesh().uv(SKYDOME_SEGMENTS, SKYDOME_SEGMENTS))),
        MeshMaterial3d(skydome_material.clone()),
        Transform::default(),
        Spin::default(),
        Skydome,
    ));

    // key light, off to the side
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: LIGHT_INTENSITY * LUX_PER_INTENSITY,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(SceneHandles {
        moon_mesh,
        moon_material,
        skydome_material,
    });

    commands.insert_resource(spawn_fetches(sources(&config)));
}

// convert a decoded map into a bevy image
fn to_image(image: DynamicImage, is_srgb: bool) -> Image {
    Image::from_dynamic(image, is_srgb, RenderAssetUsages::RENDER_WORLD)
}

// bump heights become parallax depth: white is high, so invert
fn depth_from_heights(heights: &DynamicImage) -> DynamicImage {
    let mut depth = heights.to_luma8();
    image::imageops::invert(&mut depth);
    DynamicImage::ImageLuma8(depth)
}

// write whatever textures have arrived into the scene
fn apply_textures(
    inbox: Res<TextureInbox>,
    handles: Res<SceneHandles>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for fetch in inbox.drain() {
        let image = match fetch.result {
            Ok(image) => image,
            Err(e) => {
                warn!("{:?} map from {} unavailable: {}", fetch.kind, fetch.url, e);
                continue;
            }
        };
        info!("{:?} map loaded ({}x{})", fetch.kind, image.width(), image.height());

        match fetch.kind {
            TextureKind::Color => {
                let handle = images.add(to_image(image, true));
                if let Some(material) = materials.get_mut(&handles.moon_material) {
                    material.base_color_texture = Some(handle);
                }
            }
            TextureKind::Displacement => {
                if let Some(mesh) = meshes.get_mut(&handles.moon_mesh) {
                    if !displace_mesh(mesh, &image.to_luma8(), DISPLACEMENT_SCALE) {
                        warn!("moon mesh has no normals or uvs, skipping displacement");
                    }
                }

                let depth = images.add(to_image(depth_from_heights(&image), false));
                if let Some(material) = materials.get_mut(&handles.moon_material) {
                    material.depth_map = Some(depth);
                }
            }
            TextureKind::Skydome => {
                let handle = images.add(to_image(image, true));
                if let Some(material) = materials.get_mut(&handles.skydome_material) {
                    material.base_color_texture = Some(handle);
                }
            }
        }
    }
}
