/// Displacement for the moon surface.
/// The sphere is built with plain UVs first so it can render before any
/// texture arrives; displacement is applied once, when the height map lands.

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use image::GrayImage;

/// Sample a height from a grayscale map at UV coordinates
/// white = high, black = low, result in [0, 1]
pub fn sample_height(map: &GrayImage, u: f32, v: f32) -> f32 {
    let (width, height) = map.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }

    // clamp UV coordinates
    let u = u.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    // UV to pixel coordinates
    let x = (u * (width - 1) as f32).round() as u32;
    let y = (v * (height - 1) as f32).round() as u32;

    map.get_pixel(x, y).0[0] as f32 / 255.0
}

/// Push every vertex along its normal by the sampled height times `scale`.
/// Normals stay as they are, only positions move.
pub fn displace_positions(
    positions: &mut [[f32; 3]],
    normals: &[[f32; 3]],
    uvs: &[[f32; 2]],
    map: &GrayImage,
    scale: f32,
) {
    for ((position, normal), uv) in positions.iter_mut().zip(normals).zip(uvs) {
        let offset = Vec3::from(*normal) * sample_height(map, uv[0], uv[1]) * scale;
        *position = (Vec3::from(*position) + offset).into();
    }
}

/// Apply a height map to a sphere mesh in place.
/// Returns false if the mesh lacks the attributes to displace.
pub fn displace_mesh(mesh: &mut Mesh, map: &GrayImage, scale: f32) -> bool {
    let Some(VertexAttributeValues::Float32x3(normals)) = mesh.attribute(Mesh::ATTRIBUTE_NORMAL) else {
        return false;
    };
    let normals = normals.clone();

    let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0) else {
        return false;
    };
    let uvs = uvs.clone();

    let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION) else {
        return false;
    };
    displace_positions(positions, &normals, &uvs, map, scale);

    // parallax needs tangents that match the new surface
    if let Err(e) = mesh.generate_tangents() {
        warn!("could not regenerate moon tangents: {}", e);
    }

    true
}

/// Build the moon sphere with tangents ready for parallax mapping.
pub fn moon_sphere(radius: f32, segments: u32) -> Mesh {
    let mut mesh = Sphere::new(radius).mesh().uv(segments, segments);
    if let Err(e) = mesh.generate_tangents() {
        warn!("could not generate moon tangents: {}", e);
    }
    mesh
}
