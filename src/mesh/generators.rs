//! Procedural mesh generators for common shapes.
//!
//! The generated meshes go through the regular assembly path, so they carry
//! resolved layouts and derived tangents like any loaded mesh.

use std::f32::consts::PI;

use super::data::{Mesh, PrimitiveTopology};
use super::error::MeshError;

/// Interleaved position + texcoord vertex used by the quad generator.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PtVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

/// Interleaved position + normal vertex used by the sphere generator.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PnVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Generate a quad mesh on the XY plane.
///
/// The quad is centered at the origin with the given half-width and
/// half-height, declared as a single interleaved `p3t2` block with derived
/// tangents. UV coordinates go from (0,0) at top-left to (1,1) at
/// bottom-right.
pub fn generate_quad(half_width: f32, half_height: f32) -> Result<Mesh, MeshError> {
    let vertices = [
        PtVertex {
            position: [-half_width, -half_height, 0.0],
            uv: [0.0, 1.0],
        },
        PtVertex {
            position: [half_width, -half_height, 0.0],
            uv: [1.0, 1.0],
        },
        PtVertex {
            position: [half_width, half_height, 0.0],
            uv: [1.0, 0.0],
        },
        PtVertex {
            position: [-half_width, half_height, 0.0],
            uv: [0.0, 0.0],
        },
    ];
    let indices: Vec<u16> = vec![0, 1, 2, 2, 3, 0];
    let floats: &[f32] = bytemuck::cast_slice(&vertices);

    Mesh::new(
        floats.to_vec(),
        Some(indices),
        "p3t2",
        PrimitiveTopology::TriangleList,
        true,
    )
}

/// Generate a UV sphere mesh.
///
/// Creates a sphere with the given radius, number of longitudinal segments,
/// and number of latitudinal rings. Positions and normals interleave in one
/// block while texture coordinates occupy a planar block (`p3n3|t2`), and
/// tangents are derived.
///
/// Indices are u16, so `(rings + 1) * (segments + 1)` must stay within
/// 65536 vertices.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `segments` - Number of longitudinal segments (around the equator)
/// * `rings` - Number of latitudinal rings (from pole to pole)
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> Result<Mesh, MeshError> {
    let mut pn = Vec::new();
    let mut uvs = Vec::new();

    for ring in 0..=rings {
        let theta = ring as f32 * PI / rings as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for segment in 0..=segments {
            let phi = segment as f32 * 2.0 * PI / segments as f32;
            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            pn.push(PnVertex {
                position: [x * radius, y * radius, z * radius],
                normal: [x, y, z],
            });
            uvs.push(segment as f32 / segments as f32);
            uvs.push(ring as f32 / rings as f32);
        }
    }

    let mut indices: Vec<u16> = Vec::new();
    for ring in 0..rings {
        for segment in 0..segments {
            let current = (ring * (segments + 1) + segment) as u16;
            let next = current + segments as u16 + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    // Interleaved position+normal region first, planar UV region after it.
    let mut floats: Vec<f32> = Vec::with_capacity(pn.len() * 6 + uvs.len());
    floats.extend_from_slice(bytemuck::cast_slice(&pn));
    floats.extend_from_slice(&uvs);

    Mesh::new(
        floats,
        Some(indices),
        "p3n3|t2",
        PrimitiveTopology::TriangleList,
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::AttributeRole;

    #[test]
    fn test_generate_quad() {
        let mesh = generate_quad(0.5, 0.5).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.primitive_count(), 2);
        assert_eq!(mesh.vertex_format().format(), "p3t2|tg3");
        // 4 vertices * (5 interleaved + 3 tangent) floats.
        assert_eq!(mesh.vertex_data().len(), 32);
    }

    #[test]
    fn test_generate_sphere_counts() {
        let mesh = generate_sphere(1.0, 8, 4).unwrap();
        // (rings+1) * (segments+1) = 5 * 9 = 45 vertices
        assert_eq!(mesh.vertex_count(), 45);
        // rings * segments * 6 = 4 * 8 * 6 = 192 indices
        assert_eq!(mesh.index_count(), 192);
        assert_eq!(mesh.primitive_count(), 64);
    }

    #[test]
    fn test_sphere_mixed_layout() {
        let mesh = generate_sphere(2.0, 4, 2).unwrap();
        let vertex_count = mesh.vertex_count();

        let pos = mesh.vertex_format().find(AttributeRole::Position).unwrap();
        assert_eq!((pos.offset, pos.stride), (0, 24));

        // The planar UV region starts after the interleaved block.
        let uv = mesh.vertex_format().find(AttributeRole::TexCoord).unwrap();
        assert_eq!((uv.offset, uv.stride), (vertex_count * 24, 0));

        // Tangents landed in their own planar region after the UVs.
        let tangent = mesh.vertex_format().find(AttributeRole::Tangent).unwrap();
        assert_eq!((tangent.offset, tangent.stride), (vertex_count * 32, 0));
    }

    #[test]
    fn test_sphere_tangents_are_finite_units_off_the_poles() {
        let mesh = generate_sphere(1.0, 8, 4).unwrap();
        let tangent = *mesh.vertex_format().find(AttributeRole::Tangent).unwrap();
        let base = (tangent.offset / 4) as usize;
        let data = mesh.vertex_data();

        // Skip the pole rings, whose collapsed triangles give no contribution.
        for vi in 9..36 {
            let t = &data[base + vi * 3..base + vi * 3 + 3];
            let len = (t[0] * t[0] + t[1] * t[1] + t[2] * t[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4, "vertex {vi}: {t:?}");
        }
    }
}
