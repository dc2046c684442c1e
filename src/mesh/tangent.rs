//! Per-vertex tangent derivation for normal mapping.
//!
//! For each triangle, the position edges and texture-coordinate deltas form
//! a 2×2 system whose solution is the surface direction aligned with the
//! texture U axis. Triangle tangents are written into the slots of their
//! three vertices (a later triangle touching the same vertex supersedes the
//! earlier value), then every per-vertex tangent is renormalized. Vertices
//! no triangle touches keep the zero vector.

use crate::math::{normalize_or_zero, Vec2, Vec3};

use super::data::PrimitiveTopology;
use super::error::MeshError;
use super::format::{AttributeRole, VertexAttribute, VertexFormat};

/// Result of a tangent pass: the extended vertex buffer and its new format.
pub(crate) struct TangentExtension {
    pub vertices: Vec<f32>,
    pub format: VertexFormat,
}

/// Effective element stride of an attribute, in floats.
///
/// A planar attribute reports stride 0 and is tightly packed by its own size.
fn stride_floats(attr: &VertexAttribute) -> usize {
    if attr.stride == 0 {
        attr.size as usize
    } else {
        (attr.stride / 4) as usize
    }
}

/// Derive per-vertex tangents and append them as a planar block.
///
/// Applicable only to triangle lists carrying a three-component position and
/// a two-component texture coordinate; returns `Ok(None)` otherwise, which
/// callers treat as "keep the mesh as declared". Indices are consumed in
/// whole triples; a trailing partial triple contributes nothing.
///
/// On success the returned buffer is the input buffer followed by the
/// tangent block, with the format rebuilt from the old declaration plus a
/// trailing `tg3` block.
pub(crate) fn compute_tangents(
    format: &VertexFormat,
    vertices: &[f32],
    indices: Option<&[u16]>,
    vertex_count: u32,
    index_count: u32,
    topology: PrimitiveTopology,
) -> Result<Option<TangentExtension>, MeshError> {
    if topology != PrimitiveTopology::TriangleList {
        return Ok(None);
    }
    let (Some(pos), Some(tex)) = (
        format.find(AttributeRole::Position),
        format.find(AttributeRole::TexCoord),
    ) else {
        return Ok(None);
    };
    if pos.size != 3 || tex.size != 2 {
        return Ok(None);
    }

    let p_stride = stride_floats(pos);
    let p_offset = (pos.offset / 4) as usize;
    let t_stride = stride_floats(tex);
    let t_offset = (tex.offset / 4) as usize;

    let position_at = |vi: usize| {
        let base = vi * p_stride + p_offset;
        Vec3::new(vertices[base], vertices[base + 1], vertices[base + 2])
    };
    let uv_at = |vi: usize| {
        let base = vi * t_stride + t_offset;
        Vec2::new(vertices[base], vertices[base + 1])
    };

    let mut tangents = vec![0.0f32; vertex_count as usize * 3];

    for tri in 0..(index_count / 3) as usize {
        let corner = |i: usize| match indices {
            Some(idx) => idx[tri * 3 + i] as usize,
            None => tri * 3 + i,
        };
        let tri_indices = [corner(0), corner(1), corner(2)];

        let p0 = position_at(tri_indices[0]);
        let uv0 = uv_at(tri_indices[0]);
        let uv1 = uv_at(tri_indices[1]);
        let uv2 = uv_at(tri_indices[2]);

        let q1 = position_at(tri_indices[1]) - p0;
        let q2 = position_at(tri_indices[2]) - p0;

        // 2x2 system from the UV deltas: u1 = (t2, -t1), u2 = (-s2, s1).
        let u1 = [uv2.y - uv0.y, -(uv1.y - uv0.y)];
        let u2 = [-(uv2.x - uv0.x), uv1.x - uv0.x];

        let frac = 1.0 / (u1[0] * u2[1] - u2[0] * u1[1]);
        let mut t = (q1 * u1[0] + q2 * u1[1]) * frac;
        normalize_or_zero(&mut t);

        for &vi in &tri_indices {
            tangents[vi * 3..vi * 3 + 3].copy_from_slice(t.as_slice());
        }
    }

    for vi in 0..vertex_count as usize {
        let mut t = Vec3::new(tangents[vi * 3], tangents[vi * 3 + 1], tangents[vi * 3 + 2]);
        normalize_or_zero(&mut t);
        tangents[vi * 3..vi * 3 + 3].copy_from_slice(t.as_slice());
    }

    let mut extended = Vec::with_capacity(vertices.len() + tangents.len());
    extended.extend_from_slice(vertices);
    extended.extend_from_slice(&tangents);

    let declaration = format!("{}|{}3", format.format(), AttributeRole::Tangent.code());
    let format = VertexFormat::new(&declaration, extended.len())?;

    Ok(Some(TangentExtension {
        vertices: extended,
        format,
    }))
}
