//! Resolution of per-corner texture coordinates onto shared vertices.

use std::collections::HashMap;

/// Two texture coordinates name the same vertex value when both components
/// match within this tolerance.
const UV_EPSILON: f32 = 1e-5;

/// Rebuild per-corner texture coordinates as a per-vertex array.
///
/// Input indices reference shared positions, but each face corner carries
/// its own UV pair, so a vertex referenced with two disagreeing pairs cannot
/// keep a single shared slot. The first pair seen for a vertex becomes its
/// definitive value. Every later corner that disagrees beyond [`UV_EPSILON`]
/// in either component gets a duplicated vertex: the position (and normal,
/// when present) is appended, the corner's index entry is rewritten to point
/// at the copy, and the conflicting pair lands in the new slot.
///
/// The index list keeps its length; only its entries are rewritten. Corners
/// beyond the provided pair count, or pointing outside the position array,
/// are left untouched.
///
/// Returns the per-vertex UV array, aligned 1:1 with the (possibly grown)
/// positions. Vertices never referenced by an index keep zeroed coordinates.
pub(crate) fn resolve_tex_coords(
    indices: &mut [u32],
    positions: &mut Vec<f32>,
    mut normals: Option<&mut Vec<f32>>,
    tex_coords: &[f32],
) -> Vec<f32> {
    let vertex_count = positions.len() / 3;
    let mut first_seen: HashMap<u32, [f32; 2]> = HashMap::new();
    let mut resolved = vec![0.0f32; vertex_count * 2];

    let corner_count = indices.len().min(tex_coords.len() / 2);
    for corner in 0..corner_count {
        let u = tex_coords[corner * 2];
        let v = tex_coords[corner * 2 + 1];
        let vi = indices[corner];
        let base = vi as usize * 3;
        if base + 3 > positions.len() {
            continue;
        }

        match first_seen.get(&vi) {
            None => {
                first_seen.insert(vi, [u, v]);
                let slot = vi as usize * 2;
                resolved[slot] = u;
                resolved[slot + 1] = v;
            }
            Some(tc) if (tc[0] - u).abs() > UV_EPSILON || (tc[1] - v).abs() > UV_EPSILON => {
                // Conflict: duplicate the vertex and point this corner at
                // the copy.
                let new_vi = (positions.len() / 3) as u32;
                positions.extend_from_within(base..base + 3);
                if let Some(normals) = normals.as_deref_mut() {
                    if base + 3 <= normals.len() {
                        normals.extend_from_within(base..base + 3);
                    }
                }
                resolved.push(u);
                resolved.push(v);
                indices[corner] = new_vi;
            }
            Some(_) => {}
        }
    }

    resolved
}
