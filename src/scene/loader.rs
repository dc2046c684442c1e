//! Model construction from scene documents.

use crate::mesh::{Mesh, PrimitiveTopology};

use super::document::{MeshRecord, SceneDocument};
use super::error::SceneError;
use super::split;

/// A drawable model: the ordered meshes built from one scene document.
///
/// Built once, immutable afterward.
#[derive(Debug)]
pub struct Model {
    meshes: Vec<Mesh>,
}

impl Model {
    /// Build a model from a parsed scene document.
    ///
    /// Each object contributes one triangle-list mesh with a planar
    /// `p3[|n3][|t2]` layout and derived tangents. The document is consumed:
    /// resolving texture coordinates rewrites indices and grows the position
    /// and normal arrays in place. Loading stops at the first object whose
    /// mesh data is invalid.
    pub fn from_document(document: SceneDocument) -> Result<Self, SceneError> {
        let mut meshes = Vec::with_capacity(document.objs.len());
        for obj in document.objs {
            meshes.push(build_mesh(obj.mesh)?);
        }
        Ok(Self { meshes })
    }

    /// The model's meshes, in document order.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }
}

/// Assemble one object's mesh record into a [`Mesh`].
///
/// Indices are narrowed to u16 with a wrapping cast.
fn build_mesh(record: MeshRecord) -> Result<Mesh, SceneError> {
    let MeshRecord {
        mut positions,
        mut indices,
        mut normals,
        tex_coord_sets,
    } = record;

    let first_uv_set = tex_coord_sets.and_then(|mut sets| {
        if sets.is_empty() {
            None
        } else {
            if sets.len() > 1 {
                log::warn!(
                    "scene object carries {} texture coordinate sets, using the first",
                    sets.len()
                );
            }
            Some(sets.swap_remove(0))
        }
    });

    let resolved_uv = first_uv_set.map(|set| {
        split::resolve_tex_coords(&mut indices, &mut positions, normals.as_mut(), &set)
    });

    let has_normals = normals.is_some();
    let has_tex_coords = resolved_uv.is_some();

    let mut format = String::from("p3");
    if has_normals {
        format.push_str("|n3");
    }
    if has_tex_coords {
        format.push_str("|t2");
    }
    let size = 3 + if has_normals { 3 } else { 0 } + if has_tex_coords { 2 } else { 0 };

    // One flat buffer with disjoint planar regions: positions, then normals,
    // then texture coordinates.
    let vertex_count = positions.len() / 3;
    let mut vertices = vec![0.0f32; vertex_count * size];
    let mut offset = 0;
    vertices[..vertex_count * 3].copy_from_slice(&positions[..vertex_count * 3]);
    offset += vertex_count * 3;
    if let Some(normals) = &normals {
        let len = normals.len().min(vertex_count * 3);
        vertices[offset..offset + len].copy_from_slice(&normals[..len]);
        offset += vertex_count * 3;
    }
    if let Some(uv) = &resolved_uv {
        vertices[offset..offset + uv.len()].copy_from_slice(uv);
    }

    let index_data: Vec<u16> = indices.iter().map(|&i| i as u16).collect();

    let mesh = Mesh::new(
        vertices,
        Some(index_data),
        &format,
        PrimitiveTopology::TriangleList,
        true,
    )?;
    log::debug!(
        "loaded mesh: {} vertices, {} indices, {} triangles, format {:?}",
        mesh.vertex_count(),
        mesh.index_count(),
        mesh.primitive_count(),
        mesh.vertex_format().format(),
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::AttributeRole;
    use crate::scene::document::SceneObject;

    fn triangle_record() -> MeshRecord {
        MeshRecord {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
            ],
            indices: vec![0, 1, 2],
            normals: Some(vec![
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
            ]),
            tex_coord_sets: Some(vec![vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]]),
        }
    }

    #[test]
    fn test_full_record_builds_tangent_extended_mesh() {
        let mesh = build_mesh(triangle_record()).unwrap();
        assert_eq!(mesh.vertex_format().format(), "p3|n3|t2|tg3");
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.primitive_count(), 1);
        assert!(mesh.vertex_format().find(AttributeRole::Tangent).is_some());
    }

    #[test]
    fn test_positions_only_record() {
        let record = MeshRecord {
            positions: vec![0.0; 9],
            indices: vec![0, 1, 2],
            normals: None,
            tex_coord_sets: None,
        };
        let mesh = build_mesh(record).unwrap();
        // No texture coordinates, so the tangent request is a no-op.
        assert_eq!(mesh.vertex_format().format(), "p3");
        assert_eq!(mesh.vertex_format().size(), 3);
    }

    #[test]
    fn test_empty_uv_sets_treated_as_absent() {
        let mut record = triangle_record();
        record.tex_coord_sets = Some(vec![]);
        let mesh = build_mesh(record).unwrap();
        assert_eq!(mesh.vertex_format().format(), "p3|n3");
    }

    #[test]
    fn test_conflicting_uvs_grow_the_mesh() {
        let record = MeshRecord {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
            ],
            indices: vec![0, 1, 2, 0, 2, 1],
            normals: None,
            // The second triangle's corner at vertex 0 disagrees.
            tex_coord_sets: Some(vec![vec![
                0.0, 0.0, //
                1.0, 0.0, //
                0.0, 1.0, //
                0.5, 0.5, //
                0.0, 1.0, //
                1.0, 0.0, //
            ]]),
        };
        let mesh = build_mesh(record).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices().unwrap(), &[0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_model_preserves_document_order() {
        let document = SceneDocument {
            objs: vec![
                SceneObject {
                    mesh: triangle_record(),
                },
                SceneObject {
                    mesh: MeshRecord {
                        positions: vec![0.0; 18],
                        indices: vec![0, 1, 2, 3, 4, 5],
                        normals: None,
                        tex_coord_sets: None,
                    },
                },
            ],
        };
        let model = Model::from_document(document).unwrap();
        assert_eq!(model.meshes().len(), 2);
        assert_eq!(model.meshes()[0].vertex_count(), 3);
        assert_eq!(model.meshes()[1].vertex_count(), 6);
    }
}
