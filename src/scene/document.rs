//! Serde data model for scene documents.

use serde::Deserialize;

/// A scene document: a sequence of objects, each carrying mesh data.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDocument {
    /// Scene objects in declaration order.
    pub objs: Vec<SceneObject>,
}

/// One object of a scene document.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneObject {
    /// The object's mesh record.
    pub mesh: MeshRecord,
}

/// Raw mesh data of one scene object.
///
/// Positions are flat `x, y, z` triples and indices address those triples.
/// Normals, when present, are flat triples 1:1 with the positions. Texture
/// coordinates are per face corner: one `u, v` pair per index entry, grouped
/// in sets; only the first set is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct MeshRecord {
    /// Flat position triples (`v` in the document).
    #[serde(rename = "v")]
    pub positions: Vec<f32>,
    /// Flat triangle index list (`f` in the document).
    #[serde(rename = "f")]
    pub indices: Vec<u32>,
    /// Flat normal triples (`n` in the document), 1:1 with positions.
    #[serde(rename = "n", default)]
    pub normals: Option<Vec<f32>>,
    /// Texture coordinate sets (`uv` in the document), each a flat list of
    /// per-corner pairs.
    #[serde(rename = "uv", default)]
    pub tex_coord_sets: Option<Vec<Vec<f32>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record() {
        let doc: SceneDocument = serde_json::from_str(
            r#"{ "objs": [ { "mesh": { "v": [0, 0, 0], "f": [] } } ] }"#,
        )
        .unwrap();
        let mesh = &doc.objs[0].mesh;
        assert_eq!(mesh.positions, [0.0, 0.0, 0.0]);
        assert!(mesh.normals.is_none());
        assert!(mesh.tex_coord_sets.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let doc: SceneDocument = serde_json::from_str(
            r#"{ "objs": [ { "name": "thing", "mesh": { "v": [], "f": [], "material": 3 } } ] }"#,
        )
        .unwrap();
        assert_eq!(doc.objs.len(), 1);
    }
}
