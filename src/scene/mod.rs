//! Scene document loading.
//!
//! Turns a JSON scene document into a [`Model`]: one mesh per scene object,
//! each with a planar `p3[|n3][|t2]` layout, resolved texture coordinates,
//! and derived tangents.
//!
//! The document is an object with an `objs` array; every object carries a
//! `mesh` record with flat position triples (`v`), a flat index list (`f`),
//! optional normals (`n`, 1:1 with positions), and optional texture
//! coordinate sets (`uv`, one `u, v` pair per index entry; only the first
//! set is consumed).
//!
//! # Example
//!
//! ```
//! let model = rendermesh::load_scene(
//!     r#"{ "objs": [ { "mesh": {
//!         "v": [0, 0, 0,  1, 0, 0,  0, 1, 0],
//!         "f": [0, 1, 2]
//!     } } ] }"#,
//! )
//! .unwrap();
//! assert_eq!(model.meshes().len(), 1);
//! assert_eq!(model.meshes()[0].primitive_count(), 1);
//! ```

mod document;
mod error;
mod loader;
mod split;
#[cfg(test)]
mod tests;

pub use document::{MeshRecord, SceneDocument, SceneObject};
pub use error::SceneError;
pub use loader::Model;

/// Load a model from the text of a JSON scene document.
///
/// # Errors
///
/// [`SceneError::Parse`] when the text is not valid JSON matching the
/// schema, [`SceneError::Mesh`] when an object's mesh data fails
/// construction.
pub fn load_scene(data: &str) -> Result<Model, SceneError> {
    let document: SceneDocument = serde_json::from_str(data)?;
    Model::from_document(document)
}
