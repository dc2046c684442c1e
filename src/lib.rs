//! # rendermesh
//!
//! Renderer-ready mesh assembly. This crate turns raw geometric scene data
//! into meshes a renderer can bind directly: flat vertex buffers with a
//! declared attribute layout, u16 index buffers, and derived tangent-space
//! data. No GPU API is touched; the produced buffers and the byte-exact
//! attribute table are the whole contract.
//!
//! - [`mesh`] — vertex format grammar, layout building, mesh assembly,
//!   tangent derivation, procedural generators
//! - [`scene`] — JSON scene document loading
//! - [`math`] — f32 vector aliases used by the geometry passes
//!
//! # Vertex format grammar
//!
//! Layouts are declared with a compact string: `|`-separated blocks of
//! `roleCode size` attributes (`p3` positions, `n3` normals, `t2` texture
//! coordinates, ...). A block with one attribute packs planar across all
//! vertices; a block with several interleaves them per vertex. See
//! [`mesh::VertexFormat`].
//!
//! # Example
//!
//! ```
//! use rendermesh::{AttributeRole, Mesh, PrimitiveTopology};
//!
//! // Two triangles over four vertices, positions interleaved with UVs.
//! let vertices = vec![
//!     -1.0, -1.0, 0.0, 0.0, 0.0, //
//!     1.0, -1.0, 0.0, 1.0, 0.0, //
//!     1.0, 1.0, 0.0, 1.0, 1.0, //
//!     -1.0, 1.0, 0.0, 0.0, 1.0, //
//! ];
//! let indices = vec![0u16, 1, 2, 2, 3, 0];
//! let mesh = Mesh::new(
//!     vertices,
//!     Some(indices),
//!     "p3t2",
//!     PrimitiveTopology::TriangleList,
//!     true,
//! )?;
//!
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.primitive_count(), 2);
//! // Tangent derivation appended a planar block and extended the layout.
//! assert_eq!(mesh.vertex_format().format(), "p3t2|tg3");
//! assert!(mesh.vertex_format().find(AttributeRole::Tangent).is_some());
//! # Ok::<(), rendermesh::MeshError>(())
//! ```

pub mod math;
pub mod mesh;
pub mod scene;

pub use mesh::{
    AttributeRole, LayoutPolicy, Mesh, MeshError, PrimitiveTopology, VertexAttribute, VertexFormat,
};
pub use scene::{load_scene, Model, SceneError};
