//! Mesh assembly from vertex data, indices, and a format declaration.

use super::error::MeshError;
use super::format::VertexFormat;
use super::tangent;

/// Primitive topology describing how indices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Each index is a separate point.
    PointList,
    /// Every two indices form a line.
    LineList,
    /// Indices form a connected strip of lines.
    LineStrip,
    /// Like [`PrimitiveTopology::LineStrip`], closed back to the first index.
    LineLoop,
    /// Every three indices form a triangle.
    #[default]
    TriangleList,
    /// Indices form a connected strip of triangles.
    TriangleStrip,
    /// Triangles fan out from the first index.
    TriangleFan,
}

/// Number of primitives `index_count` indices describe under `topology`.
///
/// Strip and fan triangle topologies use the `index_count / 2` rule.
fn primitive_count(topology: PrimitiveTopology, index_count: u32) -> u32 {
    match topology {
        PrimitiveTopology::TriangleList => index_count / 3,
        PrimitiveTopology::TriangleStrip | PrimitiveTopology::TriangleFan => index_count / 2,
        PrimitiveTopology::LineList => index_count / 2,
        PrimitiveTopology::LineStrip | PrimitiveTopology::LineLoop => {
            index_count.saturating_sub(1)
        }
        PrimitiveTopology::PointList => index_count,
    }
}

/// A renderer-ready mesh: one flat vertex buffer with a resolved
/// [`VertexFormat`], an optional u16 index buffer, and derived counts.
///
/// A mesh is either fully constructed or the constructing call failed and
/// produced nothing; no reference to its buffers escapes before construction
/// completes. When tangent derivation runs, the vertex buffer and format are
/// replaced together, never one without the other.
pub struct Mesh {
    vertex_format: VertexFormat,
    vertices: Vec<f32>,
    indices: Option<Vec<u16>>,
    topology: PrimitiveTopology,
    vertex_count: u32,
    index_count: u32,
    primitive_count: u32,
}

impl Mesh {
    /// Assemble a mesh.
    ///
    /// `vertices` is the flat float buffer laid out as `format` declares.
    /// `indices`, when absent, means implicit sequential indices
    /// `0..vertex_count`; when present, every entry must address a vertex
    /// inside the buffer (the caller's responsibility).
    ///
    /// When `compute_tangents` is true and the mesh is a triangle list with
    /// a three-component position and a two-component texture coordinate, a
    /// per-vertex tangent block is derived and appended to the layout.
    /// Otherwise the request is ignored and the mesh keeps its declared
    /// layout.
    ///
    /// # Errors
    ///
    /// Any [`MeshError`] from parsing `format` or validating the buffer
    /// length against it.
    ///
    /// # Example
    ///
    /// ```
    /// use rendermesh::mesh::{Mesh, PrimitiveTopology};
    ///
    /// let vertices = vec![
    ///     0.0, 0.0, 0.0, //
    ///     1.0, 0.0, 0.0, //
    ///     0.0, 1.0, 0.0, //
    /// ];
    /// let mesh = Mesh::new(vertices, None, "p3", PrimitiveTopology::TriangleList, false).unwrap();
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.primitive_count(), 1);
    /// ```
    pub fn new(
        vertices: Vec<f32>,
        indices: Option<Vec<u16>>,
        format: &str,
        topology: PrimitiveTopology,
        compute_tangents: bool,
    ) -> Result<Self, MeshError> {
        let mut vertex_format = VertexFormat::new(format, vertices.len())?;
        let mut vertices = vertices;

        let vertex_count = (vertices.len() / vertex_format.size() as usize) as u32;
        let index_count = indices.as_ref().map_or(vertex_count, |i| i.len() as u32);
        let primitive_count = primitive_count(topology, index_count);

        if compute_tangents {
            if let Some(extended) = tangent::compute_tangents(
                &vertex_format,
                &vertices,
                indices.as_deref(),
                vertex_count,
                index_count,
                topology,
            )? {
                vertices = extended.vertices;
                vertex_format = extended.format;
            }
        }

        Ok(Self {
            vertex_format,
            vertices,
            indices,
            topology,
            vertex_count,
            index_count,
            primitive_count,
        })
    }

    /// The resolved attribute layout.
    pub fn vertex_format(&self) -> &VertexFormat {
        &self.vertex_format
    }

    /// The flat vertex buffer.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }

    /// The vertex buffer as raw bytes, ready for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer, if the mesh is indexed.
    pub fn indices(&self) -> Option<&[u16]> {
        self.indices.as_deref()
    }

    /// The index buffer as raw bytes, ready for GPU upload.
    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(bytemuck::cast_slice)
    }

    /// The primitive topology.
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of indices drawn (the vertex count when non-indexed).
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Number of primitives the indices describe.
    pub fn primitive_count(&self) -> u32 {
        self.primitive_count
    }

    /// Whether this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("format", &self.vertex_format.format())
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.index_count)
            .field("primitive_count", &self.primitive_count)
            .finish()
    }
}
