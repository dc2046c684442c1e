//! Error types for vertex format parsing and mesh construction.

/// Errors raised while parsing a vertex format declaration or while
/// validating vertex data against it.
///
/// The three `Format*` variants are grammar failures; [`MeshError::DataLength`]
/// is a post-parse validation failure of the vertex buffer itself. All carry
/// the offending input so callers can test for the exact failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The declaration string does not match the grammar.
    FormatSyntax {
        /// The full declaration string.
        format: String,
        /// The remainder of the declaration at which matching failed.
        rest: String,
    },
    /// An attribute declared a component count outside `1..=16`.
    FormatSize {
        /// The attribute's role code as written.
        code: String,
        /// The declared size.
        size: u32,
    },
    /// An attribute used a role code outside the known set.
    FormatRole {
        /// The unrecognized role code.
        code: String,
        /// The declared size.
        size: u32,
    },
    /// The vertex buffer length is not a multiple of the declared
    /// per-vertex float count, or the declaration carries no floats at all.
    DataLength {
        /// Length of the vertex buffer in floats.
        buffer_len: usize,
        /// Declared floats per vertex.
        vertex_size: u32,
    },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatSyntax { format, rest } => {
                write!(f, "vertex format {format:?} is invalid at {rest:?}")
            }
            Self::FormatSize { code, size } => {
                write!(f, "vertex format attribute {code}{size} has invalid size (expected 1..=16)")
            }
            Self::FormatRole { code, size } => {
                write!(f, "vertex format attribute {code}{size} has unknown role")
            }
            Self::DataLength { buffer_len, vertex_size } => {
                write!(
                    f,
                    "vertex buffer length {buffer_len} is not a multiple of the vertex size {vertex_size}"
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}
