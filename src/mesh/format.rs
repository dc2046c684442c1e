//! Vertex format grammar and attribute layout building.
//!
//! A vertex format declaration is a compact string describing how attributes
//! are packed inside one flat float buffer:
//!
//! ```text
//! format  := block ('|' block)*
//! block   := attr+
//! attr    := roleCode size        e.g. "p3", "n3", "t2", "tg3"
//! ```
//!
//! Every block owns a disjoint region of the buffer, and the number of
//! attributes in a block selects its [`LayoutPolicy`]:
//!
//! - A block with a **single** attribute is laid out *planar*: a tightly
//!   packed region spanning all vertices, reported with stride 0.
//! - A block with **two or more** attributes is laid out *interleaved*:
//!   a fixed per-vertex record, with stride equal to the block's byte size.
//!
//! Blocks are concatenated in declaration order, each scaled by the vertex
//! count, so a single declaration can mix independently streamed regions
//! with interleaved records.
//!
//! # Example
//!
//! ```
//! use rendermesh::mesh::{AttributeRole, VertexFormat};
//!
//! // Positions and normals interleaved, texture coordinates planar.
//! // 8 floats per vertex over 2 vertices.
//! let format = VertexFormat::new("p3n3|t2", 16).unwrap();
//! assert_eq!(format.size(), 8);
//!
//! let normal = format.find(AttributeRole::Normal).unwrap();
//! assert_eq!((normal.offset, normal.stride), (12, 24));
//!
//! // The planar block starts after the interleaved region (2 * 24 bytes).
//! let uv = format.find(AttributeRole::TexCoord).unwrap();
//! assert_eq!((uv.offset, uv.stride), (48, 0));
//! ```

use super::error::MeshError;

/// Semantic role of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeRole {
    /// Vertex position.
    Position,
    /// Vertex normal.
    Normal,
    /// Texture coordinates.
    TexCoord,
    /// Vertex color.
    Color,
    /// Tangent.
    Tangent,
    /// Bitangent.
    BiTangent,
}

impl AttributeRole {
    /// Resolve a grammar role code.
    ///
    /// Returns `None` for codes outside the known set; the parser turns that
    /// into [`MeshError::FormatRole`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(Self::Position),
            "n" => Some(Self::Normal),
            "t" => Some(Self::TexCoord),
            "c" => Some(Self::Color),
            "tg" => Some(Self::Tangent),
            "b" => Some(Self::BiTangent),
            _ => None,
        }
    }

    /// The short code used in format declarations.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Position => "p",
            Self::Normal => "n",
            Self::TexCoord => "t",
            Self::Color => "c",
            Self::Tangent => "tg",
            Self::BiTangent => "b",
        }
    }
}

/// How one declaration block packs its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutPolicy {
    /// One attribute per block, tightly packed across all vertices.
    Planar,
    /// Several attributes per block, packed per vertex with a fixed stride.
    Interleaved,
}

impl LayoutPolicy {
    /// A single attribute packs planar; two or more interleave.
    fn for_attribute_count(count: usize) -> Self {
        if count > 1 {
            Self::Interleaved
        } else {
            Self::Planar
        }
    }
}

/// A single vertex attribute with its resolved byte layout.
///
/// `stride == 0` marks a planar attribute (tightly packed by its own size);
/// `stride > 0` marks an attribute interleaved with siblings in its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Semantic role of this attribute.
    pub role: AttributeRole,
    /// Component count in floats (1..=16).
    pub size: u32,
    /// Byte distance between consecutive vertices, or 0 when planar.
    pub stride: u32,
    /// Byte offset of the first element in the buffer.
    pub offset: u32,
}

impl VertexAttribute {
    /// The layout policy of the block this attribute was declared in.
    pub fn policy(&self) -> LayoutPolicy {
        if self.stride == 0 {
            LayoutPolicy::Planar
        } else {
            LayoutPolicy::Interleaved
        }
    }
}

/// One parsed declaration block, before layout resolution.
struct ParsedBlock {
    attrs: Vec<(AttributeRole, u32)>,
    float_count: u32,
}

/// Parse a single block of the declaration.
///
/// Leading ASCII whitespace before each attribute is tolerated. Within one
/// attribute the checks run in order: token shape, size range, role code.
fn parse_block(block: &str, format: &str) -> Result<ParsedBlock, MeshError> {
    let mut rest = block;
    let mut attrs = Vec::new();
    let mut float_count = 0u32;

    while !rest.is_empty() {
        let body = rest.trim_start();
        let code_end = body
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(body.len());
        let (code, after_code) = body.split_at(code_end);
        let digit_end = after_code
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_code.len());
        let (digits, tail) = after_code.split_at(digit_end);

        if code.is_empty() || digits.is_empty() {
            return Err(MeshError::FormatSyntax {
                format: format.to_owned(),
                rest: rest.to_owned(),
            });
        }

        // Oversized literals saturate; anything above 16 is rejected anyway.
        let size = digits.parse::<u32>().unwrap_or(u32::MAX);
        if !(1..=16).contains(&size) {
            return Err(MeshError::FormatSize {
                code: code.to_owned(),
                size,
            });
        }
        let Some(role) = AttributeRole::from_code(code) else {
            return Err(MeshError::FormatRole {
                code: code.to_owned(),
                size,
            });
        };

        float_count += size;
        attrs.push((role, size));
        rest = tail;
    }

    Ok(ParsedBlock { attrs, float_count })
}

fn parse_blocks(format: &str) -> Result<Vec<ParsedBlock>, MeshError> {
    format
        .split('|')
        .map(|block| parse_block(block, format))
        .collect()
}

/// The resolved layout of vertex attributes inside one flat float buffer.
///
/// Built once from a declaration string and a buffer length; immutable
/// afterward. Renderers bind GPU attribute pointers from the byte-exact
/// stride/offset table in [`VertexFormat::attributes`].
#[derive(Debug, Clone, PartialEq)]
pub struct VertexFormat {
    attributes: Vec<VertexAttribute>,
    size: u32,
    format: String,
}

impl VertexFormat {
    /// Parse `format` and lay out its attributes over a float buffer of
    /// `buffer_len` elements.
    ///
    /// The buffer length must be a multiple of the declared per-vertex
    /// float count; the resulting vertex count scales the planar block
    /// regions.
    ///
    /// # Errors
    ///
    /// [`MeshError::FormatSyntax`], [`MeshError::FormatSize`], or
    /// [`MeshError::FormatRole`] when the declaration does not parse, and
    /// [`MeshError::DataLength`] when the buffer length does not divide
    /// evenly. No partially built layout is ever observable.
    pub fn new(format: &str, buffer_len: usize) -> Result<Self, MeshError> {
        let blocks = parse_blocks(format)?;
        let size: u32 = blocks.iter().map(|b| b.float_count).sum();
        if size == 0 || buffer_len % size as usize != 0 {
            return Err(MeshError::DataLength {
                buffer_len,
                vertex_size: size,
            });
        }
        let vertex_count = (buffer_len / size as usize) as u32;

        let mut attributes = Vec::new();
        let mut block_offset = 0u32;
        for block in &blocks {
            let stride = match LayoutPolicy::for_attribute_count(block.attrs.len()) {
                LayoutPolicy::Interleaved => block.float_count * 4,
                LayoutPolicy::Planar => 0,
            };
            let mut offset = block_offset;
            for &(role, attr_size) in &block.attrs {
                attributes.push(VertexAttribute {
                    role,
                    size: attr_size,
                    stride,
                    offset,
                });
                offset += attr_size * 4;
            }
            block_offset += block.float_count * vertex_count * 4;
        }

        Ok(Self {
            attributes,
            size,
            format: format.to_owned(),
        })
    }

    /// All attributes across all blocks, in declaration order.
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Total floats per vertex across all blocks.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The declaration string this format was built from.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The first attribute with the given role, if any.
    pub fn find(&self, role: AttributeRole) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_layout() {
        // 4 vertices, three single-attribute blocks.
        let format = VertexFormat::new("p3|n3|t2", 32).unwrap();
        assert_eq!(format.size(), 8);
        assert_eq!(format.attributes().len(), 3);

        let pos = format.find(AttributeRole::Position).unwrap();
        assert_eq!((pos.offset, pos.stride, pos.size), (0, 0, 3));
        assert_eq!(pos.policy(), LayoutPolicy::Planar);

        let normal = format.find(AttributeRole::Normal).unwrap();
        assert_eq!((normal.offset, normal.stride, normal.size), (48, 0, 3));

        let uv = format.find(AttributeRole::TexCoord).unwrap();
        assert_eq!((uv.offset, uv.stride, uv.size), (96, 0, 2));
    }

    #[test]
    fn test_interleaved_layout() {
        let format = VertexFormat::new("p3n3", 18).unwrap();
        assert_eq!(format.size(), 6);

        let pos = format.find(AttributeRole::Position).unwrap();
        assert_eq!((pos.offset, pos.stride), (0, 24));
        assert_eq!(pos.policy(), LayoutPolicy::Interleaved);

        let normal = format.find(AttributeRole::Normal).unwrap();
        assert_eq!((normal.offset, normal.stride), (12, 24));
    }

    #[test]
    fn test_mixed_layout() {
        // 2 vertices: interleaved pos+normal block, then a planar uv block.
        let format = VertexFormat::new("p3n3|t2", 16).unwrap();
        let pos = format.find(AttributeRole::Position).unwrap();
        assert_eq!((pos.offset, pos.stride), (0, 24));
        let uv = format.find(AttributeRole::TexCoord).unwrap();
        assert_eq!((uv.offset, uv.stride), (48, 0));
    }

    #[test]
    fn test_whitespace_between_attributes() {
        let format = VertexFormat::new("p3 n3", 12).unwrap();
        assert_eq!(format.size(), 6);
        assert_eq!(
            format.find(AttributeRole::Normal).unwrap().stride,
            24,
            "whitespace does not split the block"
        );
    }

    #[test]
    fn test_size_out_of_range() {
        assert_eq!(
            VertexFormat::new("p3n0", 12),
            Err(MeshError::FormatSize {
                code: "n".into(),
                size: 0
            })
        );
        assert_eq!(
            VertexFormat::new("p17", 17),
            Err(MeshError::FormatSize {
                code: "p".into(),
                size: 17
            })
        );
    }

    #[test]
    fn test_size_checked_before_role() {
        // An unknown role with a bad size reports the size problem.
        assert_eq!(
            VertexFormat::new("x0", 12),
            Err(MeshError::FormatSize {
                code: "x".into(),
                size: 0
            })
        );
    }

    #[test]
    fn test_unknown_role() {
        assert_eq!(
            VertexFormat::new("p3|q2", 10),
            Err(MeshError::FormatRole {
                code: "q".into(),
                size: 2
            })
        );
    }

    #[test]
    fn test_syntax_errors() {
        // Digits without a role code.
        assert_eq!(
            VertexFormat::new("3p", 3),
            Err(MeshError::FormatSyntax {
                format: "3p".into(),
                rest: "3p".into()
            })
        );
        // Role code without a size.
        assert_eq!(
            VertexFormat::new("p3n", 6),
            Err(MeshError::FormatSyntax {
                format: "p3n".into(),
                rest: "n".into()
            })
        );
    }

    #[test]
    fn test_data_length_mismatch() {
        assert_eq!(
            VertexFormat::new("p3", 7),
            Err(MeshError::DataLength {
                buffer_len: 7,
                vertex_size: 3
            })
        );
    }

    #[test]
    fn test_empty_format_rejected() {
        // An empty declaration has zero floats per vertex and can never
        // divide a buffer.
        assert_eq!(
            VertexFormat::new("", 0),
            Err(MeshError::DataLength {
                buffer_len: 0,
                vertex_size: 0
            })
        );
    }

    #[test]
    fn test_attribute_sizes_sum_to_vertex_size() {
        for decl in ["p3", "p3n3t2", "p3|n3|t2", "p3n3|t2|c4", "tg3b3"] {
            let format = VertexFormat::new(decl, decl_size(decl) * 6).unwrap();
            let sum: u32 = format.attributes().iter().map(|a| a.size).sum();
            assert_eq!(sum, format.size(), "{decl}");
        }
    }

    /// Floats per vertex of a known-valid declaration, for test sizing.
    fn decl_size(decl: &str) -> usize {
        decl.chars().filter_map(|c| c.to_digit(10)).sum::<u32>() as usize
    }

    #[test]
    fn test_role_codes_round_trip() {
        for role in [
            AttributeRole::Position,
            AttributeRole::Normal,
            AttributeRole::TexCoord,
            AttributeRole::Color,
            AttributeRole::Tangent,
            AttributeRole::BiTangent,
        ] {
            assert_eq!(AttributeRole::from_code(role.code()), Some(role));
        }
        assert_eq!(AttributeRole::from_code("q"), None);
        assert_eq!(AttributeRole::from_code(""), None);
    }
}
