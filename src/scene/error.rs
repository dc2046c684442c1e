//! Error types for scene loading.

use crate::mesh::MeshError;

/// Errors that can occur while loading a scene document.
#[derive(Debug)]
pub enum SceneError {
    /// The document is not valid JSON or does not match the schema.
    Parse(serde_json::Error),
    /// A mesh could not be constructed from an object's data.
    Mesh(MeshError),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "scene document parse error: {e}"),
            Self::Mesh(e) => write!(f, "mesh construction error: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Mesh(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<MeshError> for SceneError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}
