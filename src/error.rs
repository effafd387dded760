use thiserror::Error;

/// Errors reported by [`MindMap`](crate::MindMap) mutations.
///
/// Every variant is detected before any state changes, so a failed
/// operation leaves the map exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node '{0}' is already part of the map")]
    DuplicateNode(String),

    #[error("parent '{0}' is not part of the map")]
    UnknownParent(String),

    #[error("node '{0}' is not part of the map")]
    UnknownNode(String),

    #[error("connection target '{0}' is not part of the map")]
    UnknownConnection(String),

    #[error("connection target '{0}' is listed more than once")]
    DuplicateConnection(String),

    #[error("field '{0}' is structural and cannot be set through a patch")]
    StructuralField(String),

    #[error("patch is not valid JSON: {0}")]
    MalformedPatch(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
