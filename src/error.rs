use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid scene document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene document contains no nodes")]
    EmptyScene,

    #[error("Flat scene document has no root node (every node names a parent)")]
    NoRoot,

    #[error("Flat scene document has more than one root node: {first} and {second}")]
    MultipleRoots { first: String, second: String },

    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("Node {node} references missing parent {parent}")]
    MissingParent { node: String, parent: String },

    #[error("Node {0} is part of a parent cycle")]
    ParentCycle(String),

    #[error("Node {0} not found in scene")]
    NodeNotFound(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
