//! Error types for snapshot loading.

/// Errors surfaced while parsing and validating a page snapshot.
/// Runtime absence conditions are not errors; controllers degrade to no-ops.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SnapshotError {
    /// The snapshot JSON did not match the expected schema.
    #[error("snapshot parse error: {reason}")]
    Parse { reason: String },

    /// Two elements declared the same fragment name.
    #[error("duplicate fragment name: {name}")]
    DuplicateFragment { name: String },

    /// The same node appeared twice in one target list.
    #[error("duplicate target node {node} in {list}")]
    DuplicateTarget { node: u32, list: &'static str },
}
