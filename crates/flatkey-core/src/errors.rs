use thiserror::Error;

/// Errors produced by the bounded flattening entry point.
///
/// The unguarded engine is total for acyclic input and never returns
/// these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// Traversal descended past the caller-supplied depth limit.
    #[error("depth limit {limit} exceeded at path \"{path}\"")]
    DepthLimitExceeded {
        /// The limit passed to `flatten_bounded`.
        limit: usize,
        /// Accumulated path at which traversal stopped.
        path: String,
    },
}
