use std::collections::BTreeSet;

/// Filter configuration for a single flatten operation.
///
/// Both sets hold accumulated path strings. They are set-like unions:
/// duplicates collapse and the order in which paths are added never
/// affects the result. A path present in both sets is excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    includes: BTreeSet<String>,
    excludes: BTreeSet<String>,
}

impl FlattenOptions {
    /// Creates an empty configuration that keeps every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds paths to the include set.
    ///
    /// Once the include set is non-empty, only exactly-matching paths
    /// survive at the depth where they occur; the check runs against the
    /// accumulated path at every recursion depth, so dotted paths are
    /// honored verbatim when supplied.
    pub fn include_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds paths to the exclude set. Excluding a container path prunes
    /// its entire subtree.
    pub fn exclude_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Decides whether the subtree at `path` is pruned.
    ///
    /// The empty root path is never skipped. Excludes win over includes
    /// when the same path appears in both sets.
    pub fn should_skip(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        (!self.includes.is_empty() && !self.includes.contains(path))
            || self.excludes.contains(path)
    }
}
