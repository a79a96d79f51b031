//! Per-matrix configuration
//!
//! Controls how a matrix treats its value index. Attach with
//! [`Matrix::with_config`](crate::Matrix::with_config).

/// What happens to an existing index when the matrix is mutated in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaleIndexPolicy {
    /// Leave the index untouched; it may no longer match the data and
    /// rebuilding is the caller's job
    #[default]
    Keep,
    /// Discard the index on any in-place mutation so searches fall back to
    /// a full scan until it is rebuilt
    Drop,
}

/// Configuration for a matrix and the results of its pure operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixConfig {
    /// Index handling on in-place mutation
    pub stale_index: StaleIndexPolicy,
    /// Build the index as soon as the config is attached
    pub eager_index: bool,
}

impl MatrixConfig {
    /// Set the stale index policy
    pub fn with_stale_index(mut self, policy: StaleIndexPolicy) -> Self {
        self.stale_index = policy;
        self
    }

    /// Build the index when the config is attached
    pub fn with_eager_index(mut self, eager: bool) -> Self {
        self.eager_index = eager;
        self
    }

    /// Whether in-place mutation discards the index
    pub fn drops_stale_index(&self) -> bool {
        self.stale_index == StaleIndexPolicy::Drop
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            stale_index: StaleIndexPolicy::Keep,
            eager_index: false,
        }
    }
}
