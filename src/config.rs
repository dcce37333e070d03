//! Load behaviour configuration.
//!
//! Provides the explicit policy knobs for loading record files: what to
//! do with malformed lines, and what to do when the source file is
//! missing. Both are caller decisions, never hard-coded per use site.

use serde::{Deserialize, Serialize};

/// Error handling applied to malformed lines while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPolicy {
    /// Stop at the first malformed line and propagate its error.
    /// The caller's store is left unmodified.
    AbortOnFirstError,

    /// Skip malformed lines, collect their errors, and keep loading.
    SkipAndCollect,
}

/// Behaviour when the source file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingFilePolicy {
    /// A missing file is fatal.
    Fail,

    /// A missing file yields an empty load and leaves the store untouched.
    StartEmpty,
}

/// Options governing a single load operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub policy: LoadPolicy,
    pub missing_file: MissingFilePolicy,
}

impl LoadOptions {
    /// Strict loading: abort on the first malformed line, missing file fatal.
    /// Used for academic records, where a partial report must never be produced.
    pub fn strict() -> Self {
        Self {
            policy: LoadPolicy::AbortOnFirstError,
            missing_file: MissingFilePolicy::Fail,
        }
    }

    /// Lenient loading: skip and collect malformed lines, missing file
    /// starts empty. Used for the inventory log, where recovering the good
    /// records beats total failure.
    pub fn lenient() -> Self {
        Self {
            policy: LoadPolicy::SkipAndCollect,
            missing_file: MissingFilePolicy::StartEmpty,
        }
    }

    /// Replace the malformed-line policy
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the missing-file policy
    pub fn with_missing_file(mut self, missing_file: MissingFilePolicy) -> Self {
        self.missing_file = missing_file;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::strict()
    }
}
