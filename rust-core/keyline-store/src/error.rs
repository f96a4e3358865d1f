// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Keyline Record Store - Error types
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Defines every outcome other than success that a record store operation can
// produce. Validation and state errors (bad key, oversized value, duplicate,
// missing key, capacity) are ordinary results the caller branches on; lock
// contention, corruption and I/O failures are fatal for the store instance.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key is empty or longer than the configured maximum.
    #[error("invalid key {key:?}: length {length} is outside 1..={max}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Length of the key in characters.
        length: usize,
        /// Maximum allowed key length in characters.
        max: usize,
    },

    /// The serialized value is larger than the configured maximum.
    #[error("value too large: {size} bytes (max: {max})")]
    ValueTooLarge {
        /// Byte length of the caller-supplied serialized value.
        size: usize,
        /// Maximum allowed serialized value size in bytes.
        max: usize,
    },

    /// The value is not valid JSON, or does not convert to or from the
    /// requested Rust type.
    #[error("invalid value for key {key:?}: {source}")]
    InvalidValue {
        /// The key the value was supplied for.
        key: String,
        /// The underlying serde_json failure.
        #[source]
        source: serde_json::Error,
    },

    /// A record with this key already exists.
    #[error("data with key {0} is already available")]
    DuplicateKey(String),

    /// The insert pushed the backing file over its size limit and was
    /// rolled back.
    #[error("record {key} not inserted: file size {size} bytes exceeds {max}")]
    CapacityExceeded {
        /// The key of the rolled-back record.
        key: String,
        /// File size observed right after the append.
        size: u64,
        /// Maximum allowed file size in bytes.
        max: u64,
    },

    /// No record with this key exists.
    #[error("no record found with key {0}")]
    NotFound(String),

    /// Another process holds the exclusive lock on the backing file.
    #[error(
        "file {} is being used by another process (error {}: {message})",
        .path.display(),
        os_code(.code)
    )]
    LockUnavailable {
        /// The backing file that could not be locked.
        path: PathBuf,
        /// Raw OS error number, when the platform reports one.
        code: Option<i32>,
        /// OS error message.
        message: String,
    },

    /// A line in the backing file does not decode to a single key/value
    /// pair.
    #[error("corrupt store at line {line}: {reason}")]
    CorruptStore {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// No directory was given and the home directory could not be resolved.
    #[error("no directory given and the home directory could not be determined")]
    HomeDirUnavailable,

    /// An I/O error occurred while reading or writing the backing file.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns `true` when the store instance cannot be used any further
    /// (or could not be constructed at all).
    ///
    /// Validation, duplicate, capacity and not-found outcomes leave the
    /// store fully usable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::LockUnavailable { .. }
                | StoreError::CorruptStore { .. }
                | StoreError::HomeDirUnavailable
                | StoreError::Io(_)
        )
    }
}

fn os_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Convenience type alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
