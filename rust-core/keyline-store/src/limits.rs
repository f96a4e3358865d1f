// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Keyline Record Store - Limits and configuration
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::PathBuf;

/// Maximum key length in characters.
pub const MAX_KEY_LENGTH: usize = 32;

/// Maximum size of a caller-supplied serialized value in bytes (16 KiB).
pub const MAX_VALUE_SIZE: usize = 16 * 1024;

/// Maximum size of the backing file in bytes (1 GiB).
pub const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// File name of the backing file inside the store directory.
pub const DEFAULT_FILE_NAME: &str = "data";

/// Size limits enforced by a [`crate::RecordStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
    /// Keys must be between 1 and this many characters long.
    pub max_key_length: usize,
    /// Serialized values must be at most this many bytes.
    pub max_value_size: usize,
    /// An insert that grows the file past this many bytes is rolled back.
    pub max_file_size: u64,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_key_length: MAX_KEY_LENGTH,
            max_value_size: MAX_VALUE_SIZE,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

/// Where a store keeps its backing file and which limits it enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the backing file. `None` means the user's home
    /// directory.
    pub dir: Option<PathBuf>,
    /// Name of the backing file inside `dir`.
    pub file_name: String,
    /// Size limits.
    pub limits: StoreLimits,
}

impl StoreConfig {
    /// Config rooted at `dir` with default limits.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Replace the limits.
    pub fn with_limits(mut self, limits: StoreLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            limits: StoreLimits::default(),
        }
    }
}
