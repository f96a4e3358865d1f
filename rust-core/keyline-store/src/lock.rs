// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Keyline Record Store - Exclusive file lock
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wraps the backing file handle together with a non-blocking exclusive
// advisory lock (flock(LOCK_EX | LOCK_NB) on unix). The lock is taken once
// when the guard is built and released exactly once, either explicitly via
// `release` or when the guard is dropped.

use std::fs::File;
use std::io;
use std::path::Path;

use fs2::FileExt;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Owns a file handle and the exclusive lock held on it.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    released: bool,
}

impl FileLock {
    /// Take an exclusive, non-blocking lock on `file`.
    ///
    /// Fails immediately with [`StoreError::LockUnavailable`] when another
    /// open handle (in this or any other process) holds the lock. `path` is
    /// only used for the error report.
    pub fn acquire(file: File, path: &Path) -> StoreResult<Self> {
        if let Err(e) = FileExt::try_lock_exclusive(&file) {
            if e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
                || e.kind() == io::ErrorKind::WouldBlock
            {
                return Err(StoreError::LockUnavailable {
                    path: path.to_path_buf(),
                    code: e.raw_os_error(),
                    message: e.to_string(),
                });
            }
            return Err(StoreError::Io(e));
        }

        debug!(path = %path.display(), "Acquired exclusive lock");
        Ok(Self {
            file,
            released: false,
        })
    }

    /// The locked file.
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Release the lock. Subsequent calls are no-ops.
    pub fn release(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        FileExt::unlock(&self.file)
    }

    /// Whether `release` has already run.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Failed to unlock record store file: {}", e);
        }
    }
}
