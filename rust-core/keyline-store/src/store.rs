// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Keyline Record Store - The store
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `RecordStore` owns the backing file and its exclusive lock for its whole
// lifetime. Every operation is a linear scan of the file from offset 0:
// `create` scans for the key and appends, `read` scans until the first match,
// `delete` loads every line and rewrites the file without the matching one.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::limits::{StoreConfig, StoreLimits};
use crate::lock::FileLock;
use crate::record::Record;

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Successful `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// Key of the inserted record.
    pub key: String,
}

impl std::fmt::Display for Created {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record with key {} inserted into file successfully", self.key)
    }
}

/// Successful `delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    /// Key of the removed record.
    pub key: String,
}

impl std::fmt::Display for Deleted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record with key {} successfully deleted", self.key)
    }
}

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// A single-file key/value record store.
///
/// At most one `RecordStore` can hold a given backing file at a time; a
/// second `open` of the same file, from this process or another, fails with
/// [`StoreError::LockUnavailable`]. All operations take `&mut self` because
/// they move the shared file cursor.
///
/// Call [`RecordStore::close`] to tear down and observe I/O errors. Dropping
/// the store performs the same teardown best-effort.
#[derive(Debug)]
pub struct RecordStore {
    /// Absolute path of the backing file.
    path: PathBuf,

    /// The open backing file and the exclusive lock held on it.
    lock: FileLock,

    /// Limits enforced on `create`.
    limits: StoreLimits,

    /// Set once teardown has run.
    closed: bool,
}

impl RecordStore {
    /// Open the store whose backing file is `dir/data`, or `<home>/data`
    /// when `dir` is `None`.
    pub fn open(dir: Option<&Path>) -> StoreResult<Self> {
        let config = match dir {
            Some(dir) => StoreConfig::in_dir(dir),
            None => StoreConfig::default(),
        };
        Self::open_with_config(config)
    }

    /// Open a store from an explicit configuration.
    ///
    /// The directory is created if it does not exist. An existing backing
    /// file is never truncated.
    pub fn open_with_config(config: StoreConfig) -> StoreResult<Self> {
        let dir = match config.dir {
            Some(dir) => dir,
            None => {
                let home = dirs::home_dir().ok_or(StoreError::HomeDirUnavailable)?;
                info!(
                    dir = %home.display(),
                    "No directory given, creating record store in home directory"
                );
                home
            }
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            info!(dir = %dir.display(), "Created record store directory");
        }

        let path = std::path::absolute(dir.join(&config.file_name))?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        let lock = FileLock::acquire(file, &path)?;

        info!(path = %path.display(), "Opened record store");

        Ok(Self {
            path,
            lock,
            limits: config.limits,
            closed: false,
        })
    }

    /// Insert a new record.
    ///
    /// `serialized_value` is the JSON text of the value; its byte length is
    /// what the value size limit applies to. The append is synced to disk
    /// before this returns. If the file then exceeds the size limit the
    /// record is removed again and [`StoreError::CapacityExceeded`] is
    /// returned.
    pub fn create(&mut self, key: &str, serialized_value: &str) -> StoreResult<Created> {
        self.validate_key(key)?;
        if serialized_value.len() > self.limits.max_value_size {
            return Err(StoreError::ValueTooLarge {
                size: serialized_value.len(),
                max: self.limits.max_value_size,
            });
        }

        if self.find(key)?.is_some() {
            return Err(StoreError::DuplicateKey(key.to_string()));
        }

        let value: Value =
            serde_json::from_str(serialized_value).map_err(|source| StoreError::InvalidValue {
                key: key.to_string(),
                source,
            })?;
        let line = Record::new(key, value).encode();

        let size = self.append_line(&line)?;
        if size > self.limits.max_file_size {
            warn!(
                key,
                size,
                max = self.limits.max_file_size,
                "File size limit exceeded, rolling back insert"
            );
            self.delete(key)?;
            return Err(StoreError::CapacityExceeded {
                key: key.to_string(),
                size,
                max: self.limits.max_file_size,
            });
        }

        debug!(key, bytes = line.len(), "Inserted record");
        Ok(Created {
            key: key.to_string(),
        })
    }

    /// Serialize `value` to JSON and insert it under `key`.
    pub fn create_value<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> StoreResult<Created> {
        let serialized = serde_json::to_string(value).map_err(|source| StoreError::InvalidValue {
            key: key.to_string(),
            source,
        })?;
        self.create(key, &serialized)
    }

    /// Return the value stored under `key` as compact JSON text.
    pub fn read(&mut self, key: &str) -> StoreResult<String> {
        match self.find(key)? {
            Some(record) => {
                debug!(key, "Read record");
                Ok(record.value.to_string())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Read the value stored under `key` and deserialize it into `T`.
    pub fn read_value<T: DeserializeOwned>(&mut self, key: &str) -> StoreResult<T> {
        let record = self
            .find(key)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        serde_json::from_value(record.value).map_err(|source| StoreError::InvalidValue {
            key: key.to_string(),
            source,
        })
    }

    /// Whether a record with `key` exists.
    pub fn contains(&mut self, key: &str) -> StoreResult<bool> {
        Ok(self.find(key)?.is_some())
    }

    /// Remove the record stored under `key`.
    ///
    /// The file is rewritten from the start with every other line and
    /// truncated to its new length. When no record matches, the file is left
    /// untouched and [`StoreError::NotFound`] is returned.
    pub fn delete(&mut self, key: &str) -> StoreResult<Deleted> {
        let lines = self.load_lines()?;

        let mut kept = String::new();
        let mut found = false;
        for (line_number, line) in lines {
            let record = Record::decode(&line, line_number)?;
            if record.key == key {
                found = true;
            } else {
                kept.push_str(&line);
                kept.push('\n');
            }
        }

        if !found {
            return Err(StoreError::NotFound(key.to_string()));
        }

        let mut file = self.lock.file();
        file.seek(SeekFrom::Start(0))?;
        file.write_all(kept.as_bytes())?;
        file.set_len(kept.len() as u64)?;
        file.flush()?;
        file.sync_all()?;

        debug!(key, remaining_bytes = kept.len(), "Deleted record");
        Ok(Deleted {
            key: key.to_string(),
        })
    }

    /// Absolute path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Limits this store enforces.
    pub fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    /// Flush, sync, unlock and close the backing file.
    pub fn close(mut self) -> StoreResult<()> {
        self.teardown()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn validate_key(&self, key: &str) -> StoreResult<()> {
        let length = key.chars().count();
        if length == 0 || length > self.limits.max_key_length {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
                length,
                max: self.limits.max_key_length,
            });
        }
        Ok(())
    }

    /// Append one encoded line and sync it, returning the new file size.
    ///
    /// A missing newline at the end of the file is written first so the
    /// record starts on its own line. If any write or the sync fails, the
    /// file is cut back to its previous length.
    fn append_line(&mut self, line: &str) -> StoreResult<u64> {
        let mut file = self.lock.file();
        let original_len = file.seek(SeekFrom::End(0))?;

        let mut bytes = Vec::with_capacity(line.len() + 1);
        if original_len > 0 && last_byte(file)? != b'\n' {
            debug!(path = %self.path.display(), "Terminating unfinished last line");
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(line.as_bytes());

        truncate_on_error(file, original_len, |mut file| {
            file.write_all(&bytes)?;
            file.flush()?;
            file.sync_all()
        })?;

        Ok(file.metadata()?.len())
    }

    /// Scan from the start of the file for the first record with `key`.
    fn find(&mut self, key: &str) -> StoreResult<Option<Record>> {
        let mut file = self.lock.file();
        file.seek(SeekFrom::Start(0))?;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| corrupt_or_io(e, line_number))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = Record::decode(&line, line_number)?;
            if record.key == key {
                return Ok(Some(record));
            }
        }

        Ok(None)
    }

    /// Read every non-blank line with its 1-based line number.
    fn load_lines(&mut self) -> StoreResult<Vec<(usize, String)>> {
        let mut file = self.lock.file();
        file.seek(SeekFrom::Start(0))?;

        let mut lines = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| corrupt_or_io(e, line_number))?;
            if !line.trim().is_empty() {
                lines.push((line_number, line));
            }
        }
        Ok(lines)
    }

    fn teardown(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let mut file = self.lock.file();
        let synced = file.flush().and_then(|()| file.sync_all());
        // Unlock even when the sync failed.
        let released = self.lock.release();

        info!(path = %self.path.display(), "Closed record store");
        synced.and(released)
    }
}

impl Drop for RecordStore {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            warn!(path = %self.path.display(), "Failed to close record store: {}", e);
        }
    }
}

/// Read the final byte of a non-empty file, leaving the cursor at the end.
fn last_byte(mut file: &File) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Run `write`; on failure cut the file back to `len` so no partial line
/// survives, then return the write error.
fn truncate_on_error(
    file: &File,
    len: u64,
    write: impl FnOnce(&File) -> io::Result<()>,
) -> io::Result<()> {
    let result = write(file);
    if result.is_err() {
        if let Err(e) = file.set_len(len).and_then(|()| file.sync_all()) {
            warn!(len, "Failed to truncate after a failed append: {}", e);
        }
    }
    result
}

/// Non-UTF-8 content is corruption; anything else is a plain I/O failure.
fn corrupt_or_io(e: io::Error, line_number: usize) -> StoreError {
    if e.kind() == io::ErrorKind::InvalidData {
        StoreError::CorruptStore {
            line: line_number,
            reason: e.to_string(),
        }
    } else {
        StoreError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> RecordStore {
        RecordStore::open(Some(dir.path())).unwrap()
    }

    fn person() -> String {
        json!({"First Name": "Mahendra", "Last Name": "Gaur"}).to_string()
    }

    #[test]
    fn test_open_creates_backing_file() {
        let dir = TempDir::new().unwrap();
        let store = open_in(&dir);
        assert_eq!(store.path(), dir.path().join("data"));
        assert!(store.path().is_file());
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = RecordStore::open(Some(&nested)).unwrap();
        assert!(store.path().starts_with(&nested));
        assert!(store.path().is_file());
    }

    #[test]
    fn test_open_does_not_truncate() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_in(&dir);
            store.create("kept", "1").unwrap();
            store.close().unwrap();
        }
        let mut store = open_in(&dir);
        assert_eq!(store.read("kept").unwrap(), "1");
    }

    #[test]
    fn test_custom_file_name() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig {
            file_name: "records.jsonl".to_string(),
            ..StoreConfig::in_dir(dir.path())
        };
        let store = RecordStore::open_with_config(config).unwrap();
        assert_eq!(store.path(), dir.path().join("records.jsonl"));
    }

    #[test]
    fn test_create_read_delete_scenario() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);

        let created = store.create("test_key", &person()).unwrap();
        assert_eq!(created.key, "test_key");
        assert!(created.to_string().contains("test_key"));

        assert_eq!(
            store.read("test_key").unwrap(),
            "{\"First Name\":\"Mahendra\",\"Last Name\":\"Gaur\"}"
        );
        assert!(matches!(store.read("123"), Err(StoreError::NotFound(k)) if k == "123"));

        let deleted = store.delete("test_key").unwrap();
        assert!(deleted.to_string().contains("test_key"));
        assert!(matches!(
            store.delete("test_key"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_on_disk_format() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("a", "{\"x\": 1}").unwrap();
        store.create("b", "[true, null]").unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\"a\":{\"x\":1}}\n{\"b\":[true,null]}\n");
    }

    #[test]
    fn test_duplicate_key_rejected_without_write() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("test_key", &person()).unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = store.create("test_key", "\"other\"").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(ref k) if k == "test_key"));
        assert_eq!(
            err.to_string(),
            "data with key test_key is already available"
        );
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_key_length_boundaries() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);

        assert!(store.create(&"k".repeat(32), "1").is_ok());
        assert!(matches!(
            store.create(&"k".repeat(33), "1"),
            Err(StoreError::InvalidKey { length: 33, max: 32, .. })
        ));
        assert!(matches!(
            store.create("", "1"),
            Err(StoreError::InvalidKey { length: 0, .. })
        ));
    }

    #[test]
    fn test_key_length_counts_characters() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        // 32 characters, 64 bytes.
        let key = "é".repeat(32);
        assert!(store.create(&key, "1").is_ok());
        assert_eq!(store.read(&key).unwrap(), "1");
    }

    #[test]
    fn test_value_size_boundaries() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);

        // A JSON string literal: two quotes plus the body.
        let exact = format!("\"{}\"", "v".repeat(16384 - 2));
        assert_eq!(exact.len(), 16384);
        assert!(store.create("exact", &exact).is_ok());

        let over = format!("\"{}\"", "v".repeat(16385 - 2));
        assert!(matches!(
            store.create("over", &over),
            Err(StoreError::ValueTooLarge { size: 16385, max: 16384 })
        ));
        assert!(!store.contains("over").unwrap());
    }

    #[test]
    fn test_validation_errors_perform_no_io() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        fs::write(store.path(), "not json\n").unwrap();

        // A scan would hit the corrupt line; validation must fail first.
        assert!(matches!(
            store.create("", "1"),
            Err(StoreError::InvalidKey { .. })
        ));
        let big = "1".repeat(16385);
        assert!(matches!(
            store.create("k", &big),
            Err(StoreError::ValueTooLarge { .. })
        ));
    }

    #[test]
    fn test_invalid_json_value_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        let err = store.create("k", "{not json").unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { ref key, .. } if key == "k"));
        assert!(!err.is_fatal());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    }

    #[test]
    fn test_capacity_exceeded_rolls_back() {
        let dir = TempDir::new().unwrap();
        let limits = StoreLimits {
            max_file_size: 40,
            ..StoreLimits::default()
        };
        let config = StoreConfig::in_dir(dir.path()).with_limits(limits);
        let mut store = RecordStore::open_with_config(config).unwrap();

        // {"a":"0123456789"}\n is 19 bytes.
        store.create("a", "\"0123456789\"").unwrap();
        store.create("b", "\"0123456789\"").unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.create("c", "\"0123456789\"").unwrap_err();
        match err {
            StoreError::CapacityExceeded { key, size, max } => {
                assert_eq!(key, "c");
                assert_eq!(size, 57);
                assert_eq!(max, 40);
            }
            other => panic!("expected CapacityExceeded, got {other}"),
        }

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
        assert!(matches!(store.read("c"), Err(StoreError::NotFound(_))));
        assert_eq!(store.read("a").unwrap(), "\"0123456789\"");
    }

    #[test]
    fn test_delete_keeps_other_records_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("one", "1").unwrap();
        store.create("two", "{\"nested\": [2]}").unwrap();
        store.create("three", "3").unwrap();

        store.delete("two").unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\"one\":1}\n{\"three\":3}\n");
        assert_eq!(store.read("three").unwrap(), "3");
    }

    #[test]
    fn test_delete_then_create_appends_at_end() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("long_key_for_a_longer_line", "\"padding padding\"").unwrap();
        store.create("b", "2").unwrap();
        store.delete("long_key_for_a_longer_line").unwrap();
        store.create("c", "3").unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\"b\":2}\n{\"c\":3}\n");
    }

    #[test]
    fn test_delete_missing_key_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("present", "true").unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(matches!(
            store.delete("absent"),
            Err(StoreError::NotFound(ref k)) if k == "absent"
        ));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("good", "1").unwrap();
        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        file.write_all(b"{\"broken\": \n").unwrap();

        let err = store.read("missing").unwrap_err();
        assert!(matches!(err, StoreError::CorruptStore { line: 2, .. }));
        assert!(err.is_fatal());

        // Records before the corrupt line are still reachable.
        assert_eq!(store.read("good").unwrap(), "1");
        assert!(matches!(
            store.delete("good"),
            Err(StoreError::CorruptStore { line: 2, .. })
        ));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        fs::write(store.path(), "\n{\"a\":1}\n\n{\"b\":2}\n").unwrap();

        assert_eq!(store.read("b").unwrap(), "2");
        store.delete("a").unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{\"b\":2}\n");
    }

    #[test]
    fn test_second_open_fails_while_first_is_live() {
        let dir = TempDir::new().unwrap();
        let first = open_in(&dir);

        let err = RecordStore::open(Some(dir.path())).unwrap_err();
        assert!(matches!(err, StoreError::LockUnavailable { .. }));
        assert!(err.is_fatal());

        first.close().unwrap();
        assert!(RecordStore::open(Some(dir.path())).is_ok());
    }

    #[test]
    fn test_drop_releases_lock() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_in(&dir);
            store.create("k", "1").unwrap();
        }
        let mut store = open_in(&dir);
        assert_eq!(store.read("k").unwrap(), "1");
    }

    #[test]
    fn test_typed_helpers() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Person {
            first_name: String,
            age: u32,
        }

        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        let person = Person {
            first_name: "Mahendra".to_string(),
            age: 30,
        };

        store.create_value("p1", &person).unwrap();
        let loaded: Person = store.read_value("p1").unwrap();
        assert_eq!(loaded, person);

        let mismatch: StoreResult<Vec<u8>> = store.read_value("p1");
        assert!(matches!(mismatch, Err(StoreError::InvalidValue { .. })));
        let missing: StoreResult<Person> = store.read_value("nobody");
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_large_numbers_round_trip_exactly() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);

        store.create("big", "18446744073709551617").unwrap();
        store
            .create("nested", "{\"id\": -92233720368547758080, \"ratio\": 0.10000000000000000001}")
            .unwrap();

        assert_eq!(store.read("big").unwrap(), "18446744073709551617");
        assert_eq!(
            store.read("nested").unwrap(),
            "{\"id\":-92233720368547758080,\"ratio\":0.10000000000000000001}"
        );
    }

    #[test]
    fn test_create_after_unterminated_last_line() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        fs::write(store.path(), "{\"a\":1}").unwrap();
        assert_eq!(store.read("a").unwrap(), "1");

        store.create("b", "2").unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "{\"a\":1}\n{\"b\":2}\n"
        );
        assert_eq!(store.read("a").unwrap(), "1");
        assert_eq!(store.read("b").unwrap(), "2");
    }

    #[test]
    fn test_failed_append_leaves_no_partial_line() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        store.create("a", "1").unwrap();
        let before = fs::read(store.path()).unwrap();

        let result = truncate_on_error(store.lock.file(), before.len() as u64, |mut file| {
            file.seek(SeekFrom::End(0))?;
            file.write_all(b"{\"torn\":[1,2")?;
            Err(io::Error::other("No space left on device"))
        });

        assert_eq!(result.unwrap_err().to_string(), "No space left on device");
        assert_eq!(fs::read(store.path()).unwrap(), before);
        store.create("b", "2").unwrap();
        assert_eq!(store.read("a").unwrap(), "1");
        assert_eq!(store.read("b").unwrap(), "2");
    }

    #[test]
    fn test_successful_append_is_kept() {
        let dir = TempDir::new().unwrap();
        let store = open_in(&dir);

        truncate_on_error(store.lock.file(), 0, |mut file| {
            file.write_all(b"{\"k\":true}\n")
        })
        .unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{\"k\":true}\n");
    }

    #[test]
    fn test_contains() {
        let dir = TempDir::new().unwrap();
        let mut store = open_in(&dir);
        assert!(!store.contains("k").unwrap());
        store.create("k", "null").unwrap();
        assert!(store.contains("k").unwrap());
    }
}
