// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Keyline Record Store crate
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// An embeddable, single-file key/value record store. Every record is one line
// of newline-delimited JSON in a backing file (`<dir>/data`, or
// `<home>/data` by default), and the file is held under an exclusive,
// non-blocking advisory lock for as long as the store is open.
//
// # Modules
//
// - [`store`] -- `RecordStore`: open, create, read, delete, close.
// - [`record`] -- The one-line JSON encoding of a record.
// - [`lock`] -- The exclusive lock guard owning the file handle.
// - [`limits`] -- Key, value and file size limits plus `StoreConfig`.
// - [`error`] -- `StoreError` and the `StoreResult` alias.
//
// ## Usage
//
// ```no_run
// use keyline_store::{RecordStore, StoreError};
//
// let mut store = RecordStore::open(Some("/tmp/keyline".as_ref())).unwrap();
//
// store.create("test_key", r#"{"First Name": "Mahendra"}"#).unwrap();
// assert_eq!(store.read("test_key").unwrap(), r#"{"First Name":"Mahendra"}"#);
//
// match store.read("123") {
//     Err(StoreError::NotFound(key)) => println!("no record for {key}"),
//     other => panic!("unexpected: {other:?}"),
// }
//
// store.delete("test_key").unwrap();
// store.close().unwrap();
// ```

pub mod error;
pub mod limits;
pub mod lock;
pub mod record;
pub mod store;

// Re-export the primary public API for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use limits::{
    StoreConfig, StoreLimits, DEFAULT_FILE_NAME, MAX_FILE_SIZE, MAX_KEY_LENGTH, MAX_VALUE_SIZE,
};
pub use record::Record;
pub use store::{Created, Deleted, RecordStore};
