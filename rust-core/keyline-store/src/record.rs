// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Keyline Record Store - Record line codec
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// A record is persisted as exactly one line of the backing file: the compact
// JSON encoding of a single-entry object mapping the key to the value.
//
//   {"test_key":{"First Name":"Mahendra","Last Name":"Gaur"}}
//
// Anything else on a line (invalid JSON, a non-object, an object with zero or
// several members) is corruption.

use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// One key/value pair as stored on a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The record key.
    pub key: String,
    /// The record value.
    pub value: Value,
}

impl Record {
    /// Build a record from its parts.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Encode the record as one line, including the trailing newline.
    pub fn encode(&self) -> String {
        let mut object = Map::with_capacity(1);
        object.insert(self.key.clone(), self.value.clone());
        let mut line = Value::Object(object).to_string();
        line.push('\n');
        line
    }

    /// Decode one line of the backing file.
    ///
    /// `line_number` is 1-based and only used for error reporting. A trailing
    /// newline, if present, is ignored.
    pub fn decode(line: &str, line_number: usize) -> StoreResult<Self> {
        let object: Map<String, Value> =
            serde_json::from_str(line.trim_end_matches(['\n', '\r'])).map_err(|e| {
                StoreError::CorruptStore {
                    line: line_number,
                    reason: e.to_string(),
                }
            })?;

        let found = object.len();
        let mut entries = object.into_iter();
        match (entries.next(), entries.next()) {
            (Some((key, value)), None) => Ok(Self { key, value }),
            _ => Err(StoreError::CorruptStore {
                line: line_number,
                reason: format!("expected exactly one key, found {found}"),
            }),
        }
    }
}
