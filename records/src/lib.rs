//! Shared typed record model for the school console.
//!
//! This crate owns the document schema used by the `client` crate when
//! talking to the hosted document store. Documents arrive as JSON maps of
//! `key -> fields`; every record kind decodes through an explicit, fallible
//! step instead of being spread into an untyped object, so a malformed
//! document surfaces as a [`DecodeError`] naming the collection, key, and
//! field rather than as a silently broken row.
//!
//! ERROR HANDLING
//! ==============
//! Decoding is total: any shape the store can return maps to either a typed
//! record or a `DecodeError`. Numeric fields accept JSON numbers or numeric
//! strings, since the original console wrote form inputs through `parseInt`
//! and older rows carry either representation.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod admission;
pub mod allocation;
pub mod class;
pub mod exam;
pub mod fees;
pub mod student;
pub mod subject;
pub mod syllabus;
pub mod teacher;

pub use admission::{Admission, Registration};
pub use allocation::Allocation;
pub use class::SchoolClass;
pub use exam::{ExamResult, ExamSlot};
pub use fees::{FeePayment, FeeStructure};
pub use student::Student;
pub use subject::Subject;
pub use syllabus::Syllabus;
pub use teacher::Teacher;

use serde_json::{Map, Value};

/// Error returned by [`Record::decode`] and [`decode_collection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The collection payload is not a key-to-document map.
    #[error("collection `{collection}`: expected a key-to-document map")]
    NotACollection {
        /// Collection being decoded.
        collection: &'static str,
    },
    /// A document body is not a JSON object.
    #[error("{collection}/{key}: expected a document object")]
    NotADocument {
        /// Collection being decoded.
        collection: &'static str,
        /// Key of the offending document.
        key: String,
    },
    /// A required field is absent (or JSON `null`).
    #[error("{collection}/{key}: missing required field `{field}`")]
    MissingField {
        collection: &'static str,
        key: String,
        field: &'static str,
    },
    /// A field is present but has the wrong shape.
    #[error("{collection}/{key}: field `{field}` is not {expected}")]
    InvalidField {
        collection: &'static str,
        key: String,
        field: &'static str,
        /// Human-readable expected shape (e.g. "a string").
        expected: &'static str,
    },
}

/// A record kind persisted in the document store.
pub trait Record: Sized {
    /// Collection path this kind lives under.
    const COLLECTION: &'static str;

    /// Store key of this record.
    fn key(&self) -> &str;

    /// Decode one document body into a typed record.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] locating the first missing or malformed
    /// field.
    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError>;

    /// Encode the document body (the store key is not part of the body).
    fn encode(&self) -> Value;
}

/// Decode a whole collection payload into typed records, sorted by key.
///
/// The store returns `null` for an empty collection; that decodes to an
/// empty vec rather than an error.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered, or `NotACollection` when
/// the payload is not a map.
pub fn decode_collection<R: Record>(payload: &Value) -> Result<Vec<R>, DecodeError> {
    let entries = match payload {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        _ => {
            return Err(DecodeError::NotACollection {
                collection: R::COLLECTION,
            });
        }
    };

    let mut keys: Vec<&String> = entries.keys().collect();
    keys.sort();

    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        rows.push(R::decode(key, &entries[key])?);
    }
    Ok(rows)
}

/// Field-level access to one document body during decode.
///
/// Wraps the collection/key context so field errors carry their location
/// without every call site re-threading it.
#[derive(Debug)]
pub struct DocReader<'a> {
    collection: &'static str,
    key: &'a str,
    fields: &'a Map<String, Value>,
}

impl<'a> DocReader<'a> {
    /// Open a document body for reading.
    ///
    /// # Errors
    ///
    /// Returns `NotADocument` when the body is not a JSON object.
    pub fn new(
        collection: &'static str,
        key: &'a str,
        value: &'a Value,
    ) -> Result<Self, DecodeError> {
        match value {
            Value::Object(fields) => Ok(Self {
                collection,
                key,
                fields,
            }),
            _ => Err(DecodeError::NotADocument {
                collection,
                key: key.to_owned(),
            }),
        }
    }

    fn missing(&self, field: &'static str) -> DecodeError {
        DecodeError::MissingField {
            collection: self.collection,
            key: self.key.to_owned(),
            field,
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> DecodeError {
        DecodeError::InvalidField {
            collection: self.collection,
            key: self.key.to_owned(),
            field,
            expected,
        }
    }

    fn present(&self, field: &'static str) -> Option<&'a Value> {
        match self.fields.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Required string field.
    ///
    /// # Errors
    ///
    /// `MissingField` when absent, `InvalidField` when not a string.
    pub fn str(&self, field: &'static str) -> Result<String, DecodeError> {
        match self.present(field) {
            None => Err(self.missing(field)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    /// Optional string field; absent, `null`, and empty all read as `None`.
    #[must_use]
    pub fn opt_str(&self, field: &'static str) -> Option<String> {
        match self.present(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Required unsigned integer field, accepting numbers or numeric strings.
    ///
    /// # Errors
    ///
    /// `MissingField` when absent, `InvalidField` when neither an unsigned
    /// integer nor a string of digits.
    pub fn u32(&self, field: &'static str) -> Result<u32, DecodeError> {
        let expected = "an unsigned integer";
        match self.present(field) {
            None => Err(self.missing(field)),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| self.invalid(field, expected)),
            Some(Value::String(s)) => {
                s.trim().parse().map_err(|_| self.invalid(field, expected))
            }
            Some(_) => Err(self.invalid(field, expected)),
        }
    }

    /// Required non-negative amount field, accepting numbers or numeric
    /// strings.
    ///
    /// # Errors
    ///
    /// `MissingField` when absent, `InvalidField` when not a finite
    /// non-negative number.
    pub fn amount(&self, field: &'static str) -> Result<f64, DecodeError> {
        let expected = "a non-negative amount";
        let parsed = match self.present(field) {
            None => return Err(self.missing(field)),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            Some(_) => None,
        };
        match parsed {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(self.invalid(field, expected)),
        }
    }

    /// Required list-of-strings field.
    ///
    /// # Errors
    ///
    /// `MissingField` when absent, `InvalidField` when not an array of
    /// strings.
    pub fn str_list(&self, field: &'static str) -> Result<Vec<String>, DecodeError> {
        let expected = "an array of strings";
        match self.present(field) {
            None => Err(self.missing(field)),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(self.invalid(field, expected)),
                })
                .collect(),
            Some(_) => Err(self.invalid(field, expected)),
        }
    }
}
