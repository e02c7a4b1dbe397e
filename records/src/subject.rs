//! Subject catalog records.

#[cfg(test)]
#[path = "subject_test.rs"]
mod subject_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// A subject offered by the school.
#[derive(Clone, Debug, PartialEq)]
pub struct Subject {
    pub key: String,
    pub name: String,
    /// Short catalog code (e.g. `"MATH-7"`).
    pub code: String,
    pub description: String,
    pub credits: u32,
    pub department: String,
}

impl Record for Subject {
    const COLLECTION: &'static str = "subjects";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            name: doc.str("name")?,
            code: doc.str("code")?,
            description: doc.str("description")?,
            credits: doc.u32("credits")?,
            department: doc.str("department")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "code": self.code,
            "description": self.description,
            "credits": self.credits,
            "department": self.department,
        })
    }
}
