//! Teaching staff records.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// A staff member, keyed by store key.
#[derive(Clone, Debug, PartialEq)]
pub struct Teacher {
    pub key: String,
    pub name: String,
    pub email: String,
    /// Primary subject taught.
    pub subject: String,
    pub qualification: String,
    /// School-assigned teacher ID, distinct from the store key.
    pub teacher_id: String,
}

impl Record for Teacher {
    const COLLECTION: &'static str = "teachers";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            name: doc.str("name")?,
            email: doc.str("email")?,
            subject: doc.str("subject")?,
            qualification: doc.str("qualification")?,
            teacher_id: doc.str("teacherId")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "subject": self.subject,
            "qualification": self.qualification,
            "teacherId": self.teacher_id,
        })
    }
}
