//! Teacher-to-course allocation records.

#[cfg(test)]
#[path = "allocation_test.rs"]
mod allocation_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// Assignment of one teacher to one course.
///
/// Stores keys of the referenced documents; the console resolves display
/// names at render time and tolerates dangling references (a deleted teacher
/// leaves the allocation row pointing nowhere, as in the original).
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    pub key: String,
    pub teacher_key: String,
    pub course_key: String,
}

impl Record for Allocation {
    const COLLECTION: &'static str = "allocations";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            teacher_key: doc.str("teacherId")?,
            course_key: doc.str("courseId")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "teacherId": self.teacher_key,
            "courseId": self.course_key,
        })
    }
}
