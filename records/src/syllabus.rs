//! Syllabus records.

#[cfg(test)]
#[path = "syllabus_test.rs"]
mod syllabus_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// A course syllabus with its topic list.
#[derive(Clone, Debug, PartialEq)]
pub struct Syllabus {
    pub key: String,
    pub course: String,
    /// Display name of the instructor.
    pub instructor: String,
    pub description: String,
    pub topics: Vec<String>,
    /// Free-form duration text (e.g. `"12 weeks"`).
    pub duration: String,
}

impl Record for Syllabus {
    const COLLECTION: &'static str = "syllabus";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            course: doc.str("course")?,
            instructor: doc.str("instructor")?,
            description: doc.str("description")?,
            topics: doc.str_list("topics")?,
            duration: doc.str("duration")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "course": self.course,
            "instructor": self.instructor,
            "description": self.description,
            "topics": self.topics,
            "duration": self.duration,
        })
    }
}
