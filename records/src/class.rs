//! Class (section) records.

#[cfg(test)]
#[path = "class_test.rs"]
mod class_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// A class section with its assigned teacher and schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct SchoolClass {
    pub key: String,
    pub name: String,
    /// Display name of the assigned teacher.
    pub teacher: String,
    /// Free-form schedule text (e.g. `"Mon/Wed 9:00"`).
    pub schedule: String,
    pub capacity: u32,
    pub description: String,
}

impl Record for SchoolClass {
    const COLLECTION: &'static str = "classes";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            name: doc.str("name")?,
            teacher: doc.str("teacher")?,
            schedule: doc.str("schedule")?,
            capacity: doc.u32("capacity")?,
            description: doc.str("description")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "teacher": self.teacher,
            "schedule": self.schedule,
            "capacity": self.capacity,
            "description": self.description,
        })
    }
}
