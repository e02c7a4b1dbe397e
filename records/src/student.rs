//! Student roster records.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// A student on the roster, keyed by store key.
///
/// `shift` and `gender` were added to the enrollment form after the first
/// cohort was entered, so older documents legitimately omit them.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub key: String,
    pub name: String,
    pub father_name: String,
    pub email: String,
    pub age: u32,
    /// Class level label (`"Prep"`, `"1"` .. `"10 (Matric)"`).
    pub class_level: String,
    /// School-assigned student ID, distinct from the store key.
    pub student_id: String,
    pub shift: Option<String>,
    pub gender: Option<String>,
}

impl Record for Student {
    const COLLECTION: &'static str = "students";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            name: doc.str("name")?,
            father_name: doc.str("fatherName")?,
            email: doc.str("email")?,
            age: doc.u32("age")?,
            class_level: doc.str("classLevel")?,
            student_id: doc.str("studentId")?,
            shift: doc.opt_str("shift"),
            gender: doc.opt_str("gender"),
        })
    }

    fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "fatherName": self.father_name,
            "email": self.email,
            "age": self.age,
            "classLevel": self.class_level,
            "studentId": self.student_id,
            "shift": self.shift,
            "gender": self.gender,
        })
    }
}
