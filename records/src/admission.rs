//! Admission application and registration records.

#[cfg(test)]
#[path = "admission_test.rs"]
mod admission_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// An admission application for a course.
#[derive(Clone, Debug, PartialEq)]
pub struct Admission {
    pub key: String,
    pub name: String,
    pub email: String,
    pub course: String,
    /// Date of birth as entered (`YYYY-MM-DD`).
    pub date_of_birth: String,
}

impl Record for Admission {
    const COLLECTION: &'static str = "admissions";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            name: doc.str("name")?,
            email: doc.str("email")?,
            course: doc.str("course")?,
            date_of_birth: doc.str("dateOfBirth")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "course": self.course,
            "dateOfBirth": self.date_of_birth,
        })
    }
}

/// A completed registration with guardian contact details.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub key: String,
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub father_name: String,
    pub father_phone: String,
    /// Guardian national ID number.
    pub cnic: String,
}

impl Record for Registration {
    const COLLECTION: &'static str = "registrations";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            name: doc.str("name")?,
            age: doc.u32("age")?,
            grade: doc.str("grade")?,
            father_name: doc.str("fatherName")?,
            father_phone: doc.str("fatherPhone")?,
            cnic: doc.str("cnic")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "name": self.name,
            "age": self.age,
            "grade": self.grade,
            "fatherName": self.father_name,
            "fatherPhone": self.father_phone,
            "cnic": self.cnic,
        })
    }
}
