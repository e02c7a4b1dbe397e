//! Exam schedule and exam result records.

#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// One scheduled exam sitting for a class.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamSlot {
    pub key: String,
    pub class_name: String,
    pub subject: String,
    /// Exam date as entered (`YYYY-MM-DD`).
    pub date: String,
    /// Start time as entered (`HH:MM`).
    pub time: String,
}

impl Record for ExamSlot {
    const COLLECTION: &'static str = "exam_schedule";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            class_name: doc.str("className")?,
            subject: doc.str("subject")?,
            date: doc.str("date")?,
            time: doc.str("time")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "className": self.class_name,
            "subject": self.subject,
            "date": self.date,
            "time": self.time,
        })
    }
}

/// A recorded exam result.
///
/// `score` stays a string: the original console records grades and marks
/// interchangeably (`"A+"`, `"87"`), and nothing computes on it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamResult {
    pub key: String,
    pub student_name: String,
    pub subject: String,
    pub score: String,
}

impl Record for ExamResult {
    const COLLECTION: &'static str = "exam_results";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            student_name: doc.str("studentName")?,
            subject: doc.str("subject")?,
            score: doc.str("score")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "studentName": self.student_name,
            "subject": self.subject,
            "score": self.score,
        })
    }
}
