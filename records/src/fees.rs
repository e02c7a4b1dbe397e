//! Fee structure and fee payment records.
//!
//! DESIGN
//! ======
//! Amounts are `f64` rupee values: the original console wrote them through
//! `parseFloat`, and the only arithmetic the console performs on them is
//! summing for display.

#[cfg(test)]
#[path = "fees_test.rs"]
mod fees_test;

use serde_json::{Value, json};

use crate::{DecodeError, DocReader, Record};

/// Per-class fee structure with its component heads.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeStructure {
    pub key: String,
    /// Class level this structure applies to.
    pub class_level: String,
    pub tuition_fee: f64,
    pub library_fee: f64,
    pub sports_fee: f64,
    pub computer_fee: f64,
}

impl FeeStructure {
    /// Sum of all fee heads for one class level.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.tuition_fee + self.library_fee + self.sports_fee + self.computer_fee
    }
}

impl Record for FeeStructure {
    const COLLECTION: &'static str = "fee_structures";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            class_level: doc.str("class")?,
            tuition_fee: doc.amount("tuitionFee")?,
            library_fee: doc.amount("libraryFee")?,
            sports_fee: doc.amount("sportsFee")?,
            computer_fee: doc.amount("computerFee")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "class": self.class_level,
            "tuitionFee": self.tuition_fee,
            "libraryFee": self.library_fee,
            "sportsFee": self.sports_fee,
            "computerFee": self.computer_fee,
        })
    }
}

/// A single submitted fee payment.
#[derive(Clone, Debug, PartialEq)]
pub struct FeePayment {
    pub key: String,
    pub student_name: String,
    pub amount: f64,
    /// Payment date as entered (`YYYY-MM-DD`).
    pub payment_date: String,
    /// Payment method label (e.g. `"Cash"`, `"Bank Transfer"`).
    pub payment_method: String,
}

impl FeePayment {
    /// Total amount collected across a set of payments.
    #[must_use]
    pub fn total_collected(payments: &[Self]) -> f64 {
        payments.iter().map(|p| p.amount).sum()
    }
}

impl Record for FeePayment {
    const COLLECTION: &'static str = "fee_payments";

    fn key(&self) -> &str {
        &self.key
    }

    fn decode(key: &str, value: &Value) -> Result<Self, DecodeError> {
        let doc = DocReader::new(Self::COLLECTION, key, value)?;
        Ok(Self {
            key: key.to_owned(),
            student_name: doc.str("studentName")?,
            amount: doc.amount("amount")?,
            payment_date: doc.str("paymentDate")?,
            payment_method: doc.str("paymentMethod")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "studentName": self.student_name,
            "amount": self.amount,
            "paymentDate": self.payment_date,
            "paymentMethod": self.payment_method,
        })
    }
}
