//! Structured record extracted from Aadhaar card text.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity fields extracted from the front and back of a card.
///
/// Every field is independently optional. Absent fields are omitted from the
/// serialized form rather than written as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    /// 12-digit Aadhaar number without separators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,

    /// Holder name in Latin script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Date of birth exactly as printed (`DD/MM/YYYY` or `DD-MM-YYYY`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Gender in canonical form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Address lines joined with ", ".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// 6-digit postal (PIN) code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Gender as printed on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a gender keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Canonical capitalized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExtractedRecord {
    /// Number of populated fields.
    pub fn populated_fields(&self) -> usize {
        [
            self.id_number.is_some(),
            self.name.is_some(),
            self.date_of_birth.is_some(),
            self.gender.is_some(),
            self.address.is_some(),
            self.postal_code.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// True when no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }

    /// Names of the fields that were not extracted, in record order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id_number.is_none() {
            missing.push("id number");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.date_of_birth.is_none() {
            missing.push("date of birth");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.address.is_none() {
            missing.push("address");
        }
        if self.postal_code.is_none() {
            missing.push("postal code");
        }
        missing
    }

    /// Interpret the date of birth as a calendar date.
    ///
    /// Returns `None` when the field is absent or names an impossible day.
    pub fn date_of_birth_parsed(&self) -> Option<NaiveDate> {
        let dob = self.date_of_birth.as_deref()?;
        let normalized = dob.replace('-', "/");
        NaiveDate::parse_from_str(&normalized, "%d/%m/%Y").ok()
    }

    /// Check the record invariants and return a list of issues.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let text_fields = [
            ("id number", &self.id_number),
            ("name", &self.name),
            ("date of birth", &self.date_of_birth),
            ("address", &self.address),
            ("postal code", &self.postal_code),
        ];
        for (field, value) in text_fields {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                issues.push(format!("{} is empty", field));
            }
        }

        if let Some(id) = &self.id_number {
            if !is_ascii_digits(id, 12) {
                issues.push(format!("id number {} is not 12 digits", id));
            }
        }

        if let Some(postal) = &self.postal_code {
            if !is_ascii_digits(postal, 6) {
                issues.push(format!("postal code {} is not 6 digits", postal));
            }
        }

        if let Some(dob) = &self.date_of_birth {
            if !has_date_shape(dob) {
                issues.push(format!("date of birth {} is not in DD/MM/YYYY form", dob));
            } else if self.date_of_birth_parsed().is_none() {
                issues.push(format!("date of birth {} is not a calendar date", dob));
            }
        }

        issues
    }
}

fn is_ascii_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/' || *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
