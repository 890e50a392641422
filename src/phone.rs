// ☎️ Phone Number - an integer of any length, kept as canonical digit text
//
// Canonical form: optional leading '-', no '+', no leading zeros, "0" for zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Invalid mobile number: nothing was entered")]
    Empty,
    #[error("Invalid mobile number '{0}': expected a whole number")]
    NotAnInteger(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        let (negative, digits) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneError::NotAnInteger(trimmed.to_string()));
        }

        let significant = digits.trim_start_matches('0');
        let canonical = match (significant.is_empty(), negative) {
            (true, _) => "0".to_string(),
            (false, true) => format!("-{}", significant),
            (false, false) => significant.to_string(),
        };

        Ok(PhoneNumber(canonical))
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl From<i64> for PhoneNumber {
    fn from(value: i64) -> Self {
        PhoneNumber(value.to_string())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
