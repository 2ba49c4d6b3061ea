use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email address that passed the basic shape check: a non-empty local part,
/// a single `@`, and a domain with no empty labels (`a@localhost` is fine).
///
/// This is not RFC 5322 validation. The waitlist endpoint owns the real check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let candidate = raw.trim();
        if candidate.is_empty() {
            return Err(InvalidEmail::Empty);
        }
        if candidate.chars().any(char::is_whitespace) {
            return Err(InvalidEmail::ContainsWhitespace);
        }

        let Some((local, domain)) = candidate.split_once('@') else {
            return Err(InvalidEmail::MissingAt);
        };
        if local.is_empty() {
            return Err(InvalidEmail::MissingLocalPart);
        }
        if domain.contains('@') {
            return Err(InvalidEmail::MultipleAt);
        }
        if domain.split('.').any(str::is_empty) {
            return Err(InvalidEmail::MissingDomain);
        }

        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
