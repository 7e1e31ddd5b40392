//! Donation Entry

use serde::{Deserialize, Serialize};
use super::error::DomainResult;
use super::input::required;

/// A tracked donation. `status` is free text ("Scheduled", "Received", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Donation {
    pub donor: String,
    pub item: String,
    pub status: String,
    pub date: String,
}

impl Donation {
    pub fn new(
        donor: impl Into<String>,
        item: impl Into<String>,
        status: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            donor: donor.into(),
            item: item.into(),
            status: status.into(),
            date: date.into(),
        }
    }

    pub fn from_form(date: &str, donor: &str, item: &str, status: &str) -> DomainResult<Self> {
        const MESSAGE: &str = "Please fill out all donation fields.";
        Ok(Self::new(
            required(donor, MESSAGE)?,
            required(item, MESSAGE)?,
            required(status, MESSAGE)?,
            required(date, MESSAGE)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        assert!(Donation::from_form("2026-02-01", "Campus Partner", "Canned goods", "").is_err());
        assert!(Donation::from_form("", "Campus Partner", "Canned goods", "Scheduled").is_err());
        let d = Donation::from_form("2026-02-01", " Campus Partner ", "Canned goods", "Scheduled").unwrap();
        assert_eq!(d, Donation::new("Campus Partner", "Canned goods", "Scheduled", "2026-02-01"));
    }
}
