//! Pickup Slots and Requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::error::DomainResult;
use super::input::{lenient_timestamp, parse_count, required};

/// A pickup window offered by the admin.
///
/// `capacity` is informational; requests never consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PickupSlot {
    /// `YYYY-MM-DD` from a date input
    pub date: String,
    /// Free text, e.g. "1:30 PM"
    pub time: String,
    pub capacity: u32,
}

impl PickupSlot {
    pub fn new(date: impl Into<String>, time: impl Into<String>, capacity: u32) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            capacity,
        }
    }

    pub fn from_form(date: &str, time: &str, capacity: &str) -> DomainResult<Self> {
        const MESSAGE: &str = "Please enter a date and time.";
        let date = required(date, MESSAGE)?;
        let time = required(time, MESSAGE)?;
        Ok(Self::new(date, time, parse_count(capacity)))
    }

    /// Option text for the student slot picker
    pub fn label(&self) -> String {
        format!("{} — {} (cap {})", self.date, self.time, self.capacity)
    }
}

/// A student's request for a pickup slot.
///
/// Holds its own copy of the slot, so later slot edits or removals
/// leave past requests untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PickupRequest {
    pub slot: PickupSlot,
    pub notes: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl PickupRequest {
    pub fn new(slot: PickupSlot, notes: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            slot,
            notes: notes.trim().to_string(),
            created_at,
        }
    }

    /// `YYYY-MM-DD HH:MM:SS` for the admin table
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_slot_label() {
        let slot = PickupSlot::new("2026-03-01", "9:00 AM", 4);
        assert_eq!(slot.label(), "2026-03-01 — 9:00 AM (cap 4)");
    }

    #[test]
    fn test_slot_form_requires_date_and_time() {
        assert!(PickupSlot::from_form("2026-03-01", "", "4").is_err());
        let slot = PickupSlot::from_form("2026-03-01", "9:00 AM", "").unwrap();
        assert_eq!(slot.capacity, 0);
    }

    #[test]
    fn test_request_wire_format() {
        let at = Utc.with_ymd_and_hms(2026, 2, 2, 15, 4, 5).unwrap();
        let req = PickupRequest::new(PickupSlot::new("2026-02-02", "2:00 PM", 8), " bring ID ", at);
        assert_eq!(req.notes, "bring ID");
        assert_eq!(req.created_label(), "2026-02-02 15:04:05");

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["slot"]["capacity"], 8);

        let back: PickupRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_decodes_js_timestamp() {
        let raw = r#"{"slot":{"date":"2026-02-03","time":"10:00 AM","capacity":8},"notes":"","createdAt":"2026-02-01T18:30:00.000Z"}"#;
        let req: PickupRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.created_label(), "2026-02-01 18:30:00");
    }

    #[test]
    fn test_request_without_timestamp_decodes() {
        let raw = r#"{"slot":{"date":"2026-02-03"},"notes":"ID at desk"}"#;
        let req: PickupRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.slot, PickupSlot::new("2026-02-03", "", 0));
        assert_eq!(req.notes, "ID at desk");
        assert_eq!(req.created_label(), "1970-01-01 00:00:00");
    }
}
