//! Checklist Templates and Completion

use serde::{Deserialize, Serialize};
use super::error::DomainResult;
use super::input::{required, split_items};

/// An admin-authored checklist shown to volunteers after check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChecklistTemplate {
    pub title: String,
    pub items: Vec<String>,
}

impl ChecklistTemplate {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Build a template from a title and a comma-separated item list.
    ///
    /// The raw list only has to be non-empty; it may still split into nothing.
    pub fn from_form(title: &str, items: &str) -> DomainResult<Self> {
        const MESSAGE: &str = "Please enter a title and at least one checklist item.";
        let title = required(title, MESSAGE)?;
        let items = required(items, MESSAGE)?;
        Ok(Self::new(title, split_items(items)))
    }

    /// Shown when a volunteer checks in and no template exists
    pub fn fallback() -> Self {
        Self::new("Shift Checklist", Vec::new())
    }
}

/// Progress through a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub completed: usize,
    /// Item count, never below 1
    pub total: usize,
    /// 0..=100
    pub percent: u32,
}

impl Completion {
    /// Count checked boxes among the first `item_count` entries of `progress`.
    ///
    /// An empty checklist has nothing left to do and reports 100%.
    pub fn of(progress: &[bool], item_count: usize) -> Self {
        let completed = progress.iter().take(item_count).filter(|done| **done).count();
        let total = item_count.max(1);
        let percent = if item_count == 0 {
            100
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        Self { completed, total, percent }
    }
}
