//! Inventory Item
//!
//! A pantry or hygiene item the admin tracks and students can request.

use serde::{Deserialize, Serialize};
use super::error::DomainResult;
use super::input::{parse_count, required};

/// One row of the inventory table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InventoryItem {
    pub name: String,
    pub qty: u32,
    pub category: String,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, qty: u32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qty,
            category: category.into(),
        }
    }

    /// Build an item from the admin add-row form.
    pub fn from_form(category: &str, name: &str, qty: &str) -> DomainResult<Self> {
        const MESSAGE: &str = "Please enter a category and item name.";
        let category = required(category, MESSAGE)?;
        let name = required(name, MESSAGE)?;
        Ok(Self::new(name, parse_count(qty), category))
    }

    /// Students only see what is on the shelf
    pub fn in_stock(&self) -> bool {
        self.qty > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_from_form() {
        let item = InventoryItem::from_form(" Pantry", "Oats ", "5").unwrap();
        assert_eq!(item, InventoryItem::new("Oats", 5, "Pantry"));
        assert!(item.in_stock());
    }

    #[test]
    fn test_from_form_requires_category_and_name() {
        let err = InventoryItem::from_form("", "Oats", "5").unwrap_err();
        assert_eq!(err, DomainError::MissingInput("Please enter a category and item name."));
        assert!(InventoryItem::from_form("Pantry", " ", "5").is_err());
    }

    #[test]
    fn test_bad_quantity_becomes_zero() {
        let item = InventoryItem::from_form("Pantry", "Oats", "lots").unwrap();
        assert_eq!(item.qty, 0);
        assert!(!item.in_stock());
    }

    #[test]
    fn test_lenient_decode() {
        let item: InventoryItem = serde_json::from_str(r#"{"name":"Pasta"}"#).unwrap();
        assert_eq!(item, InventoryItem::new("Pasta", 0, ""));
    }
}
