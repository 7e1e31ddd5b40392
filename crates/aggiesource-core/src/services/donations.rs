//! Donation Tracker Service

use crate::domain::{Donation, DomainResult};
use crate::storage::{keys, Collection, KeyValueStore};

pub struct DonationService<'a, S: ?Sized> {
    donations: Collection<'a, S, Donation>,
}

impl<'a, S: KeyValueStore + ?Sized> DonationService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            donations: Collection::new(store, keys::DONATIONS, "donation"),
        }
    }

    pub fn list(&self) -> Vec<Donation> {
        self.donations.load()
    }

    pub fn add(&self, date: &str, donor: &str, item: &str, status: &str) -> DomainResult<Donation> {
        let donation = Donation::from_form(date, donor, item, status)?;
        self.donations.push(donation.clone())?;
        Ok(donation)
    }

    pub fn remove(&self, index: usize) -> DomainResult<Donation> {
        self.donations.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_add_requires_every_field() {
        let store = MemoryStore::new();
        let donations = DonationService::new(&store);
        let err = donations.add("2026-02-01", "Alumni", "", "Scheduled").unwrap_err();
        assert_eq!(err.to_string(), "Please fill out all donation fields.");
        assert!(donations.list().is_empty());

        donations.add("2026-02-01", "Alumni", "Coats", "Received").unwrap();
        assert_eq!(donations.list().len(), 1);
        assert_eq!(donations.remove(0).unwrap().item, "Coats");
    }
}
