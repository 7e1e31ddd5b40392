//! Checklist Template Service

use crate::domain::{ChecklistTemplate, DomainResult};
use crate::storage::{keys, Collection, KeyValueStore};

pub struct ChecklistService<'a, S: ?Sized> {
    templates: Collection<'a, S, ChecklistTemplate>,
}

impl<'a, S: KeyValueStore + ?Sized> ChecklistService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            templates: Collection::new(store, keys::CHECKLISTS, "checklist"),
        }
    }

    pub fn list(&self) -> Vec<ChecklistTemplate> {
        self.templates.load()
    }

    /// The template volunteers see: the first one, or an empty fallback
    pub fn active_template(&self) -> ChecklistTemplate {
        self.list()
            .into_iter()
            .next()
            .unwrap_or_else(ChecklistTemplate::fallback)
    }

    pub fn add(&self, title: &str, items: &str) -> DomainResult<ChecklistTemplate> {
        let template = ChecklistTemplate::from_form(title, items)?;
        self.templates.push(template.clone())?;
        log::debug!("[CHECKLISTS] Created {} ({} items)", template.title, template.items.len());
        Ok(template)
    }

    pub fn remove(&self, index: usize) -> DomainResult<ChecklistTemplate> {
        self.templates.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_only_first_template_is_active() {
        let store = MemoryStore::new();
        let checklists = ChecklistService::new(&store);
        assert_eq!(checklists.active_template(), ChecklistTemplate::fallback());

        checklists.add("Event Setup", "Tables, Chairs").unwrap();
        checklists.add("Closing", "Lock up").unwrap();
        assert_eq!(checklists.active_template().title, "Event Setup");

        checklists.remove(0).unwrap();
        assert_eq!(checklists.active_template().title, "Closing");
    }
}
