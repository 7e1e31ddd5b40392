//! Volunteer Service
//!
//! Check-in/check-out state machine over the `ActiveShift` singleton,
//! per-day checklist progress, and hour totals.
//!
//! Idle --check_in--> Active --check_out--> Idle (one log appended)

use chrono::{DateTime, Utc};
use crate::domain::{
    minutes_to_hours, ActiveShift, ChecklistTemplate, Completion, DomainError, DomainResult,
    VolunteerLog,
};
use crate::storage::{keys, Collection, KeyValueStore, StoreExt};
use super::calendar::{monthly_calendar, MonthSummary};
use super::checklists::ChecklistService;

/// Header stats for the check-in card
#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerSummary {
    pub total_hours: f64,
    pub check_ins: usize,
    pub most_recent: Option<VolunteerLog>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub label: String,
    pub done: bool,
}

/// The checklist a checked-in volunteer sees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistView {
    pub title: String,
    pub entries: Vec<ChecklistEntry>,
    pub completion: Completion,
}

pub struct VolunteerService<'a, S: ?Sized> {
    store: &'a S,
    logs: Collection<'a, S, VolunteerLog>,
}

impl<'a, S: KeyValueStore + ?Sized> VolunteerService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            logs: Collection::new(store, keys::VOLUNTEER_LOGS, "volunteer log"),
        }
    }

    pub fn active(&self) -> Option<ActiveShift> {
        self.store.get_opt(keys::ACTIVE_SHIFT)
    }

    pub fn logs(&self) -> Vec<VolunteerLog> {
        self.logs.load()
    }

    // ========================
    // Check-in / check-out
    // ========================

    /// Idle -> Active. Rejected while another shift is open.
    pub fn check_in(&self, shift: &str, event: &str, now: DateTime<Utc>) -> DomainResult<ActiveShift> {
        let active = ActiveShift::begin(shift, event, now)?;
        if self.active().is_some() {
            return Err(DomainError::AlreadyCheckedIn);
        }
        self.store.set(keys::ACTIVE_SHIFT, &active)?;
        log::info!("[VOLUNTEER] Checked in: {} / {}", active.shift, active.event);
        Ok(active)
    }

    /// Active -> Idle. Appends the finished log, then clears the singleton.
    pub fn check_out(&self, now: DateTime<Utc>) -> DomainResult<VolunteerLog> {
        let active = self.active().ok_or(DomainError::NotCheckedIn)?;
        let entry = active.finish(now);
        self.logs.push(entry.clone())?;
        self.store.set(keys::ACTIVE_SHIFT, &Option::<ActiveShift>::None)?;
        log::info!("[VOLUNTEER] Checked out after {} minutes", entry.minutes);
        Ok(entry)
    }

    pub fn summary(&self) -> VolunteerSummary {
        let logs = self.logs();
        let total_minutes: u64 = logs.iter().map(|l| u64::from(l.minutes)).sum();
        VolunteerSummary {
            total_hours: minutes_to_hours(total_minutes),
            check_ins: logs.len(),
            most_recent: logs.last().cloned(),
        }
    }

    pub fn calendar(&self) -> Vec<MonthSummary> {
        monthly_calendar(&self.logs())
    }

    // ========================
    // Checklist
    // ========================

    /// Checklist for the open shift, or `None` when nobody is checked in.
    pub fn checklist(&self) -> Option<ChecklistView> {
        let active = self.active()?;
        let template = ChecklistService::new(self.store).active_template();
        let progress = self.progress(&active.date, &template);
        Some(build_view(template, &progress))
    }

    /// Mark checklist item `index` for today's shift and return the updated view.
    pub fn set_checklist_item(&self, index: usize, done: bool) -> DomainResult<ChecklistView> {
        let active = self.active().ok_or(DomainError::NotCheckedIn)?;
        let template = ChecklistService::new(self.store).active_template();
        if index >= template.items.len() {
            return Err(DomainError::NotFound { what: "checklist item", index });
        }
        let key = keys::checklist_progress(&active.date);

        let mut progress: Vec<bool> = self.store.try_get(&key)?.unwrap_or_default();
        if progress.len() <= index {
            progress.resize(index + 1, false);
        }
        progress[index] = done;
        self.store.set(&key, &progress)?;

        Ok(build_view(template, &progress))
    }

    fn progress(&self, date: &str, template: &ChecklistTemplate) -> Vec<bool> {
        self.store
            .get_or(&keys::checklist_progress(date), vec![false; template.items.len()])
    }
}

fn build_view(template: ChecklistTemplate, progress: &[bool]) -> ChecklistView {
    let completion = Completion::of(progress, template.items.len());
    let entries = template
        .items
        .into_iter()
        .enumerate()
        .map(|(i, label)| ChecklistEntry {
            label,
            done: progress.get(i).copied().unwrap_or(false),
        })
        .collect();
    ChecklistView {
        title: template.title,
        entries,
        completion,
    }
}
