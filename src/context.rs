//! Application Context
//!
//! Shared state provided via Leptos Context API, one per mounted feature.

use leptos::prelude::*;
use aggiesource_core::DomainResult;

use crate::dom;
use crate::storage::LocalStore;

/// Per-mount signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every write so views re-read storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every write so views re-read storage - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// The store every feature reads and writes
    pub fn store(&self) -> LocalStore {
        LocalStore
    }

    /// Subscribe the calling view to reloads
    pub fn track(&self) {
        let _ = self.reload_trigger.get();
    }

    /// Trigger a reload of every view in this mount
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Finish a user action.
    ///
    /// On success the views reload. A user-facing failure is shown and
    /// nothing reloads; a stale-index miss reloads so the view catches up.
    pub fn commit<T>(&self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.reload();
                Some(value)
            }
            Err(err) => {
                if err.is_user_facing() {
                    log::debug!("[APP] Rejected: {}", err);
                    dom::alert(&err.to_string());
                } else {
                    log::warn!("[APP] Ignored: {}", err);
                    self.reload();
                }
                None
            }
        }
    }
}

/// Get the context of the current mount
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
