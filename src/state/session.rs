//! Session Context
//!
//! Reactive state shared across panels: the active panel, the resolved role
//! and the cached prediction history. Provided once at the root and read
//! with `use_context`, so handlers get an explicit context object instead of
//! module-level globals.

use leptos::*;

use crate::api::client::ReviewRecord;
use crate::auth::Role;
use crate::state::panel::Panel;

/// Session context provided to all components
#[derive(Clone, Copy)]
pub struct Session {
    /// The one panel currently rendered.
    pub active_panel: RwSignal<Panel>,
    /// Resolved role; `None` while logged out.
    pub role: RwSignal<Option<Role>>,
    /// Cached history list, shared by the history table and the chart.
    pub history: RwSignal<Vec<ReviewRecord>>,
    /// Epoch of the newest history load; older loads are discarded.
    history_epoch: StoredValue<u64>,
}

impl Session {
    fn new() -> Self {
        Self {
            active_panel: create_rw_signal(Panel::Login),
            role: create_rw_signal(None),
            history: create_rw_signal(Vec::new()),
            history_epoch: store_value(0),
        }
    }

    /// Show exactly `panel`, hiding every other one.
    pub fn show(&self, panel: Panel) {
        self.active_panel.set(panel);
    }

    /// Record a successful login and land on the role's first panel.
    pub fn login(&self, role: Role) {
        self.role.set(Some(role));
        self.show(role.landing_panel());
    }

    /// Drop the role and return to the login panel. Idempotent.
    pub fn logout(&self) {
        self.role.set(None);
        self.history.set(Vec::new());
        self.show(Panel::Login);
    }

    /// Start a history load, superseding any in-flight one.
    pub fn begin_history_load(&self) -> u64 {
        let epoch = self.history_epoch.with_value(|e| e + 1);
        self.history_epoch.set_value(epoch);
        epoch
    }

    /// Whether a load begun at `epoch` from `origin` may still publish its
    /// result: it must be the newest load and its panel must still be the
    /// active one. Late responses after a panel switch are discarded rather
    /// than cached.
    pub fn history_load_is_current(&self, epoch: u64, origin: Panel) -> bool {
        self.history_epoch.with_value(|e| *e == epoch)
            && self.active_panel.get_untracked() == origin
    }
}

/// Provide the session context to the component tree
pub fn provide_session() {
    provide_context(Session::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn login_lands_on_the_role_panel() {
        with_runtime(|| {
            let session = Session::new();
            session.login(Role::Admin);
            assert_eq!(session.role.get_untracked(), Some(Role::Admin));
            assert_eq!(session.active_panel.get_untracked(), Panel::Graph);
        });
    }

    #[test]
    fn logout_is_idempotent() {
        with_runtime(|| {
            let session = Session::new();
            session.login(Role::Customer);
            session.logout();
            session.logout();
            assert_eq!(session.role.get_untracked(), None);
            assert_eq!(session.active_panel.get_untracked(), Panel::Login);
            assert!(session.history.get_untracked().is_empty());
        });
    }

    #[test]
    fn newer_history_load_supersedes_older_one() {
        with_runtime(|| {
            let session = Session::new();
            session.show(Panel::History);

            let first = session.begin_history_load();
            let second = session.begin_history_load();

            assert!(!session.history_load_is_current(first, Panel::History));
            assert!(session.history_load_is_current(second, Panel::History));
        });
    }

    #[test]
    fn panel_switch_discards_a_late_history_load() {
        with_runtime(|| {
            let session = Session::new();
            session.show(Panel::History);
            let epoch = session.begin_history_load();

            session.show(Panel::Search);
            assert!(!session.history_load_is_current(epoch, Panel::History));
        });
    }
}
