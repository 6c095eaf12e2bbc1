//! Storefront Observer

/// Which part of the storefront state an intent changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// Sign-in state
    Session,

    /// Current view or selection
    View,

    /// Product catalog
    Catalog,

    /// Cart contents
    Cart,

    /// Order ledger
    Orders,
}

/// Receives a notification after each successful intent.
///
/// Presentation layers use this in place of framework reactivity: re-read the
/// affected read models when notified. Rejected intents notify nothing.
pub trait StorefrontObserver: Send + Sync {
    /// Called once per changed area, after the change is complete.
    fn on_change(&mut self, change: Change);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StorefrontObserver for NoopObserver {
    fn on_change(&mut self, _change: Change) {}
}

/// Observer that keeps every notification in order.
#[derive(Debug, Default, Clone)]
pub struct ChangeLog {
    changes: Vec<Change>,
}

impl ChangeLog {
    /// Notifications received so far, oldest first.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Take the recorded notifications, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Change> {
        std::mem::take(&mut self.changes)
    }
}

impl StorefrontObserver for ChangeLog {
    fn on_change(&mut self, change: Change) {
        self.changes.push(change);
    }
}
