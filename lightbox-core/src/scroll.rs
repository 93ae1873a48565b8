//! Body scroll suppression shared by the modal and zoom overlays.

use serde::{Deserialize, Serialize};

/// How releasing one overlay's hold interacts with the other overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollLockPolicy {
    /// Locked while a modal is open or the zoom overlay is active.
    #[default]
    Combined,
    /// Closing either overlay unlocks the page even if the other is still
    /// shown. Matches pages written against the original script.
    PerOverlay,
}

/// Which overlay holds the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    Modal,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    policy: ScrollLockPolicy,
    modal: bool,
    zoom: bool,
}

impl ScrollLock {
    #[must_use]
    pub const fn new(policy: ScrollLockPolicy) -> Self {
        Self {
            policy,
            modal: false,
            zoom: false,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> ScrollLockPolicy {
        self.policy
    }

    /// Record a hold; returns whether the page is locked afterwards.
    pub const fn acquire(&mut self, holder: Holder) -> bool {
        match holder {
            Holder::Modal => self.modal = true,
            Holder::Zoom => self.zoom = true,
        }
        self.is_locked()
    }

    /// Drop a hold; returns whether the page is still locked afterwards.
    pub const fn release(&mut self, holder: Holder) -> bool {
        match self.policy {
            ScrollLockPolicy::Combined => match holder {
                Holder::Modal => self.modal = false,
                Holder::Zoom => self.zoom = false,
            },
            ScrollLockPolicy::PerOverlay => {
                self.modal = false;
                self.zoom = false;
            }
        }
        self.is_locked()
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.modal || self.zoom
    }
}
