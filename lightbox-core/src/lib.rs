//! Lightbox overlay engine
//!
//! Platform-agnostic controller for page galleries: image modals opened from
//! trigger elements, a shared full-page zoom overlay, focus containment and
//! keyboard dismissal. The page itself is reached through the [`Page`] trait;
//! browser bindings live in `lightbox-web`.

pub mod config;
pub mod controller;
pub mod error;
pub mod focus;
pub mod i18n;
pub mod ident;
pub mod keys;
pub mod markup;
pub mod memory;
pub mod page;
pub mod scroll;
pub mod zoom;

// Re-export commonly used types
pub use config::ControllerConfig;
pub use controller::{EventOutcome, OverlayController, Topmost};
pub use error::{ConfigError, PageError};
pub use focus::{FocusTrapScope, TrapRegion};
pub use ident::TriggerIdGenerator;
pub use markup::Markup;
pub use memory::{MemoryPage, NodeId};
pub use page::{ARIA_HIDDEN, Page, TAB_INDEX};
pub use scroll::{Holder, ScrollLock, ScrollLockPolicy};
pub use zoom::ZoomOverlay;
