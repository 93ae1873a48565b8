//! The overlay state machine.
//!
//! One [`OverlayController`] owns the page for its lifetime. Platform
//! front-ends forward raw events to the `on_*` handlers and apply the
//! returned [`EventOutcome`] to the native event.

use crate::config::ControllerConfig;
use crate::focus::{self, TrapRegion};
use crate::i18n;
use crate::ident::TriggerIdGenerator;
use crate::keys;
use crate::page::{ARIA_HIDDEN, Page, TAB_INDEX, report};
use crate::scroll::{Holder, ScrollLock};
use crate::zoom::{self, ZoomOverlay};

/// What the front-end should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The controller acted on the event.
    pub handled: bool,
    /// The event's default action must be suppressed.
    pub prevent_default: bool,
}

impl EventOutcome {
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };
    pub const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };
    pub const CONSUMED: Self = Self {
        handled: true,
        prevent_default: true,
    };

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            handled: self.handled || other.handled,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}

/// The overlay layer currently on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topmost<N> {
    Modal(N),
    Zoom,
}

pub struct OverlayController<P: Page> {
    page: P,
    config: ControllerConfig,
    lang: &'static str,
    fallback_alt: String,
    ids: TriggerIdGenerator,
    scroll: ScrollLock,
    zoom: Option<ZoomOverlay<P::Node>>,
    open_modal: Option<P::Node>,
    initialized: bool,
}

impl<P: Page> OverlayController<P> {
    /// Build a controller over `page`. Nothing in the page changes until
    /// [`OverlayController::init`] runs.
    ///
    /// `seed` feeds the trigger id generator.
    pub fn new(page: P, config: ControllerConfig, seed: u64) -> Self {
        let lang = i18n::resolve_lang(config.locale.as_deref(), page.document_lang().as_deref());
        let ids = TriggerIdGenerator::new(config.trigger_id_prefix.clone(), seed);
        let scroll = ScrollLock::new(config.scroll_lock);
        Self {
            page,
            fallback_alt: i18n::fallback_alt(lang),
            lang,
            config,
            ids,
            scroll,
            zoom: None,
            open_modal: None,
            initialized: false,
        }
    }

    /// One-time page setup: zoom overlay, image handlers, and adoption of a
    /// modal the page was served with already visible.
    ///
    /// Returns `false` without touching the page when already initialized.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            log::debug!("overlay controller already initialized");
            return false;
        }
        self.initialized = true;

        match ZoomOverlay::ensure(
            &mut self.page,
            &self.config.markup,
            &self.fallback_alt,
            &i18n::dismiss_label(self.lang),
        ) {
            Ok(zoom) => {
                if zoom.is_active() {
                    log::debug!("adopting zoom overlay active at load");
                    let locked = self.scroll.acquire(Holder::Zoom);
                    self.apply_scroll(locked);
                }
                self.zoom = Some(zoom);
            }
            Err(err) => log::warn!("zoom overlay unavailable: {err}"),
        }

        let images = self
            .page
            .query_selector_all(None, &self.config.markup.all_images_selector());
        for image in &images {
            self.prepare_image(image);
        }

        self.adopt_visible_modal();
        log::info!(
            "overlay controller ready ({} images, locale {})",
            images.len(),
            self.lang
        );
        true
    }

    fn adopt_visible_modal(&mut self) {
        let visible = self
            .page
            .query_selector_all(None, &self.config.markup.modal_selector())
            .into_iter()
            .find(|modal| self.page.style(modal, "display") == "flex");
        if let Some(modal) = visible {
            log::debug!("adopting modal visible at load: {modal:?}");
            self.open_modal = Some(modal);
            let locked = self.scroll.acquire(Holder::Modal);
            self.apply_scroll(locked);
        }
    }

    /// Make `image` keyboard focusable and bind its zoom handlers once.
    pub fn prepare_image(&mut self, image: &P::Node) {
        report(
            self.page.set_attribute(image, TAB_INDEX, "0"),
            "make image focusable",
        );
        let marker = &self.config.markup.zoom_marker_attribute;
        if self.page.attribute(image, marker).is_some() {
            return;
        }
        match self.page.bind_zoom_handlers(image) {
            Ok(()) => report(
                self.page.set_attribute(image, marker, "1"),
                "mark zoom handlers",
            ),
            Err(err) => log::warn!("binding zoom handlers failed: {err}"),
        }
    }

    /// Show `modal`, remember `trigger` for focus restoration and move focus
    /// inside. A different modal already open is hidden first.
    pub fn open_modal(&mut self, modal: Option<&P::Node>, trigger: Option<&P::Node>) {
        let Some(modal) = modal else {
            return;
        };
        if let Some(previous) = self.open_modal.take()
            && previous != *modal
        {
            log::debug!("replacing open modal {previous:?}");
            self.hide_modal(&previous);
        }

        report(self.page.set_style(modal, "display", "flex"), "show modal");
        report(
            self.page.set_attribute(modal, ARIA_HIDDEN, "false"),
            "expose modal",
        );

        let trigger_id = trigger
            .map(|trigger| self.ensure_trigger_id(trigger))
            .unwrap_or_default();
        let record = &self.config.markup.trigger_record_attribute;
        let recorded = if trigger_id.is_empty() {
            self.page.remove_attribute(modal, record)
        } else {
            self.page.set_attribute(modal, record, &trigger_id)
        };
        report(recorded, "record modal trigger");

        self.open_modal = Some(modal.clone());
        if let Some(target) = focus::modal_focus_target(&self.page, &self.config.markup, modal) {
            report(self.page.focus(&target), "focus modal");
        }
        let locked = self.scroll.acquire(Holder::Modal);
        self.apply_scroll(locked);
    }

    /// Hide `modal` and hand focus back to the element that opened it.
    ///
    /// A modal other than the one on screen is only hidden: the scroll hold
    /// and focus belong to the visible modal.
    pub fn close_modal(&mut self, modal: Option<&P::Node>) {
        let Some(modal) = modal else {
            return;
        };
        let on_screen = match self.open_modal.as_ref() {
            Some(open) => open == modal,
            None => self.page.style(modal, "display") == "flex",
        };
        self.hide_modal(modal);
        if !on_screen {
            log::debug!("closing modal {modal:?} that is not on screen");
            return;
        }
        self.open_modal = None;
        let locked = self.scroll.release(Holder::Modal);
        self.apply_scroll(locked);

        let trigger = self
            .page
            .attribute(modal, &self.config.markup.trigger_record_attribute)
            .filter(|id| !id.is_empty())
            .and_then(|id| self.page.element_by_id(&id));
        if let Some(trigger) = trigger {
            report(self.page.focus(&trigger), "restore trigger focus");
        }
    }

    fn hide_modal(&mut self, modal: &P::Node) {
        report(self.page.set_style(modal, "display", "none"), "hide modal");
        report(
            self.page.set_attribute(modal, ARIA_HIDDEN, "true"),
            "conceal modal",
        );
    }

    fn ensure_trigger_id(&mut self, trigger: &P::Node) -> String {
        let existing = self.page.id(trigger);
        if !existing.is_empty() {
            return existing;
        }
        let page = &self.page;
        let id = self
            .ids
            .fresh_id(|candidate| page.element_by_id(candidate).is_some());
        report(self.page.set_id(trigger, &id), "assign trigger id");
        id
    }

    /// Show the zoom overlay with `image`'s picture and focus it.
    pub fn open_zoom(&mut self, image: Option<&P::Node>) {
        let Some(image) = image else {
            return;
        };
        let Some(overlay) = self.zoom.as_mut() else {
            log::debug!("zoom requested before the overlay exists");
            return;
        };
        let source = zoom::resolve_source(
            &self.page,
            image,
            &self.config.markup.source_fallback_attribute,
        );
        let alt = zoom::resolve_alt(&self.page, image, &self.fallback_alt);
        overlay.show(&mut self.page, &self.config.markup, &source, &alt, image);
        let zoom_image = overlay.image().clone();

        let locked = self.scroll.acquire(Holder::Zoom);
        self.apply_scroll(locked);
        report(
            self.page.set_attribute(&zoom_image, TAB_INDEX, "0"),
            "make zoom image focusable",
        );
        report(self.page.focus(&zoom_image), "focus zoom image");
    }

    /// Hide the zoom overlay and clear its picture.
    pub fn close_zoom(&mut self) {
        let Some(overlay) = self.zoom.as_mut() else {
            return;
        };
        let origin = overlay.hide(&mut self.page, &self.config.markup);
        let locked = self.scroll.release(Holder::Zoom);
        self.apply_scroll(locked);

        if self.config.restore_zoom_focus
            && let Some(origin) = origin
            && self.page.is_connected(&origin)
        {
            report(self.page.focus(&origin), "restore image focus");
        }
    }

    fn apply_scroll(&mut self, locked: bool) {
        let Some(body) = self.page.body() else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        report(
            self.page.set_style(&body, "overflow", value),
            "toggle body scroll",
        );
    }

    /// Document-level click: opens modals from triggers, closes them from
    /// close controls.
    pub fn on_document_click(&mut self, target: &P::Node) -> EventOutcome {
        let opened = self.dispatch_trigger(target);
        let closed = self.dispatch_close_control(target);
        opened.merge(closed)
    }

    fn dispatch_trigger(&mut self, target: &P::Node) -> EventOutcome {
        let Some(link) = self
            .page
            .closest(target, &self.config.markup.trigger_selector())
        else {
            return EventOutcome::IGNORED;
        };

        let modal_id = self
            .page
            .attribute(&link, &self.config.markup.target_attribute)
            .filter(|id| !id.is_empty());
        let Some(modal_id) = modal_id else {
            log::debug!("trigger {link:?} names no modal");
            return EventOutcome::CONSUMED;
        };
        let Some(modal) = self.page.element_by_id(&modal_id) else {
            log::debug!("trigger {link:?} names missing modal #{modal_id}");
            return EventOutcome::CONSUMED;
        };

        self.ensure_trigger_id(&link);
        let images = self
            .page
            .query_selector_all(Some(&modal), &self.config.markup.images_selector());
        for image in &images {
            self.prepare_image(image);
        }
        self.open_modal(Some(&modal), Some(&link));
        EventOutcome::CONSUMED
    }

    fn dispatch_close_control(&mut self, target: &P::Node) -> EventOutcome {
        let Some(button) = self
            .page
            .closest(target, &self.config.markup.close_selector())
        else {
            return EventOutcome::IGNORED;
        };
        let Some(modal) = self
            .page
            .closest(&button, &self.config.markup.modal_selector())
        else {
            return EventOutcome::IGNORED;
        };
        self.close_modal(Some(&modal));
        EventOutcome::HANDLED
    }

    /// Window-level click: a click landing on a modal's backdrop itself
    /// closes that modal.
    pub fn on_window_click(&mut self, target: &P::Node) -> EventOutcome {
        if !self.page.has_class(target, &self.config.markup.modal_class) {
            return EventOutcome::IGNORED;
        }
        self.close_modal(Some(target));
        EventOutcome::HANDLED
    }

    /// Escape closes the zoom overlay if shown, otherwise the open modal.
    pub fn on_document_keydown(&mut self, key: &str) -> EventOutcome {
        if !keys::is_escape(key) {
            return EventOutcome::IGNORED;
        }
        if self.is_zoom_active() {
            self.close_zoom();
            return EventOutcome::HANDLED;
        }
        if let Some(modal) = self.open_modal.clone() {
            self.close_modal(Some(&modal));
            return EventOutcome::HANDLED;
        }
        EventOutcome::IGNORED
    }

    pub fn on_image_click(&mut self, image: &P::Node) -> EventOutcome {
        self.open_zoom(Some(image));
        EventOutcome::HANDLED
    }

    /// Enter or Space on a focused image zooms it.
    pub fn on_image_keydown(&mut self, image: &P::Node, key: &str) -> EventOutcome {
        if !keys::is_activation_key(key) {
            return EventOutcome::IGNORED;
        }
        self.open_zoom(Some(image));
        EventOutcome::CONSUMED
    }

    /// Any click on the zoom overlay, its image included, dismisses it.
    pub fn on_zoom_click(&mut self) -> EventOutcome {
        self.close_zoom();
        EventOutcome::HANDLED
    }

    /// Pull focus back inside the trapping overlay when it lands elsewhere.
    pub fn on_focus_in(&mut self, target: &P::Node) -> EventOutcome {
        let region = focus::trap_region(
            &self.page,
            &self.config.markup,
            self.config.focus_trap,
            self.open_modal.as_ref(),
            self.zoom.as_ref(),
        );
        let Some(TrapRegion {
            container,
            redirect,
        }) = region
        else {
            return EventOutcome::IGNORED;
        };
        if self.page.contains(&container, target) {
            return EventOutcome::IGNORED;
        }
        if let Some(redirect) = redirect {
            report(self.page.focus(&redirect), "contain focus");
        }
        EventOutcome::HANDLED
    }

    #[must_use]
    pub fn topmost(&self) -> Option<Topmost<P::Node>> {
        if self.is_zoom_active() {
            return Some(Topmost::Zoom);
        }
        self.open_modal.clone().map(Topmost::Modal)
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub const fn open_modal_node(&self) -> Option<&P::Node> {
        self.open_modal.as_ref()
    }

    #[must_use]
    pub fn is_zoom_active(&self) -> bool {
        self.zoom.as_ref().is_some_and(ZoomOverlay::is_active)
    }

    #[must_use]
    pub const fn zoom_overlay(&self) -> Option<&ZoomOverlay<P::Node>> {
        self.zoom.as_ref()
    }

    #[must_use]
    pub const fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.lang
    }

    #[must_use]
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}
