//! One controller per page, reached from every listener.
//!
//! The controller lives in a thread-local slot. Listeners borrow it for the
//! duration of one handler; an event delivered synchronously while a handler
//! runs (the `focusin` raised by the controller's own `focus()` calls) finds
//! the slot busy and is skipped.

use crate::config;
use crate::dom;
use crate::error::WebError;
use crate::events::EventBinding;
use crate::page::DomPage;
use lightbox_core::{ControllerConfig, EventOutcome, OverlayController};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Event;

thread_local! {
    static CONTROLLER: RefCell<Option<OverlayController<DomPage>>> = const { RefCell::new(None) };
    static GLOBAL_BINDINGS: RefCell<Vec<EventBinding>> = const { RefCell::new(Vec::new()) };
}

/// Run `handler` against the installed controller.
///
/// Returns `None` when nothing is installed or a handler is already running.
pub(crate) fn dispatch<R>(
    handler: impl FnOnce(&mut OverlayController<DomPage>) -> R,
) -> Option<R> {
    CONTROLLER.with(|slot| {
        let Ok(mut guard) = slot.try_borrow_mut() else {
            log::trace!("event raised during dispatch skipped");
            return None;
        };
        guard.as_mut().map(handler)
    })
}

pub(crate) fn apply(event: &Event, outcome: EventOutcome) {
    if outcome.prevent_default {
        event.prevent_default();
    }
}

/// Inspect the installed controller.
pub fn with_controller<R>(inspect: impl FnOnce(&OverlayController<DomPage>) -> R) -> Option<R> {
    CONTROLLER.with(|slot| slot.try_borrow().ok()?.as_ref().map(inspect))
}

/// Whether this page already has a controller.
#[must_use]
pub fn is_installed() -> bool {
    CONTROLLER.with(|slot| slot.try_borrow().map_or(true, |guard| guard.is_some()))
}

/// Initialize the controller for the current document and attach the
/// document click, window click, document keydown and document focusin
/// listeners, plus the zoom overlay's own click listener.
///
/// Returns `Ok(false)` without touching the page when already installed.
///
/// # Errors
///
/// Returns an error if there is no window or document, or a listener cannot
/// be attached. A failed install leaves nothing behind.
pub fn install(config: ControllerConfig) -> Result<bool, WebError> {
    if is_installed() {
        log::debug!("lightbox already installed");
        return Ok(false);
    }
    let window = dom::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let mut controller =
        OverlayController::new(DomPage::new(document.clone()), config, dom::entropy_seed());
    controller.init();
    let zoom = controller.zoom_overlay().map(|zoom| zoom.overlay().clone());
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    match global_bindings(&window, &document, zoom.as_ref()) {
        Ok(bindings) => {
            GLOBAL_BINDINGS.with(|slot| slot.borrow_mut().extend(bindings));
            Ok(true)
        }
        Err(err) => {
            uninstall();
            Err(err)
        }
    }
}

fn global_bindings(
    window: &web_sys::Window,
    document: &web_sys::Document,
    zoom: Option<&web_sys::Element>,
) -> Result<Vec<EventBinding>, WebError> {
    let mut bindings = vec![
        EventBinding::new(document, "click", |event| {
            if let Some(target) = dom::element_target(&event)
                && let Some(outcome) = dispatch(|c| c.on_document_click(&target))
            {
                apply(&event, outcome);
            }
        }),
        EventBinding::new(window, "click", |event| {
            if let Some(target) = dom::element_target(&event) {
                dispatch(|c| c.on_window_click(&target));
            }
        }),
        EventBinding::new(document, "keydown", |event| {
            if let Some(key) = dom::event_key(&event)
                && let Some(outcome) = dispatch(|c| c.on_document_keydown(&key))
            {
                apply(&event, outcome);
            }
        }),
        EventBinding::new(document, "focusin", |event| {
            if let Some(target) = dom::element_target(&event) {
                dispatch(|c| c.on_focus_in(&target));
            }
        }),
    ];
    if let Some(zoom) = zoom {
        bindings.push(EventBinding::new(zoom, "click", |_event| {
            dispatch(OverlayController::on_zoom_click);
        }));
    }
    bindings
        .into_iter()
        .map(|binding| binding.map_err(|err| WebError::listener(&err)))
        .collect()
}

/// Detach every listener and drop the controller. Images lose their
/// binding marker; other markup keeps the state the controller left it in.
pub fn uninstall() {
    let bindings = GLOBAL_BINDINGS.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    drop(bindings);
    if let Some(mut controller) = CONTROLLER.with(RefCell::take) {
        let marker = controller.config().markup.zoom_marker_attribute.clone();
        controller.page_mut().unbind_images(&marker);
    }
}

/// Install using the page's embedded configuration.
///
/// # Errors
///
/// See [`install`].
pub fn install_from_page() -> Result<bool, WebError> {
    let document = dom::document().ok_or(WebError::NoDocument)?;
    install(config::load_page_config(&document))
}

fn report_install() {
    match install_from_page() {
        Ok(true) => log::info!("lightbox installed"),
        Ok(false) => {}
        Err(err) => dom::console_error(&format!("Failed to install lightbox: {err}")),
    }
}

/// Install now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn install_when_ready() {
    let Some(document) = dom::document() else {
        dom::console_error("Failed to install lightbox: document unavailable");
        return;
    };
    if document.ready_state() != "loading" {
        report_install();
        return;
    }
    let ready = Closure::once(report_install);
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
    {
        dom::console_error(&format!(
            "Failed to defer lightbox install: {}",
            dom::js_error_message(&err)
        ));
    }
    ready.forget();
}
