//! Focus targets and the containment policy for open overlays.

use crate::markup::Markup;
use crate::page::Page;
use crate::zoom::ZoomOverlay;
use serde::{Deserialize, Serialize};

/// Which overlays keep keyboard focus inside themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTrapScope {
    /// Only an open modal traps focus, even while the zoom overlay is on top.
    ModalOnly,
    /// Whichever overlay is on top traps focus.
    #[default]
    Topmost,
}

/// The overlay currently holding focus and where to send stray focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapRegion<N> {
    pub container: N,
    pub redirect: Option<N>,
}

/// Element a modal should focus first: its close control, else its first
/// image.
pub fn modal_focus_target<P: Page>(page: &P, markup: &Markup, modal: &P::Node) -> Option<P::Node> {
    page.query_selector(Some(modal), &markup.content_close_selector())
        .or_else(|| page.query_selector(Some(modal), &markup.images_selector()))
}

/// Region focus must stay in, if any overlay is trapping.
pub fn trap_region<P: Page>(
    page: &P,
    markup: &Markup,
    scope: FocusTrapScope,
    open_modal: Option<&P::Node>,
    zoom: Option<&ZoomOverlay<P::Node>>,
) -> Option<TrapRegion<P::Node>> {
    if scope == FocusTrapScope::Topmost
        && let Some(zoom) = zoom.filter(|z| z.is_active())
    {
        return Some(TrapRegion {
            container: zoom.overlay().clone(),
            redirect: Some(zoom.image().clone()),
        });
    }
    let modal = open_modal?;
    Some(TrapRegion {
        container: modal.clone(),
        redirect: modal_focus_target(page, markup, modal),
    })
}
