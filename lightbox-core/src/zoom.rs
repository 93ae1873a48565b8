//! The shared full-page zoom overlay.

use crate::error::PageError;
use crate::markup::Markup;
use crate::page::{ARIA_HIDDEN, Page, report};

/// Handles to the singleton overlay and its image, plus its shown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomOverlay<N> {
    overlay: N,
    image: N,
    active: bool,
    origin: Option<N>,
}

impl<N: Clone + PartialEq> ZoomOverlay<N> {
    /// Locate the overlay in the page, synthesizing it when absent.
    ///
    /// An existing overlay without an image gets one appended. A synthesized
    /// overlay starts hidden and carries `fallback_alt` on its image.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay has to be created and the page has no
    /// body, or the elements cannot be created or attached.
    pub fn ensure<P: Page<Node = N>>(
        page: &mut P,
        markup: &Markup,
        fallback_alt: &str,
        dismiss_label: &str,
    ) -> Result<Self, PageError> {
        let overlay = if let Some(existing) = page.query_selector(None, &markup.zoom_selector()) {
            existing
        } else {
            let body = page.body().ok_or(PageError::MissingBody)?;
            let overlay = page.create_element("div")?;
            page.add_class(&overlay, &markup.zoom_class)?;
            page.set_attribute(&overlay, ARIA_HIDDEN, "true")?;
            page.set_attribute(&overlay, "aria-label", dismiss_label)?;
            page.append_child(&body, &overlay)?;
            log::debug!("synthesized zoom overlay");
            overlay
        };

        let image = if let Some(existing) = page.query_selector(Some(&overlay), "img") {
            existing
        } else {
            let image = page.create_element("img")?;
            page.set_attribute(&image, "src", "")?;
            page.set_attribute(&image, "alt", fallback_alt)?;
            page.append_child(&overlay, &image)?;
            image
        };

        let active = page.has_class(&overlay, &markup.active_class);
        Ok(Self {
            overlay,
            image,
            active,
            origin: None,
        })
    }

    #[must_use]
    pub const fn overlay(&self) -> &N {
        &self.overlay
    }

    #[must_use]
    pub const fn image(&self) -> &N {
        &self.image
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Image that opened the overlay, while it is shown.
    #[must_use]
    pub const fn origin(&self) -> Option<&N> {
        self.origin.as_ref()
    }

    pub(crate) fn show<P: Page<Node = N>>(
        &mut self,
        page: &mut P,
        markup: &Markup,
        source: &str,
        alt: &str,
        origin: &N,
    ) {
        report(page.set_image_source(&self.image, source), "set zoom source");
        report(page.set_image_alt(&self.image, alt), "set zoom alt");
        report(page.add_class(&self.overlay, &markup.active_class), "activate zoom");
        report(page.set_attribute(&self.overlay, ARIA_HIDDEN, "false"), "expose zoom");
        self.active = true;
        self.origin = Some(origin.clone());
    }

    /// Hide the overlay, returning the image that opened it.
    pub(crate) fn hide<P: Page<Node = N>>(&mut self, page: &mut P, markup: &Markup) -> Option<N> {
        report(page.remove_class(&self.overlay, &markup.active_class), "deactivate zoom");
        report(page.set_attribute(&self.overlay, ARIA_HIDDEN, "true"), "hide zoom");
        report(page.set_image_source(&self.image, ""), "clear zoom source");
        self.active = false;
        self.origin.take()
    }
}

/// Source shown when zooming `image`: its live source, then the fallback
/// attribute, then nothing.
pub fn resolve_source<P: Page>(page: &P, image: &P::Node, fallback_attribute: &str) -> String {
    let live = page.image_source(image);
    if !live.is_empty() {
        return live;
    }
    page.attribute(image, fallback_attribute)
        .filter(|src| !src.is_empty())
        .unwrap_or_default()
}

/// Alternative text shown when zooming `image`.
pub fn resolve_alt<P: Page>(page: &P, image: &P::Node, fallback: &str) -> String {
    let alt = page.image_alt(image);
    if alt.is_empty() {
        fallback.to_string()
    } else {
        alt
    }
}
