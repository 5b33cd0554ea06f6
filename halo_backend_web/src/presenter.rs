// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Translates badge state into two absolutely-positioned `<div>` elements —
//! the circle and the count label — by applying incremental updates from
//! [`BadgeChanges`].
//!
//! [`BadgeChanges`]: halo_core::badge::BadgeChanges

use alloc::format;
use alloc::string::String;

use halo_core::backend::Presenter;
use halo_core::badge::{Badge, BadgeChanges, CIRCLE, LABEL};
use halo_core::style::Rgba;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

/// Maps a badge's two primitives to live DOM elements, applying incremental
/// updates from [`BadgeChanges`].
///
/// The presenter owns a host `HtmlElement` (the element the badge decorates)
/// to which the circle and label `<div>`s are appended, circle first so the
/// label renders on top. Call [`apply`](Presenter::apply) each frame with
/// the latest `BadgeChanges` to synchronize the DOM with the badge. Both
/// elements are removed when the presenter is dropped.
pub struct DomPresenter {
    host: HtmlElement,
    elements: [Option<HtmlElement>; 2],
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("host", &"HtmlElement")
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a presenter that decorates `host` with the badge elements.
    #[must_use]
    pub fn new(host: HtmlElement) -> Self {
        Self {
            host,
            elements: [None, None],
        }
    }

    /// Returns a reference to the host element.
    #[must_use]
    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    /// Returns the DOM element for the given slot, if it has been created.
    #[must_use]
    pub fn element(&self, slot: u32) -> Option<&HtmlElement> {
        self.elements
            .get(slot as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Creates the `<div>` for `slot` and appends it to the host.
    fn add_element(&mut self, badge: &Badge, slot: u32) {
        let doc = self.host.owner_document().expect("no owner document");
        let el: HtmlElement = doc
            .create_element("div")
            .expect("create_element failed")
            .unchecked_into();
        let s = el.style();
        let _ = s.set_property("position", "absolute");
        let _ = s.set_property("pointer-events", "none");
        if slot == LABEL {
            let _ = s.set_property("text-align", "center");
            let _ = s.set_property("font-family", "'Helvetica Neue', sans-serif");
        }
        if badge.is_hidden(slot) {
            let _ = s.set_property("display", "none");
        }
        let _ = self.host.append_child(&el);
        self.elements[slot as usize] = Some(el);
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`BadgeChanges`] to the DOM.
    fn apply(&mut self, badge: &Badge, changes: &BadgeChanges) {
        // 1. Additions (circle first, so the label stacks on top)
        for &slot in &changes.added {
            self.add_element(badge, slot);
        }

        // 2. Frames (and the corner radius that rides them)
        for &slot in &changes.frames {
            if let Some(el) = self.element(slot) {
                let frame = badge.frame(slot);
                let s = el.style();
                let _ = s.set_property("left", &px(frame.x0));
                let _ = s.set_property("top", &px(frame.y0));
                let _ = s.set_property("width", &px(frame.width()));
                let _ = s.set_property("height", &px(frame.height()));
                if slot == CIRCLE {
                    let _ = s.set_property("border-radius", &px(badge.corner_radius()));
                } else {
                    // Vertical centering for the single-line count.
                    let _ = s.set_property("line-height", &px(frame.height()));
                }
            }
        }

        // 3. Opacities
        for &slot in &changes.opacities {
            if let Some(el) = self.element(slot) {
                let opacity = badge.opacity(slot);
                let _ = el.style().set_property("opacity", &format!("{opacity}"));
            }
        }

        // 4. Hidden/unhidden
        for &slot in &changes.hidden {
            if let Some(el) = self.element(slot) {
                let _ = el.style().set_property("display", "none");
            }
        }
        for &slot in &changes.unhidden {
            if let Some(el) = self.element(slot) {
                let _ = el.style().remove_property("display");
            }
        }

        // 5. Styles
        for &slot in &changes.styles {
            if let Some(el) = self.element(slot) {
                let s = el.style();
                if slot == CIRCLE {
                    let _ = s.set_property("background-color", &css_color(badge.circle_color()));
                } else {
                    let _ = s.set_property("color", &css_color(badge.label_color()));
                    let _ = s.set_property("font-size", &px(badge.font_size()));
                }
            }
        }

        // 6. Text
        for &slot in &changes.text {
            if let Some(el) = self.element(slot) {
                el.set_text_content(Some(badge.label_text()));
            }
        }
    }
}

impl Drop for DomPresenter {
    fn drop(&mut self) {
        for el in self.elements.iter().flatten() {
            el.remove();
        }
    }
}

/// Formats a CSS pixel length.
fn px(value: f64) -> String {
    format!("{value}px")
}

/// Formats a color as a CSS `rgba()` value.
fn css_color(color: Rgba) -> String {
    format!(
        "rgba({},{},{},{})",
        color.r * 255.0,
        color.g * 255.0,
        color.b * 255.0,
        color.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formats_plain_lengths() {
        assert_eq!(px(15.0), "15px");
        assert_eq!(px(-10.0), "-10px");
        assert_eq!(px(19.5), "19.5px");
    }

    #[test]
    fn css_color_scales_components() {
        assert_eq!(css_color(Rgba::RED), "rgba(255,0,0,1)");
        assert_eq!(css_color(Rgba::WHITE.with_alpha(0.5)), "rgba(255,255,255,0.5)");
    }
}
