// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge state: count, visibility, style, and the mutation API.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::dirty;
use crate::style::Rgba;

/// Slot index of the filled circle primitive.
pub const CIRCLE: u32 = 0;

/// Slot index of the count label primitive.
pub const LABEL: u32 = 1;

/// Number of primitive slots a badge owns.
pub const PRIMITIVE_COUNT: u32 = 2;

/// A count badge attached to a single host view.
///
/// All mutations mark dirty channels; call [`evaluate`](Self::evaluate) to
/// drain them into a [`BadgeChanges`](super::BadgeChanges) for the backend.
#[derive(Debug)]
pub struct Badge {
    // -- Count state --
    pub(crate) count: u32,
    pub(crate) order_of_magnitude: u32,
    pub(crate) indeterminate: bool,

    // -- Geometry --
    pub(crate) base_frame: Rect,
    pub(crate) initial_frame: Rect,
    pub(crate) initial_center: Point,
    pub(crate) frames: [Rect; 2],
    pub(crate) corner_radius: f64,
    pub(crate) font_size: f64,

    // -- Appearance --
    pub(crate) opacities: [f64; 2],
    pub(crate) resting_opacity: f64,
    pub(crate) hidden: [bool; 2],
    pub(crate) presented_hidden: [bool; 2],
    pub(crate) circle_color: Rgba,
    pub(crate) label_color: Rgba,
    pub(crate) label_text: String,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) pending_added: Vec<u32>,
}

impl Badge {
    /// Creates a badge with zeroed geometry and default styling.
    ///
    /// Constructors in the geometry module place the frame and apply the
    /// initial count before handing the badge out.
    pub(crate) fn bare() -> Self {
        Self {
            count: 0,
            order_of_magnitude: 1,
            indeterminate: false,
            base_frame: Rect::ZERO,
            initial_frame: Rect::ZERO,
            initial_center: Point::ORIGIN,
            frames: [Rect::ZERO; 2],
            corner_radius: 0.0,
            font_size: 0.0,
            opacities: [1.0; 2],
            resting_opacity: 1.0,
            hidden: [false; 2],
            presented_hidden: [false; 2],
            circle_color: Rgba::RED,
            label_color: Rgba::WHITE,
            label_text: String::new(),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: vec![CIRCLE, LABEL],
        }
    }

    // -- Count API --

    /// Returns the current count.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Increases the count by 1.
    pub fn increment(&mut self) {
        self.increment_by(1);
    }

    /// Increases the count by `amount`, saturating at `u32::MAX`.
    pub fn increment_by(&mut self, amount: u32) {
        let next = self.count.saturating_add(amount);
        self.apply_count(next);
    }

    /// Decreases the count by 1.
    pub fn decrement(&mut self) {
        self.decrement_by(1);
    }

    /// Decreases the count by `amount`, flooring at 0.
    pub fn decrement_by(&mut self, amount: u32) {
        let next = if amount >= self.count {
            0
        } else {
            self.count - amount
        };
        self.apply_count(next);
    }

    /// Writes a new count and re-derives label text, visibility, and
    /// digit-fit geometry.
    pub(crate) fn apply_count(&mut self, next: u32) {
        self.count = next;
        if next != 0 {
            self.label_text = format!("{next}");
            self.dirty.mark(LABEL, dirty::TEXT);
        }
        self.check_zero();
        if next != 0 {
            self.expand_to_fit_digits();
        }
    }

    // -- Indeterminate mode --

    /// Returns whether the count label is suppressed.
    #[must_use]
    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Hides the count label while keeping the circle visible
    /// (indeterminate mode).
    pub fn hide_count(&mut self) {
        self.indeterminate = true;
        self.set_hidden(LABEL, true);
    }

    /// Leaves indeterminate mode and re-evaluates the zero-count rule.
    pub fn show_count(&mut self) {
        self.indeterminate = false;
        self.check_zero();
    }

    /// Applies the zero-count visibility rule: a zero count hides both
    /// primitives; a non-zero count shows the circle and, outside
    /// indeterminate mode, the label.
    pub(crate) fn check_zero(&mut self) {
        if self.count == 0 {
            self.set_hidden(CIRCLE, true);
            self.set_hidden(LABEL, true);
        } else {
            self.set_hidden(CIRCLE, false);
            if !self.indeterminate {
                self.set_hidden(LABEL, false);
            }
        }
    }

    // -- Style API --

    /// Sets the circle fill color and the label text color.
    pub fn set_color(&mut self, circle: Rgba, label: Rgba) {
        self.circle_color = circle;
        self.label_color = label;
        self.dirty.mark(CIRCLE, dirty::STYLE);
        self.dirty.mark(LABEL, dirty::STYLE);
    }

    /// Sets the resting opacity of both primitives.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.resting_opacity = alpha;
        self.opacities = [alpha; 2];
        self.dirty.mark(CIRCLE, dirty::OPACITY);
        self.dirty.mark(LABEL, dirty::OPACITY);
    }

    /// Sets the label font size.
    ///
    /// [`set_frame`](Self::set_frame) re-derives the font size from the
    /// frame width; call this afterwards to override it.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.dirty.mark(LABEL, dirty::STYLE);
    }

    // -- Read-only getters --

    /// Returns the current order of magnitude driving digit-fit expansion.
    #[must_use]
    pub fn order_of_magnitude(&self) -> u32 {
        self.order_of_magnitude
    }

    /// Returns the authoritative circle frame after digit-fit expansion.
    #[must_use]
    pub fn base_frame(&self) -> Rect {
        self.base_frame
    }

    /// Returns the rect set by the last [`set_frame`](Self::set_frame) call,
    /// before digit-fit expansion.
    #[must_use]
    pub fn initial_frame(&self) -> Rect {
        self.initial_frame
    }

    /// Returns the resting center of the circle (and label).
    #[must_use]
    pub fn initial_center(&self) -> Point {
        self.initial_center
    }

    /// Returns the current frame of the primitive at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a valid primitive slot.
    #[must_use]
    pub fn frame(&self, slot: u32) -> Rect {
        validate_slot(slot);
        self.frames[slot as usize]
    }

    /// Returns the circle's current corner radius.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Returns the label font size.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Returns the current opacity of the primitive at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a valid primitive slot.
    #[must_use]
    pub fn opacity(&self, slot: u32) -> f64 {
        validate_slot(slot);
        self.opacities[slot as usize]
    }

    /// Returns whether the primitive at `slot` is hidden.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a valid primitive slot.
    #[must_use]
    pub fn is_hidden(&self, slot: u32) -> bool {
        validate_slot(slot);
        self.hidden[slot as usize]
    }

    /// Returns the circle fill color.
    #[must_use]
    pub fn circle_color(&self) -> Rgba {
        self.circle_color
    }

    /// Returns the label text color.
    #[must_use]
    pub fn label_color(&self) -> Rgba {
        self.label_color
    }

    /// Returns the label text.
    #[must_use]
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    // -- Animated property writes (player only) --

    /// Writes an animated opacity to both primitives without touching the
    /// resting opacity.
    pub(crate) fn apply_opacity(&mut self, opacity: f64) {
        self.opacities = [opacity; 2];
        self.dirty.mark(CIRCLE, dirty::OPACITY);
        self.dirty.mark(LABEL, dirty::OPACITY);
    }

    // -- Internal helpers --

    /// Sets a primitive's hidden flag, marking VISIBILITY on change.
    fn set_hidden(&mut self, slot: u32, hidden: bool) {
        if self.hidden[slot as usize] != hidden {
            self.hidden[slot as usize] = hidden;
            self.dirty.mark(slot, dirty::VISIBILITY);
        }
    }

    /// Writes `frame` to both primitives and marks the FRAME channel.
    pub(crate) fn write_frames(&mut self, frame: Rect) {
        self.frames = [frame; 2];
        self.dirty.mark(CIRCLE, dirty::FRAME);
        self.dirty.mark(LABEL, dirty::FRAME);
    }
}

/// Panics if `slot` is out of range.
fn validate_slot(slot: u32) {
    assert!(
        slot < PRIMITIVE_COUNT,
        "invalid primitive slot {slot} (badge owns {PRIMITIVE_COUNT})"
    );
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    fn badge_with_count(count: u32) -> Badge {
        Badge::attached(Size::new(70.0, 70.0), count)
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut badge = badge_with_count(3);
        badge.decrement_by(5);
        assert_eq!(badge.count(), 0);

        let mut badge = badge_with_count(4);
        badge.decrement_by(4);
        assert_eq!(badge.count(), 0, "amount == count clamps to zero");
    }

    #[test]
    fn decrement_below_current_subtracts() {
        let mut badge = badge_with_count(10);
        badge.decrement_by(3);
        assert_eq!(badge.count(), 7);
        badge.decrement();
        assert_eq!(badge.count(), 6);
    }

    #[test]
    fn increment_saturates() {
        let mut badge = badge_with_count(u32::MAX - 1);
        badge.increment_by(10);
        assert_eq!(badge.count(), u32::MAX);
    }

    #[test]
    fn zero_count_hides_both_primitives() {
        let badge = badge_with_count(0);
        assert!(badge.is_hidden(CIRCLE));
        assert!(badge.is_hidden(LABEL));
    }

    #[test]
    fn nonzero_count_shows_circle_and_label() {
        let mut badge = badge_with_count(0);
        badge.increment();
        assert!(!badge.is_hidden(CIRCLE));
        assert!(!badge.is_hidden(LABEL));
    }

    #[test]
    fn decrement_to_zero_hides_again() {
        let mut badge = badge_with_count(2);
        badge.decrement_by(2);
        assert!(badge.is_hidden(CIRCLE));
        assert!(badge.is_hidden(LABEL));
    }

    #[test]
    fn indeterminate_mode_suppresses_label_only() {
        let mut badge = badge_with_count(5);
        badge.hide_count();
        assert!(badge.is_indeterminate());
        assert!(!badge.is_hidden(CIRCLE));
        assert!(badge.is_hidden(LABEL));

        badge.increment();
        assert!(badge.is_hidden(LABEL), "label stays hidden across mutations");

        badge.show_count();
        assert!(!badge.is_hidden(LABEL));
    }

    #[test]
    fn show_count_respects_zero() {
        let mut badge = badge_with_count(0);
        badge.hide_count();
        badge.show_count();
        assert!(badge.is_hidden(CIRCLE));
        assert!(badge.is_hidden(LABEL), "zero count wins over show_count");
    }

    #[test]
    fn label_text_tracks_count() {
        let mut badge = badge_with_count(0);
        badge.increment_by(42);
        assert_eq!(badge.label_text(), "42");
        badge.decrement_by(100);
        // A zero count hides the label; the text is left as-is.
        assert_eq!(badge.label_text(), "42");
    }

    #[test]
    fn set_alpha_updates_both_primitives() {
        let mut badge = badge_with_count(1);
        badge.set_alpha(0.5);
        assert_eq!(badge.opacity(CIRCLE), 0.5);
        assert_eq!(badge.opacity(LABEL), 0.5);
    }

    #[test]
    fn set_color_is_readable_back() {
        let mut badge = badge_with_count(1);
        badge.set_color(Rgba::new(0.2, 0.4, 0.6, 1.0), Rgba::CLEAR);
        assert_eq!(badge.circle_color(), Rgba::new(0.2, 0.4, 0.6, 1.0));
        assert_eq!(badge.label_color(), Rgba::CLEAR);
    }

    #[test]
    #[should_panic(expected = "invalid primitive slot")]
    fn out_of_range_slot_panics() {
        let badge = badge_with_count(1);
        let _ = badge.frame(2);
    }
}
