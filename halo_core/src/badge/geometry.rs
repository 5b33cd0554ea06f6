// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame placement, scaling, and digit-fit expansion.

use kurbo::{Point, Rect, Size, Vec2};

use crate::dirty;

use super::state::{Badge, LABEL};

/// Default badge diameter in host units.
pub const DEFAULT_DIAMETER: f64 = 30.0;

/// Width growth per order of magnitude above the first.
const WIDTH_ADAPTATION_RATIO: f64 = 0.3;

impl Badge {
    /// Creates a badge attached to the top-right corner of a host view of
    /// the given size, with an initial count (0 hides the badge).
    ///
    /// The circle lands at `(host_width − ⅔·D, −D/3)` with diameter
    /// `D =` [`DEFAULT_DIAMETER`].
    ///
    /// # Panics
    ///
    /// Panics if `host_size` is not finite.
    #[must_use]
    pub fn attached(host_size: Size, initial_count: u32) -> Self {
        assert!(host_size.is_finite(), "host size must be finite");
        let mut badge = Self::bare();
        let d = DEFAULT_DIAMETER;
        badge.set_frame(Rect::from_origin_size(
            Point::new(host_size.width - d * 2.0 / 3.0, -d / 3.0),
            Size::new(d, d),
        ));
        badge.apply_count(initial_count);
        badge
    }

    /// Creates a badge sized for compact hosts such as bar items: attached,
    /// then scaled to 0.7× and nudged 5 units left.
    ///
    /// # Panics
    ///
    /// Panics if `host_size` is not finite.
    #[must_use]
    pub fn compact(host_size: Size, initial_count: u32) -> Self {
        let mut badge = Self::attached(host_size, initial_count);
        badge.scale_by(0.7);
        badge.move_by(-5.0, 0.0);
        badge
    }

    /// Sets the circle frame relative to the host view.
    ///
    /// This is the authoritative frame setter: it stores the rect as both
    /// `initial_frame` and `base_frame`, recomputes the resting center,
    /// mirrors the label frame, derives the corner radius (height/2) and
    /// label font size (width/2), then re-runs digit-fit expansion.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is not finite.
    pub fn set_frame(&mut self, frame: Rect) {
        assert!(frame.is_finite(), "badge frame must be finite");
        self.initial_center = frame.center();
        self.base_frame = frame;
        self.initial_frame = frame;
        self.corner_radius = frame.height() / 2.0;
        self.font_size = frame.width() / 2.0;
        self.write_frames(frame);
        self.dirty.mark(LABEL, dirty::STYLE);
        self.expand_to_fit_digits();
    }

    /// Moves the circle (and label) by `dx` on the x axis and `dy` on the
    /// y axis.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        let frame = self.base_frame + Vec2::new(dx, dy);
        self.set_frame(frame);
    }

    /// Resizes the circle by `factor`, scaling from `initial_frame` about
    /// its center. A factor of 1 has no effect.
    pub fn scale_by(&mut self, factor: f64) {
        let fr = self.initial_frame;
        let width = fr.width() * factor;
        let height = fr.height() * factor;
        let x0 = fr.x0 + (fr.width() - width) / 2.0;
        let y0 = fr.y0 + (fr.height() - height) / 2.0;
        self.set_frame(Rect::new(x0, y0, x0 + width, y0 + height));
    }

    /// Widens the circle for counts with three or more digits.
    ///
    /// The order of magnitude is `floor(log10(count))`, clamped so that one-
    /// and two-digit counts map to 1 (no widening). The widened rect stays
    /// centered on `initial_frame`, becomes the new `base_frame`, and the
    /// label frame mirrors it.
    pub(crate) fn expand_to_fit_digits(&mut self) {
        let order = if self.count == 0 {
            1
        } else {
            self.count.ilog10().max(1)
        };
        let initial = self.initial_frame;
        let width = initial.width() * (1.0 + WIDTH_ADAPTATION_RATIO * f64::from(order - 1));
        let x0 = initial.x0 - (width - initial.width()) / 2.0;
        let frame = Rect::new(x0, initial.y0, x0 + width, initial.y1);
        self.initial_center = frame.center();
        self.base_frame = frame;
        self.write_frames(frame);
        self.order_of_magnitude = order;
    }

    // -- Animated property writes (player only) --

    /// Writes a frame scaled by `ratio` about the base frame's center, with
    /// the corner radius tracking the scaled height.
    pub(crate) fn apply_scale(&mut self, ratio: f64) {
        let base = self.base_frame;
        let size = Size::new(base.width() * ratio, base.height() * ratio);
        let frame = Rect::from_center_size(base.center(), size);
        self.corner_radius = frame.height() / 2.0;
        self.write_frames(frame);
    }

    /// Writes a frame lifted `lift` units above the resting center.
    pub(crate) fn apply_lift(&mut self, lift: f64) {
        let frame = self.base_frame + Vec2::new(0.0, -lift);
        self.write_frames(frame);
    }

    /// Restores resting geometry and opacity (used when a new sequence
    /// replaces one still in flight).
    pub(crate) fn restore_resting(&mut self) {
        self.corner_radius = self.base_frame.height() / 2.0;
        self.write_frames(self.base_frame);
        self.apply_opacity(self.resting_opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::{Badge, CIRCLE, LABEL};
    use super::*;

    const EPS: f64 = 1e-9;

    fn host() -> Size {
        Size::new(70.0, 70.0)
    }

    #[test]
    fn attach_places_circle_at_top_right() {
        let badge = Badge::attached(host(), 0);
        let frame = badge.frame(CIRCLE);
        assert!((frame.x0 - 50.0).abs() < EPS, "x = host width - 2/3 D");
        assert!((frame.y0 + 10.0).abs() < EPS, "y = -D/3");
        assert!((frame.width() - 30.0).abs() < EPS);
        assert!((frame.height() - 30.0).abs() < EPS);
    }

    #[test]
    fn set_frame_derives_radius_font_and_center() {
        let mut badge = Badge::attached(host(), 0);
        badge.set_frame(Rect::new(10.0, 20.0, 50.0, 60.0));
        assert!((badge.corner_radius() - 20.0).abs() < EPS, "height / 2");
        assert!((badge.font_size() - 20.0).abs() < EPS, "width / 2");
        assert_eq!(badge.initial_center(), Point::new(30.0, 40.0));
        assert_eq!(badge.base_frame(), badge.initial_frame());
    }

    #[test]
    fn label_frame_mirrors_circle_frame() {
        let mut badge = Badge::attached(host(), 5);
        assert_eq!(badge.frame(CIRCLE), badge.frame(LABEL));

        badge.increment_by(145); // count 150 triggers expansion
        assert_eq!(badge.frame(CIRCLE), badge.frame(LABEL));
    }

    #[test]
    fn digit_fit_width_multipliers() {
        let cases = [
            (5_u32, 1.0),
            (50, 1.0),
            (150, 1.3),
            (15_000, 1.9),
        ];
        for (count, multiplier) in cases {
            let badge = Badge::attached(host(), count);
            let width = badge.base_frame().width();
            assert!(
                (width - 30.0 * multiplier).abs() < EPS,
                "count {count} should widen by {multiplier}, got width {width}"
            );
        }
    }

    #[test]
    fn digit_fit_orders() {
        for (count, order) in [(5_u32, 1_u32), (99, 1), (150, 2), (1_000, 3), (15_000, 4)] {
            let badge = Badge::attached(host(), count);
            assert_eq!(badge.order_of_magnitude(), order, "count {count}");
        }
    }

    #[test]
    fn expansion_stays_centered() {
        let badge = Badge::attached(host(), 150);
        let initial = badge.initial_frame();
        let base = badge.base_frame();
        // Widened by 9 units, shifted 4.5 left to stay centered.
        assert!((base.width() - initial.width() - 9.0).abs() < EPS);
        assert!((initial.x0 - base.x0 - 4.5).abs() < EPS);
        assert!(
            (base.center().x - initial.center().x).abs() < EPS,
            "expansion must not move the center"
        );
        assert_eq!(badge.initial_center(), base.center());
    }

    #[test]
    fn scale_by_one_is_a_noop() {
        let mut badge = Badge::attached(host(), 7);
        let before = badge.base_frame();
        badge.scale_by(1.0);
        assert_eq!(badge.base_frame(), before);
        assert_eq!(badge.frame(CIRCLE), before);
    }

    #[test]
    fn scale_shrinks_about_center() {
        let mut badge = Badge::attached(host(), 1);
        let center = badge.initial_frame().center();
        badge.scale_by(0.5);
        let scaled = badge.initial_frame();
        assert!((scaled.width() - 15.0).abs() < EPS);
        assert!((scaled.height() - 15.0).abs() < EPS);
        assert!((scaled.center() - center).hypot() < EPS);
    }

    #[test]
    fn move_round_trip_restores_frame() {
        let mut badge = Badge::attached(host(), 7);
        let before = badge.base_frame();
        badge.move_by(4.0, -6.0);
        badge.move_by(-4.0, 6.0);
        let after = badge.base_frame();
        assert!((after.x0 - before.x0).abs() < EPS);
        assert!((after.y0 - before.y0).abs() < EPS);
        assert!((after.width() - before.width()).abs() < EPS);
        assert!((after.height() - before.height()).abs() < EPS);
    }

    #[test]
    fn move_translates_current_frame() {
        let mut badge = Badge::attached(host(), 1);
        let before = badge.base_frame();
        badge.move_by(-5.0, 5.0);
        let after = badge.base_frame();
        assert!((after.x0 - (before.x0 - 5.0)).abs() < EPS);
        assert!((after.y0 - (before.y0 + 5.0)).abs() < EPS);
    }

    #[test]
    fn compact_preset_scales_and_nudges() {
        let badge = Badge::compact(host(), 1);
        let frame = badge.base_frame();
        assert!((frame.width() - 21.0).abs() < EPS, "0.7 x default diameter");
        // Scaled frame is centered on the attach placement, then moved left.
        assert!((frame.center().x - 60.0).abs() < EPS);
        assert!((frame.center().y - 5.0).abs() < EPS);
    }

    #[test]
    #[should_panic(expected = "badge frame must be finite")]
    fn non_finite_frame_panics() {
        let mut badge = Badge::attached(host(), 1);
        badge.set_frame(Rect::new(0.0, 0.0, f64::NAN, 10.0));
    }
}
