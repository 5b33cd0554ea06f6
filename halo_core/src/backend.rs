// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Halo splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Tick source** — Produces [`FrameTick`] values via a platform
//!   mechanism (e.g. `requestAnimationFrame`). This is backend-specific and
//!   not abstracted by a trait because the setup and lifecycle differ
//!   fundamentally across platforms.
//!
//! - **Time** — `now() -> HostTime` and `timebase() -> Timebase` free
//!   functions that read the platform's monotonic clock.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to apply badge
//!   changes to native primitives (e.g. DOM elements, `CALayer`s).
//!
//! # Crate boundaries
//!
//! `halo_core` owns the data model, animation, evaluation, and this contract
//! module. Backend crates depend on `halo_core` and provide platform glue.
//! Application code depends on both and wires them together in a frame loop.
//!
//! [`FrameTick`]: crate::timing::FrameTick

use crate::badge::{Badge, BadgeChanges};

/// Applies evaluated badge changes to a platform-native pair of primitives.
///
/// Both DOM-based and layer-based presenters implement this trait, enabling
/// generic frame loops and test doubles.
///
/// # Frame loop pseudocode
///
/// A typical frame callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     // Animate: sample the in-flight sequence at the tick time
///     player.advance(&mut badge, tick.now, &mut Tracer::none());
///
///     // Evaluate: drain dirty channels into a change set
///     let changes = badge.evaluate();
///
///     // Present: apply incremental changes to the native primitives
///     presenter.apply(&badge, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`BadgeChanges`] to the backing primitives, reading
    /// current property values from `badge` as needed.
    fn apply(&mut self, badge: &Badge, changes: &BadgeChanges);
}
