// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks delivered by backends.
//!
//! A backend produces a [`FrameTick`] each time the platform render loop
//! offers a frame (e.g. a `requestAnimationFrame` callback). The application
//! forwards the tick's `now` to [`Player::advance`] so in-flight animation
//! sequences are sampled at the platform's notion of the current frame time.
//!
//! [`Player::advance`]: crate::animation::Player::advance

use crate::time::HostTime;

/// A frame opportunity delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Current host time when the tick was generated.
    pub now: HostTime,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}
