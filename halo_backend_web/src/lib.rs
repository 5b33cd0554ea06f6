// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for halo.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`DomPresenter`]: maps the badge's circle and label to `<div>` elements

#![no_std]

extern crate alloc;

mod presenter;
mod raf;

pub use halo_core::backend::Presenter;
pub use presenter::DomPresenter;
pub use raf::RafLoop;

use halo_core::time::{HostTime, Timebase};

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = raf::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
///
/// `Timebase { numer: 1000, denom: 1 }` means `nanoseconds = ticks × 1000`.
/// Pass this to [`Player::new`](halo_core::animation::Player::new) so stage
/// timings line up with `performance.now()` ticks.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::new(1000, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        // 1 tick = 1 µs = 1000 ns
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(350_000), 350_000_000);
    }
}
