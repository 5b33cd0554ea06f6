// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed animation timelines and the tick-driven player.
//!
//! The badge ships three decorative sequences, each a short list of timed
//! stages with a start offset, a duration, and a from→to value on one track:
//!
//! - [`Sequence::pop`] — four scale stages (shrink, overshoot, settle,
//!   return) over 0.35 s. The corner radius tracks the scaled height at
//!   every sample, so the rounding matches the animated size throughout.
//! - [`Sequence::blink`] — three opacity stages of 0.1 s each, dimming to
//!   0.1 and back.
//! - [`Sequence::bump`] — four vertical-offset stages over 0.46 s, jumping
//!   8 units then 4 units above the resting center.
//!
//! The [`Player`] owns at most one in-flight sequence and samples it at the
//! host times carried by backend ticks. Starting a sequence while another is
//! in flight replaces it: the player first restores resting geometry and
//! opacity, so overlapping writes from two sequences cannot occur.

mod player;
mod sequence;

pub use player::{Player, Progress};
pub use sequence::{Easing, Sequence, SequenceKind, Stage, Track};
