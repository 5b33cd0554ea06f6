// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge data model and geometry engine.
//!
//! A [`Badge`] owns the state of two visual primitives that the host toolkit
//! renders on top of a host view:
//!
//! - the filled circle (slot [`CIRCLE`]), and
//! - the numeric count label (slot [`LABEL`]), whose frame always mirrors
//!   the circle's.
//!
//! The badge tracks a count and derives everything visual from it: the
//! label text, the zero-count visibility rule, and the digit-fit width
//! expansion that widens the circle for counts of three or more digits.
//! Geometry is anchored by two rects: `initial_frame`, the rect set by the
//! last [`set_frame`](Badge::set_frame) call, and `base_frame`, that rect
//! after digit-fit expansion. Animations are sampled against `base_frame`.
//!
//! # Dirty tracking
//!
//! Property mutations automatically mark the corresponding dirty channel
//! (see [`dirty`](crate::dirty)), keyed by primitive slot. Each
//! [`evaluate`](Badge::evaluate) call drains all channels into a
//! [`BadgeChanges`], which a backend [`Presenter`](crate::backend::Presenter)
//! consumes to update its native primitives incrementally.

mod evaluate;
mod geometry;
mod state;

pub use evaluate::BadgeChanges;
pub use geometry::DEFAULT_DIAMETER;
pub use state::{Badge, CIRCLE, LABEL, PRIMITIVE_COUNT};
