// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The badge uses multi-channel dirty tracking (via [`understory_dirty`]) so
//! that backends only re-apply the properties that actually changed. Each
//! channel represents an independent category of change, keyed by primitive
//! slot ([`CIRCLE`](crate::badge::CIRCLE) or [`LABEL`](crate::badge::LABEL)).
//!
//! The badge's two primitives form a flat pair rather than a tree, so every
//! channel is local-only: marking a slot dirty affects that slot alone, and
//! no propagation policies or dependency edges are needed.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`Badge::evaluate`](crate::badge::Badge::evaluate) call drains all
//! channels and surfaces the results as
//! [`BadgeChanges`](crate::badge::BadgeChanges), which backends
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.

use understory_dirty::Channel;

/// Frame rect or corner radius changed (the radius always tracks the frame).
pub const FRAME: Channel = Channel::new(0);

/// Opacity changed.
pub const OPACITY: Channel = Channel::new(1);

/// Hidden flag changed.
pub const VISIBILITY: Channel = Channel::new(2);

/// Fill color, text color, or font size changed.
pub const STYLE: Channel = Channel::new(3);

/// Label text changed.
pub const TEXT: Channel = Channel::new(4);
