// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core engine for a count-badge overlay widget.
//!
//! `halo_core` models a notification badge — a filled circle with a numeric
//! label — that a host UI toolkit attaches on top of one of its views. The
//! crate owns the badge state, the count-driven geometry arithmetic, and
//! three fixed decorative animation timelines; the host toolkit supplies a
//! frame tick source and applies evaluated property changes to its native
//! primitives. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! The crate is organized around a frame loop that turns platform display
//! callbacks into incremental badge updates:
//!
//! ```text
//!   Backend (tick source)
//!       │
//!       ▼
//!   FrameTick ──► Player::advance() ──► property writes on Badge
//!                                            │
//!                 ┌──────────────────────────┘
//!                 ▼
//!   Badge::evaluate() ──► BadgeChanges ──► Presenter::apply()
//! ```
//!
//! **[`badge`]** — The badge data model and geometry engine: count state,
//! digit-fit width expansion, zero-count visibility, and drain-style change
//! evaluation.
//!
//! **[`animation`]** — Fixed stage timelines (pop, blink, bump) and the
//! tick-driven [`Player`](animation::Player) that samples them.
//!
//! **[`dirty`]** — Per-primitive dirty channels via `understory_dirty`.
//! Property mutations automatically mark the appropriate channel; evaluation
//! drains them into [`BadgeChanges`](badge::BadgeChanges).
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to apply badge changes to native primitives.
//!
//! **[`time`]** — Tick-based monotonic time with timebase conversion.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! animation instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod backend;
pub mod badge;
pub mod dirty;
pub mod style;
pub mod time;
pub mod timing;
pub mod trace;
