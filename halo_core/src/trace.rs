// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for badge activity.
//!
//! This module provides a [`TraceSink`] trait with per-event methods. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine. The [`Player`](crate::animation::Player) emits sequence
//! lifecycle events; count events are emitted by the embedding application,
//! which knows the old and new values around its own mutations.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

use crate::animation::SequenceKind;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted around a count mutation.
#[derive(Clone, Copy, Debug)]
pub struct CountChangedEvent {
    /// Count before the mutation.
    pub old: u32,
    /// Count after the mutation.
    pub new: u32,
}

/// Emitted when a sequence starts playing.
#[derive(Clone, Copy, Debug)]
pub struct SequenceStartedEvent {
    /// Which sequence started.
    pub kind: SequenceKind,
    /// Host time of the start.
    pub at: HostTime,
}

/// Emitted when starting a sequence cancels one still in flight.
#[derive(Clone, Copy, Debug)]
pub struct SequenceReplacedEvent {
    /// The sequence that was cancelled.
    pub replaced: SequenceKind,
    /// The sequence taking its place.
    pub by: SequenceKind,
    /// Host time of the replacement.
    pub at: HostTime,
}

/// Emitted the first time a sample lands in a new stage.
#[derive(Clone, Copy, Debug)]
pub struct StageEnteredEvent {
    /// Which sequence is playing.
    pub kind: SequenceKind,
    /// Zero-based stage index.
    pub stage: usize,
    /// Host time of the sample.
    pub at: HostTime,
}

/// Emitted when a sequence runs to completion.
#[derive(Clone, Copy, Debug)]
pub struct SequenceCompletedEvent {
    /// Which sequence completed.
    pub kind: SequenceKind,
    /// Host time of the final sample.
    pub at: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the badge engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called around a count mutation.
    fn on_count_changed(&mut self, e: &CountChangedEvent) {
        _ = e;
    }

    /// Called when a sequence starts playing.
    fn on_sequence_started(&mut self, e: &SequenceStartedEvent) {
        _ = e;
    }

    /// Called when a new sequence replaces one still in flight.
    fn on_sequence_replaced(&mut self, e: &SequenceReplacedEvent) {
        _ = e;
    }

    /// Called when a sample enters a new stage.
    fn on_stage_entered(&mut self, e: &StageEnteredEvent) {
        _ = e;
    }

    /// Called when a sequence runs to completion.
    fn on_sequence_completed(&mut self, e: &SequenceCompletedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`CountChangedEvent`].
    #[inline]
    pub fn count_changed(&mut self, e: &CountChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_count_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SequenceStartedEvent`].
    #[inline]
    pub fn sequence_started(&mut self, e: &SequenceStartedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sequence_started(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SequenceReplacedEvent`].
    #[inline]
    pub fn sequence_replaced(&mut self, e: &SequenceReplacedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sequence_replaced(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StageEnteredEvent`].
    #[inline]
    pub fn stage_entered(&mut self, e: &StageEnteredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stage_entered(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SequenceCompletedEvent`].
    #[inline]
    pub fn sequence_completed(&mut self, e: &SequenceCompletedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sequence_completed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
