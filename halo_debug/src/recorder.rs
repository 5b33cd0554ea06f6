// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and collects every event as a
//! [`RecordedEvent`], preserving order. Tests and tooling assert on the
//! resulting stream.

use halo_core::animation::SequenceKind;
use halo_core::time::HostTime;
use halo_core::trace::{
    CountChangedEvent, SequenceCompletedEvent, SequenceReplacedEvent, SequenceStartedEvent,
    StageEnteredEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A count mutation.
    CountChanged {
        /// Count before the mutation.
        old: u32,
        /// Count after the mutation.
        new: u32,
    },
    /// A sequence started playing.
    SequenceStarted {
        /// Which sequence.
        kind: SequenceKind,
        /// Host time of the start.
        at: HostTime,
    },
    /// A new sequence cancelled one still in flight.
    SequenceReplaced {
        /// The cancelled sequence.
        replaced: SequenceKind,
        /// The sequence taking its place.
        by: SequenceKind,
        /// Host time of the replacement.
        at: HostTime,
    },
    /// A sample entered a new stage.
    StageEntered {
        /// Which sequence.
        kind: SequenceKind,
        /// Zero-based stage index.
        stage: usize,
        /// Host time of the sample.
        at: HostTime,
    },
    /// A sequence ran to completion.
    SequenceCompleted {
        /// Which sequence.
        kind: SequenceKind,
        /// Host time of the final sample.
        at: HostTime,
    },
}

/// A [`TraceSink`] that records events in order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for RecorderSink {
    fn on_count_changed(&mut self, e: &CountChangedEvent) {
        self.events.push(RecordedEvent::CountChanged {
            old: e.old,
            new: e.new,
        });
    }

    fn on_sequence_started(&mut self, e: &SequenceStartedEvent) {
        self.events.push(RecordedEvent::SequenceStarted {
            kind: e.kind,
            at: e.at,
        });
    }

    fn on_sequence_replaced(&mut self, e: &SequenceReplacedEvent) {
        self.events.push(RecordedEvent::SequenceReplaced {
            replaced: e.replaced,
            by: e.by,
            at: e.at,
        });
    }

    fn on_stage_entered(&mut self, e: &StageEnteredEvent) {
        self.events.push(RecordedEvent::StageEntered {
            kind: e.kind,
            stage: e.stage,
            at: e.at,
        });
    }

    fn on_sequence_completed(&mut self, e: &SequenceCompletedEvent) {
        self.events.push(RecordedEvent::SequenceCompleted {
            kind: e.kind,
            at: e.at,
        });
    }
}
