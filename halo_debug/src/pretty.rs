// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).
//! Timestamps are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use halo_core::animation::SequenceKind;
use halo_core::time::{HostTime, Timebase};
use halo_core::trace::{
    CountChangedEvent, SequenceCompletedEvent, SequenceReplacedEvent, SequenceStartedEvent,
    StageEnteredEvent, TraceSink,
};

use crate::recorder::RecordedEvent;

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    fn host_ms(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1_000_000.0
    }
}

/// Short name of a sequence, as printed in trace lines.
#[must_use]
pub fn sequence_name(kind: SequenceKind) -> &'static str {
    match kind {
        SequenceKind::Pop => "pop",
        SequenceKind::Blink => "blink",
        SequenceKind::Bump => "bump",
    }
}

/// Formats a recorded event on one line, without timestamps.
#[must_use]
pub fn describe(event: &RecordedEvent) -> String {
    match event {
        RecordedEvent::CountChanged { old, new } => format!("count {old} -> {new}"),
        RecordedEvent::SequenceStarted { kind, .. } => {
            format!("{} started", sequence_name(*kind))
        }
        RecordedEvent::SequenceReplaced { replaced, by, .. } => {
            format!("{} replaced by {}", sequence_name(*replaced), sequence_name(*by))
        }
        RecordedEvent::StageEntered { kind, stage, .. } => {
            format!("{} stage {stage}", sequence_name(*kind))
        }
        RecordedEvent::SequenceCompleted { kind, .. } => {
            format!("{} completed", sequence_name(*kind))
        }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_count_changed(&mut self, e: &CountChangedEvent) {
        let _ = writeln!(self.writer, "[count] {} -> {}", e.old, e.new);
    }

    fn on_sequence_started(&mut self, e: &SequenceStartedEvent) {
        let _ = writeln!(
            self.writer,
            "[sequence:start] {} at {:.1}ms",
            sequence_name(e.kind),
            self.host_ms(e.at),
        );
    }

    fn on_sequence_replaced(&mut self, e: &SequenceReplacedEvent) {
        let _ = writeln!(
            self.writer,
            "[sequence:replace] {} -> {} at {:.1}ms",
            sequence_name(e.replaced),
            sequence_name(e.by),
            self.host_ms(e.at),
        );
    }

    fn on_stage_entered(&mut self, e: &StageEnteredEvent) {
        let _ = writeln!(
            self.writer,
            "[stage] {} #{} at {:.1}ms",
            sequence_name(e.kind),
            e.stage,
            self.host_ms(e.at),
        );
    }

    fn on_sequence_completed(&mut self, e: &SequenceCompletedEvent) {
        let _ = writeln!(
            self.writer,
            "[sequence:done] {} at {:.1}ms",
            sequence_name(e.kind),
            self.host_ms(e.at),
        );
    }
}
