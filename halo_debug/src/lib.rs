// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for halo: event recording and pretty-printing.
//!
//! [`RecorderSink`](recorder::RecorderSink) collects badge trace events into
//! a vector for assertions in tests and tooling.
//! [`PrettyPrintSink`](pretty::PrettyPrintSink) writes one human-readable
//! line per event.

pub mod pretty;
pub mod recorder;
