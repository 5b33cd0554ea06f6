// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change evaluation.
//!
//! Evaluation follows a drain pattern per dirty channel: collect the slots
//! marked since the last call and surface them as [`BadgeChanges`]. The
//! VISIBILITY channel additionally compares the current hidden flags against
//! the last-presented state so backends receive explicit hidden/unhidden
//! transitions rather than raw flag writes.
//!
//! Change lists carry raw primitive slots ([`CIRCLE`](super::CIRCLE) /
//! [`LABEL`](super::LABEL)); backends read the current property values
//! straight from the badge.

use alloc::vec::Vec;

use crate::dirty;

use super::state::Badge;

/// The set of changes produced by a single [`Badge::evaluate`] call.
///
/// Each field contains the primitive slots that changed in the corresponding
/// category. Backends use these to apply incremental updates.
#[derive(Clone, Debug, Default)]
pub struct BadgeChanges {
    /// Primitives created since the last evaluate (both slots, once, right
    /// after construction).
    pub added: Vec<u32>,
    /// Primitives whose frame or corner radius changed.
    pub frames: Vec<u32>,
    /// Primitives whose opacity changed.
    pub opacities: Vec<u32>,
    /// Primitives that transitioned from visible to hidden.
    pub hidden: Vec<u32>,
    /// Primitives that transitioned from hidden to visible.
    pub unhidden: Vec<u32>,
    /// Primitives whose color or font changed.
    pub styles: Vec<u32>,
    /// Primitives whose text changed (only the label carries text).
    pub text: Vec<u32>,
}

impl BadgeChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.added.clear();
        self.frames.clear();
        self.opacities.clear();
        self.hidden.clear();
        self.unhidden.clear();
        self.styles.clear();
        self.text.clear();
    }

    /// Returns whether no changes are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.frames.is_empty()
            && self.opacities.is_empty()
            && self.hidden.is_empty()
            && self.unhidden.is_empty()
            && self.styles.is_empty()
            && self.text.is_empty()
    }
}

impl Badge {
    /// Evaluates the badge, draining dirty channels into a change set.
    pub fn evaluate(&mut self) -> BadgeChanges {
        let mut changes = BadgeChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut BadgeChanges) {
        changes.clear();

        changes.frames = self
            .dirty
            .drain(dirty::FRAME)
            .deterministic()
            .run()
            .collect();

        changes.opacities = self
            .dirty
            .drain(dirty::OPACITY)
            .deterministic()
            .run()
            .collect();

        // Drain VISIBILITY and split into hidden/unhidden transitions.
        let visibility: Vec<u32> = self
            .dirty
            .drain(dirty::VISIBILITY)
            .deterministic()
            .run()
            .collect();
        for slot in visibility {
            let now_hidden = self.hidden[slot as usize];
            if now_hidden != self.presented_hidden[slot as usize] {
                if now_hidden {
                    changes.hidden.push(slot);
                } else {
                    changes.unhidden.push(slot);
                }
                self.presented_hidden[slot as usize] = now_hidden;
            }
        }

        changes.styles = self
            .dirty
            .drain(dirty::STYLE)
            .deterministic()
            .run()
            .collect();

        changes.text = self
            .dirty
            .drain(dirty::TEXT)
            .deterministic()
            .run()
            .collect();

        core::mem::swap(&mut self.pending_added, &mut changes.added);
    }
}
