// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-driven sequence execution.

use crate::badge::Badge;
use crate::time::{Duration, HostTime, Timebase};
use crate::trace::{
    SequenceCompletedEvent, SequenceReplacedEvent, SequenceStartedEvent, StageEnteredEvent, Tracer,
};

use super::sequence::{Sequence, SequenceKind, Track};

/// What a call to [`Player::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Progress {
    /// No sequence is in flight.
    Idle,
    /// A sample was written; the sequence continues.
    Running,
    /// The final target was written exactly and the player went idle.
    Completed,
}

/// Executes at most one [`Sequence`] against a badge, sampled at host tick
/// times.
///
/// Create one player per badge with the backend's timebase, then call
/// [`advance`](Self::advance) from the frame tick handler:
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     player.advance(&mut badge, tick.now, &mut Tracer::none());
///     presenter.apply(&badge, &badge.evaluate());
/// }
/// ```
///
/// Starting a sequence while another is in flight cancels the old one:
/// resting geometry and opacity are restored before the new sequence's first
/// sample, so two sequences never interleave property writes.
#[derive(Debug)]
pub struct Player {
    timebase: Timebase,
    active: Option<Active>,
}

#[derive(Debug)]
struct Active {
    sequence: Sequence,
    started_at: HostTime,
    last_stage: Option<usize>,
}

impl Player {
    /// Creates an idle player that interprets host ticks through `timebase`.
    #[must_use]
    pub fn new(timebase: Timebase) -> Self {
        Self {
            timebase,
            active: None,
        }
    }

    /// Returns whether a sequence is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the kind of the in-flight sequence, if any.
    #[must_use]
    pub fn current(&self) -> Option<SequenceKind> {
        self.active.as_ref().map(|a| a.sequence.kind())
    }

    /// Starts `sequence` at host time `now`, cancelling any in-flight
    /// sequence after restoring the badge's resting values.
    pub fn play(
        &mut self,
        badge: &mut Badge,
        sequence: Sequence,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) {
        if let Some(active) = self.active.take() {
            badge.restore_resting();
            tracer.sequence_replaced(&SequenceReplacedEvent {
                replaced: active.sequence.kind(),
                by: sequence.kind(),
                at: now,
            });
        }
        tracer.sequence_started(&SequenceStartedEvent {
            kind: sequence.kind(),
            at: now,
        });
        self.active = Some(Active {
            sequence,
            started_at: now,
            last_stage: None,
        });
    }

    /// Samples the in-flight sequence at host time `now` and writes the
    /// interpolated property to `badge`.
    ///
    /// Once the elapsed time reaches the sequence total, the final stage's
    /// target is written exactly and the player goes idle.
    pub fn advance(
        &mut self,
        badge: &mut Badge,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Progress {
        let (sequence, started_at, last_stage) = match &self.active {
            Some(active) => (active.sequence, active.started_at, active.last_stage),
            None => return Progress::Idle,
        };
        let elapsed = Duration(
            now.saturating_duration_since(started_at)
                .to_nanos(self.timebase),
        );

        match sequence.stage_at(elapsed) {
            Some((index, stage)) => {
                apply_track(badge, stage.track, stage.value_at(elapsed));
                if last_stage != Some(index) {
                    if let Some(active) = &mut self.active {
                        active.last_stage = Some(index);
                    }
                    tracer.stage_entered(&StageEnteredEvent {
                        kind: sequence.kind(),
                        stage: index,
                        at: now,
                    });
                }
                Progress::Running
            }
            None => {
                if let Some(last) = sequence.stages().last() {
                    apply_track(badge, last.track, last.track.target());
                }
                self.active = None;
                tracer.sequence_completed(&SequenceCompletedEvent {
                    kind: sequence.kind(),
                    at: now,
                });
                Progress::Completed
            }
        }
    }
}

/// Routes a sampled track value to the matching badge property.
fn apply_track(badge: &mut Badge, track: Track, value: f64) {
    match track {
        Track::Scale { .. } => badge.apply_scale(value),
        Track::Opacity { .. } => badge.apply_opacity(value),
        Track::Lift { .. } => badge.apply_lift(value),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use crate::badge::{Badge, CIRCLE, LABEL};

    use super::*;

    const EPS: f64 = 1e-9;

    fn rig(count: u32) -> (Badge, Player) {
        let badge = Badge::attached(Size::new(70.0, 70.0), count);
        (badge, Player::new(Timebase::NANOS))
    }

    const fn ms(ms: u64) -> HostTime {
        HostTime(ms * 1_000_000)
    }

    #[test]
    fn idle_player_does_nothing() {
        let (mut badge, mut player) = rig(1);
        let before = badge.frame(CIRCLE);
        assert_eq!(
            player.advance(&mut badge, ms(16), &mut Tracer::none()),
            Progress::Idle
        );
        assert_eq!(badge.frame(CIRCLE), before);
    }

    #[test]
    fn pop_shrinks_then_restores_exactly() {
        let (mut badge, mut player) = rig(1);
        let base = badge.base_frame();
        player.play(&mut badge, Sequence::pop(), ms(0), &mut Tracer::none());

        // Start of the overshoot stage: exactly the shrink ratio.
        player.advance(&mut badge, ms(50), &mut Tracer::none());
        assert!((badge.frame(CIRCLE).width() - base.width() * 0.85).abs() < EPS);
        assert!(
            (badge.corner_radius() - base.height() * 0.85 / 2.0).abs() < EPS,
            "corner radius tracks the animated height"
        );

        // Start of the settle stage: exactly the overshoot ratio.
        player.advance(&mut badge, ms(250), &mut Tracer::none());
        assert!((badge.frame(CIRCLE).width() - base.width() * 1.05).abs() < EPS);

        // Past the total: resting geometry, player idle.
        assert_eq!(
            player.advance(&mut badge, ms(350), &mut Tracer::none()),
            Progress::Completed
        );
        assert_eq!(badge.frame(CIRCLE), base);
        assert_eq!(badge.frame(LABEL), base);
        assert!((badge.corner_radius() - base.height() / 2.0).abs() < EPS);
        assert!(!player.is_animating());
    }

    #[test]
    fn pop_scales_about_the_base_center() {
        let (mut badge, mut player) = rig(1);
        let center = badge.base_frame().center();
        player.play(&mut badge, Sequence::pop(), ms(0), &mut Tracer::none());
        player.advance(&mut badge, ms(150), &mut Tracer::none());
        assert!((badge.frame(CIRCLE).center() - center).hypot() < EPS);
    }

    #[test]
    fn blink_starts_dim_and_ends_at_full_opacity() {
        let (mut badge, mut player) = rig(1);
        player.play(&mut badge, Sequence::blink(), ms(0), &mut Tracer::none());

        player.advance(&mut badge, ms(0), &mut Tracer::none());
        assert!((badge.opacity(CIRCLE) - 0.1).abs() < EPS, "starting state is dim");
        assert!((badge.opacity(LABEL) - 0.1).abs() < EPS);

        player.advance(&mut badge, ms(100), &mut Tracer::none());
        assert!((badge.opacity(CIRCLE) - 1.0).abs() < EPS);

        player.advance(&mut badge, ms(200), &mut Tracer::none());
        assert!((badge.opacity(CIRCLE) - 0.1).abs() < EPS);

        assert_eq!(
            player.advance(&mut badge, ms(300), &mut Tracer::none()),
            Progress::Completed
        );
        assert!((badge.opacity(CIRCLE) - 1.0).abs() < EPS);
        assert!((badge.opacity(LABEL) - 1.0).abs() < EPS);
    }

    #[test]
    fn bump_lifts_both_primitives_and_returns() {
        let (mut badge, mut player) = rig(1);
        let base = badge.base_frame();
        player.play(&mut badge, Sequence::bump(), ms(0), &mut Tracer::none());

        // Peak of the first jump.
        player.advance(&mut badge, ms(130), &mut Tracer::none());
        assert!((badge.frame(CIRCLE).y0 - (base.y0 - 8.0)).abs() < EPS);
        assert!((badge.frame(LABEL).y0 - (base.y0 - 8.0)).abs() < EPS, "label re-centers");
        assert!((badge.frame(CIRCLE).x0 - base.x0).abs() < EPS, "x stays put");

        // Peak of the second jump.
        player.advance(&mut badge, ms(360), &mut Tracer::none());
        assert!((badge.frame(CIRCLE).y0 - (base.y0 - 4.0)).abs() < EPS);

        assert_eq!(
            player.advance(&mut badge, ms(460), &mut Tracer::none()),
            Progress::Completed
        );
        assert_eq!(badge.frame(CIRCLE), base);
    }

    #[test]
    fn completed_player_reports_idle_afterwards() {
        let (mut badge, mut player) = rig(1);
        player.play(&mut badge, Sequence::blink(), ms(0), &mut Tracer::none());
        let _ = player.advance(&mut badge, ms(300), &mut Tracer::none());
        assert_eq!(
            player.advance(&mut badge, ms(316), &mut Tracer::none()),
            Progress::Idle
        );
    }

    #[test]
    fn replacement_restores_resting_values_first() {
        let (mut badge, mut player) = rig(1);
        let base = badge.base_frame();
        player.play(&mut badge, Sequence::pop(), ms(0), &mut Tracer::none());
        player.advance(&mut badge, ms(150), &mut Tracer::none());
        assert_ne!(badge.frame(CIRCLE), base, "mid-pop frame is scaled");

        player.play(&mut badge, Sequence::blink(), ms(150), &mut Tracer::none());
        assert_eq!(badge.frame(CIRCLE), base, "replacement snaps back to rest");
        assert!((badge.opacity(CIRCLE) - 1.0).abs() < EPS);
        assert_eq!(player.current(), Some(SequenceKind::Blink));
    }

    #[test]
    fn player_converts_host_ticks_through_the_timebase() {
        // Microsecond ticks, as delivered by the web backend.
        let mut badge = Badge::attached(Size::new(70.0, 70.0), 1);
        let mut player = Player::new(Timebase::new(1000, 1));
        player.play(&mut badge, Sequence::pop(), HostTime(0), &mut Tracer::none());

        assert_eq!(
            player.advance(&mut badge, HostTime(150_000), &mut Tracer::none()),
            Progress::Running
        );
        assert_eq!(
            player.advance(&mut badge, HostTime(350_000), &mut Tracer::none()),
            Progress::Completed
        );
    }

    #[test]
    fn clock_going_backwards_clamps_to_sequence_start() {
        let (mut badge, mut player) = rig(1);
        let base = badge.base_frame();
        player.play(&mut badge, Sequence::pop(), ms(100), &mut Tracer::none());
        assert_eq!(
            player.advance(&mut badge, ms(50), &mut Tracer::none()),
            Progress::Running
        );
        assert_eq!(badge.frame(CIRCLE), base, "first stage starts at ratio 1.0");
    }
}
