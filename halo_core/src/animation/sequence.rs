// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stage lists for the three badge animations.
//!
//! Stage offsets and durations are nanosecond ticks
//! ([`Timebase::NANOS`](crate::time::Timebase::NANOS)); the
//! [`Player`](super::Player) converts host ticks to nanoseconds before
//! sampling.

use crate::time::Duration;

// Pop: shrink, overshoot, settle, return.
const POP_SHRINK_RATIO: f64 = 0.85;
const POP_OVERSHOOT_RATIO: f64 = 1.05;
const POP_SETTLE_RATIO: f64 = 0.95;

// Blink: dim level shared by all three stages.
const BLINK_DIM: f64 = 0.1;

// Bump: two jumps of decreasing height.
const FIRST_BUMP_DISTANCE: f64 = 8.0;
const SECOND_BUMP_DISTANCE: f64 = 4.0;

const fn millis(ms: u64) -> Duration {
    Duration(ms * 1_000_000)
}

/// Interpolation curve applied within a stage.
///
/// Stage endpoints are exact under every easing; the curve only shapes the
/// approach between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Smoothstep ease-in-out, the default for all shipped sequences.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `0.0..=1.0` through the curve.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// The animated property and its endpoints for one stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Track {
    /// Uniform size ratio against the badge's base frame. Drives the frame
    /// and the corner radius in lockstep.
    Scale {
        /// Ratio at the start of the stage.
        from: f64,
        /// Ratio at the end of the stage.
        to: f64,
    },
    /// Opacity of both primitives.
    Opacity {
        /// Opacity at the start of the stage.
        from: f64,
        /// Opacity at the end of the stage.
        to: f64,
    },
    /// Vertical offset above the resting center.
    Lift {
        /// Offset at the start of the stage.
        from: f64,
        /// Offset at the end of the stage.
        to: f64,
    },
}

impl Track {
    /// Interpolates the track value at eased progress `t`.
    #[must_use]
    pub fn at(self, t: f64) -> f64 {
        let (from, to) = self.endpoints();
        from + (to - from) * t
    }

    /// Returns the value the stage ends on.
    #[must_use]
    pub fn target(self) -> f64 {
        self.endpoints().1
    }

    const fn endpoints(self) -> (f64, f64) {
        match self {
            Self::Scale { from, to } | Self::Opacity { from, to } | Self::Lift { from, to } => {
                (from, to)
            }
        }
    }
}

/// One timed stage of a sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    /// Offset from the sequence start, in nanosecond ticks.
    pub begin: Duration,
    /// Stage length, in nanosecond ticks.
    pub duration: Duration,
    /// Animated property and endpoints.
    pub track: Track,
    /// Interpolation curve.
    pub easing: Easing,
}

impl Stage {
    /// Samples the stage value at `elapsed` nanoseconds since the sequence
    /// start, clamping outside the stage's own window.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let t = if self.duration == Duration::ZERO {
            1.0
        } else {
            let into = elapsed.saturating_sub(self.begin).ticks() as f64;
            (into / self.duration.ticks() as f64).clamp(0.0, 1.0)
        };
        self.track.at(self.easing.ease(t))
    }

    /// Offset at which the stage ends.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.begin + self.duration
    }
}

/// Identifies one of the shipped sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Scale pop.
    Pop,
    /// Opacity blink.
    Blink,
    /// Vertical bump.
    Bump,
}

const POP_STAGES: [Stage; 4] = [
    Stage {
        begin: millis(0),
        duration: millis(50),
        track: Track::Scale {
            from: 1.0,
            to: POP_SHRINK_RATIO,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(50),
        duration: millis(200),
        track: Track::Scale {
            from: POP_SHRINK_RATIO,
            to: POP_OVERSHOOT_RATIO,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(250),
        duration: millis(50),
        track: Track::Scale {
            from: POP_OVERSHOOT_RATIO,
            to: POP_SETTLE_RATIO,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(300),
        duration: millis(50),
        track: Track::Scale {
            from: POP_SETTLE_RATIO,
            to: 1.0,
        },
        easing: Easing::EaseInOut,
    },
];

const BLINK_STAGES: [Stage; 3] = [
    Stage {
        begin: millis(0),
        duration: millis(100),
        track: Track::Opacity {
            from: BLINK_DIM,
            to: 1.0,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(100),
        duration: millis(100),
        track: Track::Opacity {
            from: 1.0,
            to: BLINK_DIM,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(200),
        duration: millis(100),
        track: Track::Opacity {
            from: BLINK_DIM,
            to: 1.0,
        },
        easing: Easing::EaseInOut,
    },
];

const BUMP_STAGES: [Stage; 4] = [
    Stage {
        begin: millis(0),
        duration: millis(130),
        track: Track::Lift {
            from: 0.0,
            to: FIRST_BUMP_DISTANCE,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(130),
        duration: millis(130),
        track: Track::Lift {
            from: FIRST_BUMP_DISTANCE,
            to: 0.0,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(260),
        duration: millis(100),
        track: Track::Lift {
            from: 0.0,
            to: SECOND_BUMP_DISTANCE,
        },
        easing: Easing::EaseInOut,
    },
    Stage {
        begin: millis(360),
        duration: millis(100),
        track: Track::Lift {
            from: SECOND_BUMP_DISTANCE,
            to: 0.0,
        },
        easing: Easing::EaseInOut,
    },
];

/// A fixed, contiguous list of stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sequence {
    kind: SequenceKind,
    stages: &'static [Stage],
}

impl Sequence {
    /// The scale pop: 0.85× → 1.05× → 0.95× → 1.0× over 0.35 s.
    #[must_use]
    pub const fn pop() -> Self {
        Self {
            kind: SequenceKind::Pop,
            stages: &POP_STAGES,
        }
    }

    /// The opacity blink: dim → full → dim → full over 0.3 s, starting dim.
    #[must_use]
    pub const fn blink() -> Self {
        Self {
            kind: SequenceKind::Blink,
            stages: &BLINK_STAGES,
        }
    }

    /// The vertical bump: up 8 → rest → up 4 → rest over 0.46 s.
    #[must_use]
    pub const fn bump() -> Self {
        Self {
            kind: SequenceKind::Bump,
            stages: &BUMP_STAGES,
        }
    }

    /// Which sequence this is.
    #[must_use]
    pub const fn kind(self) -> SequenceKind {
        self.kind
    }

    /// The stage list.
    #[must_use]
    pub const fn stages(self) -> &'static [Stage] {
        self.stages
    }

    /// Total running time in nanosecond ticks.
    #[must_use]
    pub fn total(self) -> Duration {
        match self.stages.last() {
            Some(stage) => stage.end(),
            None => Duration::ZERO,
        }
    }

    /// Returns the stage active at `elapsed` nanoseconds, or `None` once the
    /// sequence has run to completion.
    #[must_use]
    pub fn stage_at(self, elapsed: Duration) -> Option<(usize, &'static Stage)> {
        if elapsed >= self.total() {
            return None;
        }
        let mut current = None;
        for (index, stage) in self.stages.iter().enumerate() {
            if elapsed >= stage.begin {
                current = Some((index, stage));
            } else {
                break;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn totals_match_the_fixed_timelines() {
        assert_eq!(Sequence::pop().total(), Duration(350_000_000));
        assert_eq!(Sequence::blink().total(), Duration(300_000_000));
        assert_eq!(Sequence::bump().total(), Duration(460_000_000));
    }

    #[test]
    fn stages_are_contiguous() {
        for sequence in [Sequence::pop(), Sequence::blink(), Sequence::bump()] {
            for pair in sequence.stages().windows(2) {
                assert_eq!(
                    pair[0].end(),
                    pair[1].begin,
                    "{:?} has a gap between stages",
                    sequence.kind()
                );
            }
        }
    }

    #[test]
    fn adjacent_stages_agree_at_boundaries() {
        for sequence in [Sequence::pop(), Sequence::blink(), Sequence::bump()] {
            for pair in sequence.stages().windows(2) {
                assert!(
                    (pair[0].track.target() - pair[1].track.at(0.0)).abs() < EPS,
                    "{:?} stage boundary must be continuous",
                    sequence.kind()
                );
            }
        }
    }

    #[test]
    fn final_stages_restore_resting_values() {
        assert!((Sequence::pop().stages().last().unwrap().track.target() - 1.0).abs() < EPS);
        assert!((Sequence::blink().stages().last().unwrap().track.target() - 1.0).abs() < EPS);
        assert!((Sequence::bump().stages().last().unwrap().track.target() - 0.0).abs() < EPS);
    }

    #[test]
    fn blink_starts_dim() {
        let first = &Sequence::blink().stages()[0];
        assert!((first.value_at(Duration::ZERO) - 0.1).abs() < EPS);
    }

    #[test]
    fn stage_at_walks_the_timeline() {
        let pop = Sequence::pop();
        assert_eq!(pop.stage_at(Duration::ZERO).unwrap().0, 0);
        assert_eq!(pop.stage_at(Duration(50_000_000)).unwrap().0, 1);
        assert_eq!(pop.stage_at(Duration(249_999_999)).unwrap().0, 1);
        assert_eq!(pop.stage_at(Duration(250_000_000)).unwrap().0, 2);
        assert_eq!(pop.stage_at(Duration(300_000_000)).unwrap().0, 3);
        assert!(pop.stage_at(Duration(350_000_000)).is_none(), "total is exclusive");
    }

    #[test]
    fn stage_sampling_clamps_and_eases() {
        let stage = Stage {
            begin: millis(100),
            duration: millis(100),
            track: Track::Opacity { from: 0.0, to: 1.0 },
            easing: Easing::Linear,
        };
        assert!((stage.value_at(Duration::ZERO) - 0.0).abs() < EPS, "clamped before begin");
        assert!((stage.value_at(millis(150)) - 0.5).abs() < EPS);
        assert!((stage.value_at(millis(300)) - 1.0).abs() < EPS, "clamped after end");
    }

    #[test]
    fn ease_in_out_is_exact_at_endpoints_and_midpoint() {
        assert!((Easing::EaseInOut.ease(0.0) - 0.0).abs() < EPS);
        assert!((Easing::EaseInOut.ease(0.5) - 0.5).abs() < EPS);
        assert!((Easing::EaseInOut.ease(1.0) - 1.0).abs() < EPS);
    }
}
