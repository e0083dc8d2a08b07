//! Phase-sweep animations.

use super::*;
use std::time::Duration;

/// A lazy description of a full phase sweep.
///
/// Frame `i` of `n` corresponds to the phase `i * TAU / n`. The sweep can be
/// iterated any number of times, each time from the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    frame_count: usize,
    interval: Duration,
}

impl Animation {
    pub fn new(frame_count: usize) -> Self {
        Self::with_interval(frame_count, Duration::from_millis(FRAME_INTERVAL_MS))
    }

    pub const fn with_interval(frame_count: usize, interval: Duration) -> Self {
        Self { frame_count, interval }
    }

    pub const fn len(&self) -> usize {
        self.frame_count
    }

    pub const fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// The fixed delay between two frames.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The time taken to play every frame once.
    pub fn duration(&self) -> Duration {
        self.interval * self.frame_count as u32
    }

    /// The phase of frame `frame`. Returns `0.0` for an empty animation.
    pub fn phase(&self, frame: usize) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }

        debug_assert!(frame < self.frame_count);
        frame as f64 * TAU / self.frame_count as f64
    }

    /// A fresh iterator over every frame's phase, in order.
    pub const fn phases(&self) -> Phases {
        Phases { animation: *self, next: 0 }
    }

    /// Renders each frame on demand through `viewer`, yielding a snapshot of
    /// the plot after each one.
    pub fn frames<'v, C: Curve>(&self, viewer: &'v mut Viewer<C>) -> Frames<'v, C> {
        Frames { viewer, phases: self.phases() }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_COUNT)
    }
}

impl IntoIterator for &Animation {
    type Item = f64;
    type IntoIter = Phases;

    fn into_iter(self) -> Self::IntoIter {
        self.phases()
    }
}

/// Iterator over the phases of an [`Animation`].
#[derive(Debug, Clone)]
pub struct Phases {
    animation: Animation,
    next: usize,
}

impl Iterator for Phases {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.animation.len() {
            return None;
        }

        let phase = self.animation.phase(self.next);
        self.next += 1;

        Some(phase)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.animation.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Phases {}

/// Iterator which renders an [`Animation`] frame by frame.
#[derive(Debug)]
pub struct Frames<'v, C: Curve> {
    viewer: &'v mut Viewer<C>,
    phases: Phases,
}

impl<C: Curve> Iterator for Frames<'_, C> {
    type Item = Plot;

    fn next(&mut self) -> Option<Self::Item> {
        let phase = self.phases.next()?;
        Some(self.viewer.render_at_phase(phase).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.phases.size_hint()
    }
}

impl<C: Curve> ExactSizeIterator for Frames<'_, C> {}
