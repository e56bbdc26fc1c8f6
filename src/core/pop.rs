use std::time::{Duration, Instant};

/// How long the entrance animation runs.
pub const POP_DURATION: Duration = Duration::from_millis(700);

/// Entrance animation for a freshly added item. Progress is derived from the
/// insertion instant, so dropped frames never stall it; it plays once and is
/// discarded when finished.
#[derive(Debug, Clone, Copy)]
pub struct PopIn {
    started: Instant,
}

impl PopIn {
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    /// Animation progress in `[0, 1]` at the given instant.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / POP_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Horizontal nudge for the pop: rests centered, dips left, overshoots right,
/// settles. Returned in `[-1, 1]`; the caller scales it to pixels.
pub fn shake(progress: f32) -> f32 {
    keyframed(progress, [0.0, -1.0, 1.0, 0.0])
}

/// Size swell for the pop: grows over the first third, holds, then relaxes.
/// Returned in `[0, 1]`.
pub fn swell(progress: f32) -> f32 {
    keyframed(progress, [0.0, 1.0, 1.0, 0.0])
}

/// Piecewise-linear ramp through four keyframes at progress 0, 1/3, 2/3, 1.
/// Out-of-range progress clamps to the end keyframes.
fn keyframed(progress: f32, frames: [f32; 4]) -> f32 {
    let scaled = progress.clamp(0.0, 1.0) * 3.0;
    let segment = (scaled.floor() as usize).min(2);
    let t = scaled - segment as f32;
    frames[segment] + (frames[segment + 1] - frames[segment]) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn shake_hits_its_keyframes() {
        assert!(close(shake(0.0), 0.0));
        assert!(close(shake(1.0 / 3.0), -1.0));
        assert!(close(shake(2.0 / 3.0), 1.0));
        assert!(close(shake(1.0), 0.0));
    }

    #[test]
    fn swell_hits_its_keyframes() {
        assert!(close(swell(0.0), 0.0));
        assert!(close(swell(1.0 / 3.0), 1.0));
        assert!(close(swell(2.0 / 3.0), 1.0));
        assert!(close(swell(1.0), 0.0));
    }

    #[test]
    fn interpolates_between_keyframes() {
        // Halfway into the first segment.
        assert!(close(shake(1.0 / 6.0), -0.5));
        // Halfway through the middle segment the nudge crosses zero.
        assert!(close(shake(0.5), 0.0));
        assert!(close(swell(0.5), 1.0));
    }

    #[test]
    fn out_of_range_progress_clamps() {
        assert!(close(shake(-0.5), 0.0));
        assert!(close(shake(1.5), 0.0));
        assert!(close(swell(2.0), 0.0));
    }

    #[test]
    fn progress_tracks_elapsed_time() {
        let t0 = Instant::now();
        let pop = PopIn::start(t0);

        assert!(close(pop.progress(t0), 0.0));
        assert!(close(pop.progress(t0 + Duration::from_millis(350)), 0.5));
        assert!(close(pop.progress(t0 + Duration::from_millis(700)), 1.0));
        // Past the end it stays pinned at 1.
        assert!(close(pop.progress(t0 + Duration::from_secs(5)), 1.0));
    }

    #[test]
    fn finished_only_after_full_duration() {
        let t0 = Instant::now();
        let pop = PopIn::start(t0);

        assert!(!pop.finished(t0 + Duration::from_millis(699)));
        assert!(pop.finished(t0 + Duration::from_millis(700)));
    }
}
