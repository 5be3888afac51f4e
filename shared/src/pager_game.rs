//! Draw animation for the eight-slot grid lottery.
//!
//! The outcome is decided by the server before the animation starts; this
//! state machine only walks a highlight pointer around the ring so the
//! reveal looks random. It is driven by wall-clock ticks so the frontend
//! can feed it animation-frame timestamps and tests can feed it a fake
//! clock.

/// Number of display slots around the start button.
pub const PAGER_ITEM_COUNT: usize = 8;

/// Default wall-clock length of one draw.
pub const DEFAULT_DRAW_DURATION_MS: f64 = 6000.0;

/// Full revolutions required before the pointer may stop on the target.
pub const MIN_ROUNDS: u32 = 3;

const START_INTERVAL_MS: f64 = 50.0;
const END_INTERVAL_MS: f64 = 200.0;

fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Milliseconds between highlight switches at a given progress (0..1):
/// fast at the start, easing out to slow near the end.
pub fn switch_interval(progress: f64) -> f64 {
    START_INTERVAL_MS + ease_out_quad(progress.clamp(0.0, 1.0)) * (END_INTERVAL_MS - START_INTERVAL_MS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerFrame {
    pub index: usize,
    pub progress: f64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct PagerDraw {
    item_count: usize,
    target: usize,
    duration_ms: f64,
    start_ms: f64,
    last_switch_ms: f64,
    current: usize,
    rounds: u32,
    finished: bool,
}

impl PagerDraw {
    /// `target` is the zero-based slot the server chose. `start_ms` is the
    /// clock value of the first frame; later ticks pass the same clock.
    pub fn new(target: usize, item_count: usize, duration_ms: f64, start_ms: f64) -> Self {
        Self {
            item_count: item_count.max(1),
            target: target % item_count.max(1),
            duration_ms,
            start_ms,
            last_switch_ms: start_ms,
            current: 0,
            rounds: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the walk to `now_ms`. After the terminal frame, further
    /// ticks return the same finished frame and mutate nothing, so a
    /// completion callback keyed on the `finished` edge fires once.
    pub fn tick(&mut self, now_ms: f64) -> PagerFrame {
        if self.finished {
            return PagerFrame { index: self.current, progress: 1.0, finished: true };
        }

        let elapsed = (now_ms - self.start_ms).max(0.0);
        let progress = (elapsed / self.duration_ms).min(1.0);

        if progress >= 1.0 {
            // Out of time: snap straight onto the decided slot.
            self.current = self.target;
            self.finished = true;
            return PagerFrame { index: self.current, progress: 1.0, finished: true };
        }

        if now_ms - self.last_switch_ms >= switch_interval(progress) {
            self.current = (self.current + 1) % self.item_count;
            self.last_switch_ms = now_ms;
            if self.current == 0 {
                self.rounds += 1;
            }
            if self.rounds >= MIN_ROUNDS && self.current == self.target {
                self.finished = true;
            }
        }

        PagerFrame { index: self.current, progress, finished: self.finished }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives the draw with a fixed frame step until it finishes,
    /// returning every emitted frame.
    fn run(draw: &mut PagerDraw, step_ms: f64, limit_ms: f64) -> Vec<PagerFrame> {
        let mut frames = Vec::new();
        let mut now = 0.0;
        loop {
            let frame = draw.tick(now);
            frames.push(frame);
            if frame.finished || now > limit_ms {
                return frames;
            }
            now += step_ms;
        }
    }

    #[test]
    fn lands_exactly_on_the_target() {
        for target in 0..PAGER_ITEM_COUNT {
            let mut draw =
                PagerDraw::new(target, PAGER_ITEM_COUNT, DEFAULT_DRAW_DURATION_MS, 0.0);
            let frames = run(&mut draw, 16.0, 20_000.0);
            let last = frames.last().unwrap();
            assert!(last.finished, "target {target} never finished");
            assert_eq!(last.index, target);
        }
    }

    #[test]
    fn makes_at_least_three_revolutions_before_stopping() {
        let mut draw = PagerDraw::new(2, PAGER_ITEM_COUNT, DEFAULT_DRAW_DURATION_MS, 0.0);
        let frames = run(&mut draw, 16.0, 20_000.0);

        // Count wraps to slot 0 among the pre-terminal frames.
        let mut wraps = 0;
        let mut prev = 0usize;
        for f in &frames[..frames.len() - 1] {
            if f.index == 0 && prev != 0 {
                wraps += 1;
            }
            prev = f.index;
        }
        assert!(wraps >= MIN_ROUNDS, "only {wraps} revolutions before stop");
        assert!(draw.rounds() >= MIN_ROUNDS);
    }

    #[test]
    fn duration_expiry_snaps_to_target() {
        // A duration shorter than three revolutions forces the snap path.
        let mut draw = PagerDraw::new(5, PAGER_ITEM_COUNT, 120.0, 0.0);
        let frames = run(&mut draw, 16.0, 1_000.0);
        let last = frames.last().unwrap();
        assert!(last.finished);
        assert_eq!(last.index, 5);
        assert!(draw.rounds() < MIN_ROUNDS);
    }

    #[test]
    fn finishes_exactly_once() {
        let mut draw = PagerDraw::new(3, PAGER_ITEM_COUNT, DEFAULT_DRAW_DURATION_MS, 0.0);
        let frames = run(&mut draw, 16.0, 20_000.0);
        assert_eq!(frames.iter().filter(|f| f.finished).count(), 1);

        // Ticking a finished draw stays finished on the same slot.
        let after = draw.tick(1_000_000.0);
        assert!(after.finished);
        assert_eq!(after.index, 3);
    }

    #[test]
    fn interval_eases_from_fast_to_slow() {
        assert_eq!(switch_interval(0.0), 50.0);
        assert_eq!(switch_interval(1.0), 200.0);
        assert!(switch_interval(0.3) < switch_interval(0.7));
    }
}
