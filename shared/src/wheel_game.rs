//! Spin animation for the wheel lottery.
//!
//! Like the grid draw, the winning segment is decided by the server before
//! the wheel moves. The spin adds a fixed number of full turns for flourish
//! plus the exact angular offset that parks the pointer on the target
//! segment, eased with a quintic ease-out. The terminal frame forces the
//! exact final angle so no floating-point drift from the curve survives.

/// Extra full turns on top of the offset needed to reach the target.
pub const EXTRA_ROTATIONS: f64 = 5.0;

/// Default wall-clock length of one spin.
pub const DEFAULT_SPIN_DURATION_MS: f64 = 3000.0;

fn ease_out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

pub fn segment_angle(segment_count: usize) -> f64 {
    360.0 / segment_count.max(1) as f64
}

/// Absolute rotation (degrees) that parks the wheel on `target_segment`
/// (1-based, the server's position convention), starting from
/// `current_rotation`. Always moves forward by at least one slot and by
/// `EXTRA_ROTATIONS` full turns.
pub fn target_rotation(current_rotation: f64, target_segment: usize, segment_count: usize) -> f64 {
    let target_angle = segment_angle(segment_count) * target_segment.saturating_sub(1) as f64;
    let current_angle = current_rotation.rem_euclid(360.0);
    let mut needed = target_angle - current_angle;
    if needed <= 0.0 {
        needed += 360.0;
    }
    current_rotation + needed + 360.0 * EXTRA_ROTATIONS
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelFrame {
    pub rotation: f64,
    pub progress: f64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct WheelSpin {
    start_rotation: f64,
    final_rotation: f64,
    duration_ms: f64,
    start_ms: f64,
    finished: bool,
}

impl WheelSpin {
    pub fn new(
        current_rotation: f64,
        target_segment: usize,
        segment_count: usize,
        duration_ms: f64,
        start_ms: f64,
    ) -> Self {
        Self {
            start_rotation: current_rotation,
            final_rotation: target_rotation(current_rotation, target_segment, segment_count),
            duration_ms,
            start_ms,
            finished: false,
        }
    }

    pub fn final_rotation(&self) -> f64 {
        self.final_rotation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, now_ms: f64) -> WheelFrame {
        if self.finished {
            return WheelFrame { rotation: self.final_rotation, progress: 1.0, finished: true };
        }

        let elapsed = (now_ms - self.start_ms).max(0.0);
        let progress = (elapsed / self.duration_ms).min(1.0);

        if progress >= 1.0 {
            self.finished = true;
            return WheelFrame { rotation: self.final_rotation, progress: 1.0, finished: true };
        }

        let rotation = self.start_rotation
            + (self.final_rotation - self.start_rotation) * ease_out_quint(progress);
        WheelFrame { rotation, progress, finished: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_rotation_parks_on_the_target_segment() {
        for target in 1..=8usize {
            let mut spin = WheelSpin::new(90.0, target, 8, DEFAULT_SPIN_DURATION_MS, 0.0);
            let frame = spin.tick(DEFAULT_SPIN_DURATION_MS);
            assert!(frame.finished);
            let expected = segment_angle(8) * (target - 1) as f64;
            let landed = frame.rotation.rem_euclid(360.0);
            assert!(
                (landed - expected).abs() < 1e-9,
                "target {target}: landed {landed}, expected {expected}"
            );
        }
    }

    #[test]
    fn spins_at_least_the_extra_turns() {
        let spin = WheelSpin::new(0.0, 3, 8, DEFAULT_SPIN_DURATION_MS, 0.0);
        assert!(spin.final_rotation() - 0.0 >= 360.0 * EXTRA_ROTATIONS);
    }

    #[test]
    fn always_moves_forward_even_when_already_on_target() {
        // Pointer already on segment 1: still one full slot turn plus extras.
        let final_rotation = target_rotation(0.0, 1, 8);
        assert!(final_rotation > 0.0);
        assert!((final_rotation.rem_euclid(360.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_stays_short_of_final_until_the_terminal_frame() {
        let mut spin = WheelSpin::new(45.0, 5, 8, DEFAULT_SPIN_DURATION_MS, 0.0);
        let mut now = 0.0;
        let mut last = f64::MIN;
        loop {
            let frame = spin.tick(now);
            if frame.finished {
                assert_eq!(frame.rotation, spin.final_rotation());
                break;
            }
            assert!(frame.rotation < spin.final_rotation());
            assert!(frame.rotation >= last, "rotation went backwards");
            last = frame.rotation;
            now += 16.0;
        }
    }

    #[test]
    fn finished_spin_is_stable() {
        let mut spin = WheelSpin::new(0.0, 2, 8, 100.0, 0.0);
        let a = spin.tick(100.0);
        let b = spin.tick(5_000.0);
        assert!(a.finished && b.finished);
        assert_eq!(a.rotation, b.rotation);
    }
}
