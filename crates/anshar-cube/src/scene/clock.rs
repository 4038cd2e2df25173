use std::f32::consts::PI;
use std::time::Instant;

/// Fixed per-update step used on software adapters.
pub const SYNTHETIC_STEP: f32 = PI * 0.0125;

/// Absolute scene time in seconds.
///
/// On real hardware this is the wall-clock time since the first tick. On a
/// CPU/reference rasterizer the clock instead advances by a fixed step per
/// update, so such runs are deterministic rather than wall-clock-bound.
pub enum SceneClock {
    RealTime { start: Option<Instant>, t: f32 },
    Synthetic { t: f32 },
}

impl SceneClock {
    pub fn new(software_adapter: bool) -> Self {
        if software_adapter {
            Self::Synthetic { t: 0.0 }
        } else {
            Self::RealTime { start: None, t: 0.0 }
        }
    }

    /// Advances the clock for one update and returns the new scene time.
    ///
    /// The first real-time tick establishes the baseline, so it returns 0.
    pub fn advance(&mut self, now: Instant) -> f32 {
        match self {
            Self::RealTime { start, t } => {
                let baseline = *start.get_or_insert(now);
                *t = now.duration_since(baseline).as_secs_f32();
                *t
            }
            Self::Synthetic { t } => {
                *t += SYNTHETIC_STEP;
                *t
            }
        }
    }

    /// Current scene time without advancing.
    pub fn t(&self) -> f32 {
        match self {
            Self::RealTime { t, .. } | Self::Synthetic { t } => *t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn synthetic_clock_advances_by_the_fixed_step() {
        let mut clock = SceneClock::new(true);
        let now = Instant::now();
        assert!((clock.advance(now) - SYNTHETIC_STEP).abs() < 1e-7);
        assert!((clock.advance(now) - 2.0 * SYNTHETIC_STEP).abs() < 1e-7);
        assert!((clock.advance(now) - 3.0 * SYNTHETIC_STEP).abs() < 1e-7);
    }

    #[test]
    fn synthetic_step_is_independent_of_elapsed_time() {
        let mut clock = SceneClock::new(true);
        let now = Instant::now();
        clock.advance(now);
        // A much later timestamp still advances by exactly one step.
        let later = now + Duration::from_secs(60);
        assert!((clock.advance(later) - 2.0 * SYNTHETIC_STEP).abs() < 1e-7);
    }

    #[test]
    fn real_clock_starts_at_zero() {
        let mut clock = SceneClock::new(false);
        let now = Instant::now();
        assert_eq!(clock.advance(now), 0.0);
    }

    #[test]
    fn real_clock_measures_elapsed_seconds_from_the_first_tick() {
        let mut clock = SceneClock::new(false);
        let now = Instant::now();
        clock.advance(now);
        let t = clock.advance(now + Duration::from_millis(1500));
        assert!((t - 1.5).abs() < 1e-6);
    }
}
