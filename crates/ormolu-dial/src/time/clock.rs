use chrono::{Datelike, Local, Timelike};

use super::ClockSample;

/// Wall-clock time source consumed by the scheduler.
///
/// `now_ms` feeds the throttle and the stepping boundary; `sample` feeds the
/// hand angles and the date window. Both are read once per tick, back to
/// back, so the two views of "now" can disagree by at most one frame.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;

    /// Current local time decomposed for rendering.
    fn sample(&self) -> ClockSample;
}

/// System clock reading local civil time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        Local::now().timestamp_millis() as f64
    }

    fn sample(&self) -> ClockSample {
        let now = Local::now();
        ClockSample {
            hours: now.hour(),
            minutes: now.minute(),
            seconds: now.second(),
            milliseconds: now.timestamp_subsec_millis().min(999),
            month: now.month(),
            day_of_month: now.day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_yields_in_range_fields() {
        let s = SystemClock::new().sample();
        assert!(s.hours < 24);
        assert!(s.minutes < 60);
        assert!(s.seconds < 60);
        assert!(s.milliseconds < 1000);
        assert!((1..=12).contains(&s.month));
        assert!((1..=31).contains(&s.day_of_month));
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new();
        let t1 = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let t2 = clock.now_ms();
        assert!(t2 > t1);
    }
}
