use log::trace;
use std::time::{Duration, Instant};

/// A periodic deadline.  The owner is responsible for calling
/// [`Timer::fire()`] often enough; the timer itself never wakes anyone up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timer {
    period: Duration,
    next: Option<Instant>,
}

impl Timer {
    /// Create a new, stopped timer
    pub(crate) fn new(period: Duration) -> Timer {
        Timer { period, next: None }
    }

    pub(crate) fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub(crate) fn stop(&mut self) {
        self.next = None;
    }

    /// Return the time at which the timer next goes off, if it's running
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// If the timer is running and its deadline is at or before `now`, schedule
    /// the next deadline and return `true`.
    ///
    /// If more than one period has been missed, the missed deadlines are
    /// collapsed into this one.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        let Some(when) = self.next.filter(|&when| when <= now) else {
            return false;
        };
        let mut next = when + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next = Some(next);
        true
    }
}

/// The simulation & render timers, which are always started and stopped
/// together
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timers {
    pub(crate) simulation: Timer,
    pub(crate) render: Timer,
}

impl Timers {
    pub(crate) fn new(simulation: Duration, render: Duration) -> Timers {
        Timers {
            simulation: Timer::new(simulation),
            render: Timer::new(render),
        }
    }

    pub(crate) fn start(&mut self, now: Instant) {
        trace!("Starting simulation & render timers");
        self.simulation.start(now);
        self.render.start(now);
    }

    pub(crate) fn stop(&mut self) {
        trace!("Stopping simulation & render timers");
        self.simulation.stop();
        self.render.stop();
    }

    /// Return the earliest pending deadline of either timer
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match (self.simulation.deadline(), self.render.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_timer_never_fires() {
        let now = Instant::now();
        let mut timer = Timer::new(PERIOD);
        assert_eq!(timer.deadline(), None);
        assert!(!timer.fire(now + PERIOD * 10));
    }

    #[test]
    fn fires_once_per_period() {
        let start = Instant::now();
        let mut timer = Timer::new(PERIOD);
        timer.start(start);
        assert_eq!(timer.deadline(), Some(start + PERIOD));
        assert!(!timer.fire(start + PERIOD / 2));
        assert!(timer.fire(start + PERIOD));
        assert!(!timer.fire(start + PERIOD));
        assert_eq!(timer.deadline(), Some(start + PERIOD * 2));
        assert!(timer.fire(start + PERIOD * 2 + PERIOD / 4));
        assert_eq!(timer.deadline(), Some(start + PERIOD * 3));
    }

    #[test]
    fn missed_periods_coalesce() {
        let start = Instant::now();
        let mut timer = Timer::new(PERIOD);
        timer.start(start);
        let late = start + PERIOD * 5 + PERIOD / 2;
        assert!(timer.fire(late));
        assert!(!timer.fire(late));
        assert_eq!(timer.deadline(), Some(late + PERIOD));
    }

    #[test]
    fn stop_cancels_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new(PERIOD);
        timer.start(start);
        timer.stop();
        assert!(!timer.fire(start + PERIOD * 2));
        timer.start(start + PERIOD * 2);
        assert_eq!(timer.deadline(), Some(start + PERIOD * 3));
    }

    #[test]
    fn pair_starts_and_stops_together() {
        let start = Instant::now();
        let mut timers = Timers::new(PERIOD, Duration::from_millis(16));
        assert_eq!(timers.next_deadline(), None);
        timers.start(start);
        assert!(timers.simulation.deadline().is_some());
        assert!(timers.render.deadline().is_some());
        assert_eq!(
            timers.next_deadline(),
            Some(start + Duration::from_millis(16))
        );
        timers.stop();
        assert_eq!(timers.simulation.deadline(), None);
        assert_eq!(timers.render.deadline(), None);
        assert_eq!(timers.next_deadline(), None);
    }
}
