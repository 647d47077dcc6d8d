use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// Time remaining on the limited offer, ticked once per second by the banner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

pub enum CountdownAction {
    Tick,
}

impl Countdown {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn expired(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// One second elapses. Borrows from the next field up and holds at zero;
    /// the clock never wraps and never goes negative.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Self {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            }
        } else if self.hours > 0 {
            Self {
                hours: self.hours - 1,
                minutes: 59,
                seconds: 59,
            }
        } else {
            self
        }
    }
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_seconds(clock: &Countdown) -> u64 {
        u64::from(clock.hours) * 3600 + u64::from(clock.minutes) * 60 + u64::from(clock.seconds)
    }

    #[test]
    fn counts_down_within_a_minute() {
        let clock = Countdown::new(3, 59, 59);
        assert_eq!(clock.tick(), Countdown::new(3, 59, 58));
    }

    #[test]
    fn borrows_from_minutes() {
        let clock = Countdown::new(0, 1, 0);
        assert_eq!(clock.tick(), Countdown::new(0, 0, 59));
    }

    #[test]
    fn borrows_from_hours() {
        let clock = Countdown::new(1, 0, 0);
        assert_eq!(clock.tick(), Countdown::new(0, 59, 59));
    }

    #[test]
    fn holds_at_zero() {
        let clock = Countdown::new(0, 0, 0);
        assert!(clock.expired());
        assert_eq!(clock.tick(), clock);
        assert_eq!(clock.tick().tick(), clock);
    }

    #[test]
    fn never_increases_and_expires_exactly_on_time() {
        let initial = Countdown::new(0, 2, 5);
        let total = total_seconds(&initial);

        let mut clock = initial;
        let mut previous = total;
        for _ in 0..total {
            clock = clock.tick();
            let now = total_seconds(&clock);
            assert!(now < previous, "clock must strictly decrease until zero");
            assert!(now <= total);
            previous = now;
        }
        assert!(clock.expired());
        assert!(clock.tick().expired());
    }

    #[test]
    fn renders_zero_padded() {
        assert_eq!(Countdown::new(3, 59, 59).to_string(), "03:59:59");
        assert_eq!(Countdown::new(0, 0, 7).to_string(), "00:00:07");
        assert_eq!(Countdown::new(12, 5, 0).to_string(), "12:05:00");
    }
}
