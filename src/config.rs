use crate::state::countdown::Countdown;

/// Where the offer clock starts on every page load.
pub const OFFER_COUNTDOWN_START: Countdown = Countdown::new(3, 59, 59);
