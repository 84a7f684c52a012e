// SPDX-License-Identifier: MPL-2.0
//! Idle-session monitor.
//!
//! The portal tracked idle time in ambient globals; the console owns it as an
//! explicit session object ticked once a minute by the app and reset by any
//! input event. Crossing 25 idle minutes raises a single warning per idle
//! stretch; crossing 30 expires the session.

/// One warning toast per idle stretch, five minutes before expiry.
pub const WARN_AFTER_MINUTES: u32 = 25;

/// Idle minutes after which the session expires.
pub const EXPIRE_AFTER_MINUTES: u32 = 30;

/// Outcome of one idle-minute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEvent {
    None,
    /// Session will expire soon; warn the user once.
    Warn,
    /// Session expired; drop dashboard state.
    Expire,
}

/// Tracks how long the user has been idle.
#[derive(Debug, Default)]
pub struct IdleSession {
    idle_minutes: u32,
    warned: bool,
}

impl IdleSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the idle counter by one minute.
    pub fn minute_tick(&mut self) -> IdleEvent {
        self.idle_minutes += 1;
        if self.idle_minutes > EXPIRE_AFTER_MINUTES {
            IdleEvent::Expire
        } else if self.idle_minutes > WARN_AFTER_MINUTES && !self.warned {
            self.warned = true;
            IdleEvent::Warn
        } else {
            IdleEvent::None
        }
    }

    /// Resets the counter; called on any input event.
    pub fn activity(&mut self) {
        self.idle_minutes = 0;
        self.warned = false;
    }

    #[must_use]
    pub fn idle_minutes(&self) -> u32 {
        self.idle_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_does_not_warn() {
        let mut session = IdleSession::new();
        for _ in 0..WARN_AFTER_MINUTES {
            assert_eq!(session.minute_tick(), IdleEvent::None);
        }
    }

    #[test]
    fn warns_once_after_crossing_threshold() {
        let mut session = IdleSession::new();
        for _ in 0..WARN_AFTER_MINUTES {
            session.minute_tick();
        }
        assert_eq!(session.minute_tick(), IdleEvent::Warn);
        // Still idle, but already warned
        assert_eq!(session.minute_tick(), IdleEvent::None);
    }

    #[test]
    fn expires_after_thirty_minutes() {
        let mut session = IdleSession::new();
        let mut last = IdleEvent::None;
        for _ in 0..=EXPIRE_AFTER_MINUTES {
            last = session.minute_tick();
        }
        assert_eq!(last, IdleEvent::Expire);
    }

    #[test]
    fn activity_resets_counter_and_rearms_warning() {
        let mut session = IdleSession::new();
        for _ in 0..=WARN_AFTER_MINUTES {
            session.minute_tick();
        }
        session.activity();
        assert_eq!(session.idle_minutes(), 0);

        for _ in 0..WARN_AFTER_MINUTES {
            assert_eq!(session.minute_tick(), IdleEvent::None);
        }
        assert_eq!(session.minute_tick(), IdleEvent::Warn);
    }
}
