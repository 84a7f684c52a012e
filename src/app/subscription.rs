// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three periodic clocks drive the console: a 100 ms animation tick that
//! only runs while something animates (toasts or the critical-stock pulse),
//! a once-a-minute tick for the header clock and idle session, and the
//! quick-stats refresh interval while the dashboard is shown.

use super::{Message, Screen};
use crate::app::config::defaults::STATS_REFRESH_SECS;
use crate::ui::sidebar;
use iced::keyboard::{key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Native event routing. Keyboard and mouse input counts as user activity
/// for the idle session, Escape closes the sidebar, and window close
/// requests flush state on every screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match &event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Sidebar(sidebar::Message::Close)),
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. })
        | event::Event::Mouse(
            iced::mouse::Event::ButtonPressed(_) | iced::mouse::Event::CursorMoved { .. },
        ) => Some(Message::ActivityDetected),
        _ => None,
    })
}

/// 100 ms animation tick, active only while toasts exist or a critical
/// inventory row needs to pulse.
pub fn create_tick_subscription(
    has_notifications: bool,
    pulse_needed: bool,
) -> Subscription<Message> {
    if has_notifications || pulse_needed {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Once-a-minute tick for the header clock and the idle session.
pub fn create_minute_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(60)).map(|_| Message::MinuteTick)
}

/// Quick-stats refresh, active only on the dashboard.
pub fn create_stats_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Dashboard {
        time::every(Duration::from_secs(STATS_REFRESH_SECS)).map(|_| Message::StatsTick)
    } else {
        Subscription::none()
    }
}
