// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the dashboard, inventory, and settings
//! screens with the toast manager, idle session, and the portal API client.
//! Policy decisions (window sizing, persistence, idle thresholds) stay close
//! to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::session::IdleSession;
use crate::ui::dashboard;
use crate::ui::inventory;
use crate::ui::notifications;
use crate::ui::settings;
use chrono::{DateTime, Local};
use config::defaults::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    config: config::Config,
    api: ApiClient,
    dashboard: dashboard::State,
    inventory: inventory::State,
    settings: settings::State,
    sidebar_open: bool,
    notifications: notifications::Manager,
    idle: IdleSession,
    /// Wall clock shown in the header, advanced by the minute tick.
    now: DateTime<Local>,
    /// Animation tick counter driving the critical-stock pulse.
    tick_counter: u32,
    /// Persisted application state (last export directory, sidebar).
    app_state: persisted_state::AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("idle_minutes", &self.idle.idle_minutes())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(800.0, 600.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the first stats fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (mut config, config_warning) = config::load();
        if let Some(base_url) = flags.base_url {
            // CLI flag beats the config file for this run
            config.portal.base_url = Some(base_url.trim_end_matches('/').to_string());
        }

        let (app_state, state_warning) = persisted_state::AppState::load();

        let now = Local::now();
        let api = ApiClient::new(config.portal.effective_base_url());
        let settings = settings::State::new(
            config.portal.effective_base_url().to_string(),
            config.general.theme_mode,
        );

        let mut app = App {
            screen: Screen::Dashboard,
            api,
            dashboard: dashboard::State::new(now),
            inventory: inventory::State::new(now),
            settings,
            sidebar_open: app_state.sidebar_open,
            notifications: notifications::Manager::new(),
            idle: IdleSession::new(),
            now,
            tick_counter: 0,
            app_state,
            config,
        };

        for warning in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        let client = app.api.clone();
        let task = Task::perform(
            async move { client.quick_stats().await },
            Message::StatsLoaded,
        );

        (app, task)
    }

    fn title(&self) -> String {
        "BloodLink Staff Console".to_string()
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            sidebar_open: self.sidebar_open,
            now: self.now,
            pulse_on: self.pulse_on(),
            dashboard: &self.dashboard,
            inventory: &self.inventory,
            settings: &self.settings,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let pulse_needed =
            self.screen == Screen::Inventory && self.inventory.has_critical_rows();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.notifications.has_notifications(),
                pulse_needed,
            ),
            subscription::create_minute_subscription(),
            subscription::create_stats_subscription(self.screen),
        ])
    }

    /// Pulse phase toggled every five animation ticks (500 ms).
    fn pulse_on(&self) -> bool {
        (self.tick_counter / 5) % 2 == 0
    }
}
