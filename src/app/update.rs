// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components return events; this module turns them into state changes and
//! side-effect tasks (confirmation dialogs, network calls, file writes).

use super::{App, Message, Screen};
use crate::api::ApiClient;
use crate::app::config;
use crate::domain::BloodGroup;
use crate::error::Error;
use crate::export::{self, ExportJob, PDF_UNSUPPORTED_TEXT};
use crate::session::IdleEvent;
use crate::ui::dashboard;
use crate::ui::inventory;
use crate::ui::notifications::Notification;
use crate::ui::settings;
use crate::ui::sidebar;
use chrono::Local;
use iced::Task;
use std::path::PathBuf;

/// Warning toast shown five minutes before the session expires.
const IDLE_WARNING_TEXT: &str = "Session will expire in 5 minutes due to inactivity";

/// Error toast shown when a quick-stats refresh fails.
const STATS_ERROR_TEXT: &str = "Network error occurred. Please try again.";

/// Main update entrypoint, called by `App::update`.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Dashboard(message) => {
            let event = app.dashboard.update(message);
            handle_dashboard_event(app, event)
        }
        Message::Inventory(message) => {
            let inventory::Event::Export(job) = app.inventory.update(message);
            handle_export(app, job)
        }
        Message::Settings(message) => {
            let event = app.settings.update(message);
            handle_settings_event(app, event)
        }
        Message::Sidebar(message) => {
            if let sidebar::Event::Navigate(screen) =
                sidebar::update(message, &mut app.sidebar_open)
            {
                let entered_dashboard =
                    screen == Screen::Dashboard && app.screen != Screen::Dashboard;
                app.screen = screen;
                // Entering the dashboard refreshes the counters right away
                if entered_dashboard {
                    return fetch_stats(app);
                }
            }
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(message);
            Task::none()
        }
        Message::Tick(_now) => {
            app.notifications.tick();
            app.tick_counter = app.tick_counter.wrapping_add(1);
            Task::none()
        }
        Message::MinuteTick => handle_minute_tick(app),
        Message::StatsTick => fetch_stats(app),
        Message::StatsLoaded(result) => {
            match result {
                Ok(stats) => app.dashboard.set_stats(stats),
                Err(err) => {
                    log::warn!("quick stats refresh failed: {err}");
                    // Counters keep their last value; the user still hears
                    // about the failed round trip
                    app.notifications.push(Notification::error(STATS_ERROR_TEXT));
                }
            }
            Task::none()
        }
        Message::NotifyConfirmResolved {
            request_id,
            accepted,
        } => {
            let event = app.dashboard.update(dashboard::Message::ConfirmResolved {
                request_id,
                accepted,
            });
            handle_dashboard_event(app, event)
        }
        Message::NotifyCompleted {
            request_id,
            outcome,
        } => {
            let event = app.dashboard.update(dashboard::Message::NotifyCompleted {
                request_id,
                outcome,
            });
            handle_dashboard_event(app, event)
        }
        Message::ExportCompleted { file_name, result } => {
            handle_export_completed(app, file_name, result);
            Task::none()
        }
        Message::ActivityDetected => {
            if app.screen != Screen::SessionExpired {
                app.idle.activity();
            }
            Task::none()
        }
        Message::Reconnect => {
            app.idle.activity();
            app.screen = Screen::Dashboard;
            fetch_stats(app)
        }
        Message::WindowCloseRequested(window_id) => {
            app.app_state.sidebar_open = app.sidebar_open;
            if let Some(warning) = app.app_state.save() {
                log::warn!("state not persisted on close: {warning}");
            }
            iced::window::close(window_id)
        }
    }
}

/// Routes a dashboard event into state changes and tasks.
fn handle_dashboard_event(app: &mut App, event: dashboard::Event) -> Task<Message> {
    match event {
        dashboard::Event::None => Task::none(),
        dashboard::Event::ConfirmNotify {
            request_id,
            blood_type,
        } => confirm_notify(request_id, blood_type),
        dashboard::Event::Dispatch(request_id) => dispatch_notify(&app.api, request_id),
        dashboard::Event::Toast(notification) => {
            app.notifications.push(notification);
            Task::none()
        }
        dashboard::Event::Export(job) => handle_export(app, job),
    }
}

/// Raises the native confirmation dialog for a donor notification.
fn confirm_notify(request_id: u64, blood_type: BloodGroup) -> Task<Message> {
    let prompt = format!(
        "Send urgent notifications to all eligible donors with {blood_type} blood type?"
    );

    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_title("Notify Donors")
                .set_description(&prompt)
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                .await
        },
        move |choice| Message::NotifyConfirmResolved {
            request_id,
            accepted: matches!(choice, rfd::MessageDialogResult::Yes),
        },
    )
}

/// Fires the notification call for an accepted confirmation.
fn dispatch_notify(api: &ApiClient, request_id: u64) -> Task<Message> {
    let client = api.clone();
    Task::perform(
        async move { client.notify_donors(request_id).await },
        move |outcome| Message::NotifyCompleted {
            request_id,
            outcome,
        },
    )
}

/// Snapshots the table, renders it, and opens the save dialog. PDF renders
/// to nothing and only raises the unsupported-format toast.
fn handle_export(app: &mut App, job: ExportJob) -> Task<Message> {
    let table = export::table::snapshot(
        &job.table_id,
        app.dashboard.requests(),
        app.inventory.rows(),
    );

    let rendered = match export::render(&job, &table) {
        Ok(Some(rendered)) => rendered,
        Ok(None) => {
            app.notifications.push(Notification::info(PDF_UNSUPPORTED_TEXT));
            return Task::none();
        }
        Err(err) => {
            log::error!("export render failed: {err}");
            app.notifications
                .push(Notification::error("Could not prepare the export"));
            return Task::none();
        }
    };

    let start_dir = app.app_state.last_export_directory.clone();
    let file_name = rendered.file_name;
    let contents = rendered.contents;

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(file_name);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }

            match dialog.save_file().await {
                None => None,
                Some(handle) => {
                    let path = handle.path().to_path_buf();
                    Some(
                        std::fs::write(&path, contents.as_bytes())
                            .map(|()| path)
                            .map_err(Error::from),
                    )
                }
            }
        },
        move |result| Message::ExportCompleted { file_name, result },
    )
}

/// Settles an export: remember the directory on success, toast either way.
/// A cancelled dialog (`None`) is silent.
fn handle_export_completed(
    app: &mut App,
    file_name: &'static str,
    result: Option<Result<PathBuf, Error>>,
) {
    match result {
        None => {}
        Some(Ok(path)) => {
            app.app_state.set_last_export_directory_from_file(&path);
            if let Some(warning) = app.app_state.save() {
                log::warn!("export directory not persisted: {warning}");
            }
            app.notifications
                .push(Notification::success(format!("Exported {file_name}")));
        }
        Some(Err(err)) => {
            log::error!("export write failed: {err}");
            app.notifications
                .push(Notification::error("Could not save the export"));
        }
    }
}

/// Applies saved settings, persists them, and rebuilds the API client.
fn handle_settings_event(app: &mut App, event: settings::Event) -> Task<Message> {
    match event {
        settings::Event::None => {}
        settings::Event::Saved {
            base_url,
            theme_mode,
        } => {
            app.config.general.theme_mode = theme_mode;
            app.config.portal.base_url = if base_url.is_empty() {
                None
            } else {
                Some(base_url)
            };
            app.api = ApiClient::new(app.config.portal.effective_base_url());

            match config::save(&app.config) {
                Ok(()) => app
                    .notifications
                    .push(Notification::success("Settings saved")),
                Err(err) => {
                    log::error!("failed to save settings: {err}");
                    app.notifications
                        .push(Notification::error("Could not save settings"));
                }
            }
        }
    }
    Task::none()
}

/// Advances the clock and the idle session.
fn handle_minute_tick(app: &mut App) -> Task<Message> {
    app.now = Local::now();

    if app.screen == Screen::SessionExpired {
        return Task::none();
    }

    match app.idle.minute_tick() {
        IdleEvent::None => {}
        IdleEvent::Warn => {
            app.notifications.push(Notification::warning(IDLE_WARNING_TEXT));
        }
        IdleEvent::Expire => {
            app.screen = Screen::SessionExpired;
            // An expired session drops whatever the user was working on;
            // reconnecting starts over from the seeded tables
            app.dashboard = dashboard::State::new(app.now);
            app.inventory = inventory::State::new(app.now);
            app.notifications.clear();
        }
    }
    Task::none()
}

/// Kicks off a quick-stats fetch.
fn fetch_stats(app: &App) -> Task<Message> {
    let client = app.api.clone();
    Task::perform(
        async move { client.quick_stats().await },
        Message::StatsLoaded,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persisted_state::AppState;
    use crate::session::IdleSession;
    use crate::ui::dashboard::request_form;
    use crate::ui::notifications::{Manager, Severity};
    use crate::ui::theming::ThemeMode;

    fn test_app() -> App {
        let now = Local::now();
        App {
            screen: Screen::Dashboard,
            config: config::Config::default(),
            api: ApiClient::new(config::defaults::DEFAULT_BASE_URL),
            dashboard: dashboard::State::new(now),
            inventory: inventory::State::new(now),
            settings: settings::State::new(
                config::defaults::DEFAULT_BASE_URL.to_string(),
                ThemeMode::default(),
            ),
            sidebar_open: false,
            notifications: Manager::new(),
            idle: IdleSession::new(),
            now,
            tick_counter: 0,
            app_state: AppState::default(),
        }
    }

    fn submit_request(app: &mut App) {
        for message in [
            request_form::Message::HospitalChanged("Hill Valley Clinic".into()),
            request_form::Message::BloodTypeSelected(BloodGroup::APositive),
            request_form::Message::UnitsChanged("3".into()),
            request_form::Message::Submit,
        ] {
            let _ = update(app, Message::Dashboard(dashboard::Message::Form(message)));
        }
    }

    #[test]
    fn failed_stats_refresh_raises_error_toast() {
        let mut app = test_app();

        let _ = update(
            &mut app,
            Message::StatsLoaded(Err(Error::Http("connection refused".into()))),
        );

        let toasts = app.notifications.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Error);
        assert_eq!(toasts[0].text(), "Network error occurred. Please try again.");
    }

    #[test]
    fn idle_warning_carries_expiry_text() {
        let mut app = test_app();

        for _ in 0..=crate::session::WARN_AFTER_MINUTES {
            let _ = update(&mut app, Message::MinuteTick);
        }

        let toasts = app.notifications.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Warning);
        assert_eq!(
            toasts[0].text(),
            "Session will expire in 5 minutes due to inactivity"
        );
    }

    #[test]
    fn expiry_drops_user_state_and_reconnect_reseeds() {
        let mut app = test_app();
        submit_request(&mut app);
        let seeded = dashboard::State::new(app.now).requests().len();
        assert_eq!(app.dashboard.requests().len(), seeded + 1);

        for _ in 0..=crate::session::EXPIRE_AFTER_MINUTES {
            let _ = update(&mut app, Message::MinuteTick);
        }

        assert_eq!(app.screen, Screen::SessionExpired);
        assert_eq!(app.dashboard.requests().len(), seeded);
        assert!(!app.notifications.has_notifications());

        let _ = update(&mut app, Message::Reconnect);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.idle.idle_minutes(), 0);
    }

    #[test]
    fn sidebar_navigation_switches_screens() {
        let mut app = test_app();

        let _ = update(
            &mut app,
            Message::Sidebar(sidebar::Message::Navigate(Screen::Inventory)),
        );
        assert_eq!(app.screen, Screen::Inventory);

        // Returning to the dashboard also kicks off a stats refresh
        let _ = update(
            &mut app,
            Message::Sidebar(sidebar::Message::Navigate(Screen::Dashboard)),
        );
        assert_eq!(app.screen, Screen::Dashboard);
    }
}
