// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the header bar, sidebar, and the active screen, then layers
//! the toast overlay on top with a `Stack`.

use super::{Message, Screen};
use crate::clock;
use crate::ui::dashboard;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::inventory;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings;
use crate::ui::sidebar;
use crate::ui::styles;
use chrono::{DateTime, Local};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub sidebar_open: bool,
    pub now: DateTime<Local>,
    pub pulse_on: bool,
    pub dashboard: &'a dashboard::State,
    pub inventory: &'a inventory::State,
    pub settings: &'a settings::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = match ctx.screen {
        Screen::SessionExpired => view_session_expired(),
        _ => view_workspace(&ctx),
    };

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Header bar plus sidebar plus the active screen.
fn view_workspace<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.screen {
        Screen::Dashboard => ctx
            .dashboard
            .view(&dashboard::ViewContext { now: ctx.now })
            .map(Message::Dashboard),
        Screen::Inventory => ctx
            .inventory
            .view(&inventory::ViewContext {
                now: ctx.now,
                pulse_on: ctx.pulse_on,
            })
            .map(Message::Inventory),
        Screen::Settings => ctx.settings.view().map(Message::Settings),
        Screen::SessionExpired => unreachable!("handled by the caller"),
    };

    let body = Row::new()
        .push(
            sidebar::view(&sidebar::ViewContext {
                open: ctx.sidebar_open,
                active_screen: ctx.screen,
            })
            .map(Message::Sidebar),
        )
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    Column::new()
        .push(header_bar(ctx.now))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Top bar with the sidebar toggle, app title, and live clock.
fn header_bar<'a>(now: DateTime<Local>) -> Element<'a, Message> {
    let toggle = sidebar::toggle_button().map(Message::Sidebar);

    let title = Text::new("BloodLink Staff Console").size(typography::TITLE_MD);

    let clock_line = Text::new(clock::header_line(now)).size(typography::BODY_SM);

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(toggle)
        .push(Container::new(title).width(Length::Fill))
        .push(clock_line)
        .into()
}

/// Full-window takeover once the idle session has expired.
fn view_session_expired<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Session Expired").size(typography::TITLE_LG))
        .push(
            Text::new("You were signed out after 30 minutes of inactivity.")
                .size(typography::BODY),
        )
        .push(
            button(text("Reconnect").size(typography::BODY))
                .on_press(Message::Reconnect)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
