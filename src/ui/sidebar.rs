// SPDX-License-Identifier: MPL-2.0
//! Sidebar module for app-level navigation.
//!
//! A collapsible panel on the left edge with entries for the Dashboard,
//! Inventory, and Settings screens. A hamburger button in the top bar
//! toggles it; selecting an entry navigates and closes the panel, and
//! Escape closes it without navigating.

use crate::app::Screen;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext {
    pub open: bool,
    pub active_screen: Screen,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Close,
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, open: &mut bool) -> Event {
    match message {
        Message::Toggle => {
            *open = !*open;
            Event::None
        }
        Message::Close => {
            *open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *open = false;
            Event::Navigate(screen)
        }
    }
}

/// Render the toggle button that lives in the top bar.
pub fn toggle_button<'a>() -> Element<'a, Message> {
    button(Text::new("\u{2630}").size(typography::TITLE_SM))
        .on_press(Message::Toggle)
        .padding(spacing::XS)
        .into()
}

/// Render the navigation panel. Returns nothing visible when closed.
pub fn view<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    if !ctx.open {
        return Column::new().into();
    }

    let entries = Column::new()
        .spacing(spacing::XXS)
        .push(entry("Dashboard", Screen::Dashboard, ctx.active_screen))
        .push(entry("Inventory", Screen::Inventory, ctx.active_screen))
        .push(entry("Settings", Screen::Settings, ctx.active_screen));

    Container::new(entries)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single navigation entry.
fn entry<'a>(label: &'a str, target: Screen, active: Screen) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY));

    let styled = if target == active {
        button(row).style(active_entry_style)
    } else {
        button(row).style(entry_style)
    };

    styled
        .on_press(Message::Navigate(target))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .into()
}

/// Style function for inactive entries.
fn entry_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Style function for the entry of the screen currently shown.
fn active_entry_style(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_view_renders_open_and_closed() {
        let _open = view(&ViewContext {
            open: true,
            active_screen: Screen::Dashboard,
        });
        let _closed = view(&ViewContext {
            open: false,
            active_screen: Screen::Dashboard,
        });
    }

    #[test]
    fn toggle_flips_state_without_event() {
        let mut open = false;
        let event = update(Message::Toggle, &mut open);
        assert!(open);
        assert!(matches!(event, Event::None));

        let event = update(Message::Toggle, &mut open);
        assert!(!open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn close_only_closes() {
        let mut open = true;
        let event = update(Message::Close, &mut open);
        assert!(!open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navigate_emits_target_and_closes_panel() {
        let mut open = true;
        let event = update(Message::Navigate(Screen::Inventory), &mut open);
        assert!(!open);
        assert!(matches!(event, Event::Navigate(Screen::Inventory)));
    }
}
