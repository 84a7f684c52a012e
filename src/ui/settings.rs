// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! Edits the portal base URL and the theme mode. Changes only take effect
//! when saved; the parent persists them and confirms with a toast.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BaseUrlChanged(String),
    ThemeSelected(ThemeMode),
    Save,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user saved; the parent applies and persists these values.
    Saved {
        base_url: String,
        theme_mode: ThemeMode,
    },
}

/// Settings screen state. Holds edits that are not yet applied.
#[derive(Debug, Clone)]
pub struct State {
    base_url: String,
    theme_mode: ThemeMode,
}

impl State {
    /// Creates the screen seeded with the active configuration.
    #[must_use]
    pub fn new(base_url: String, theme_mode: ThemeMode) -> Self {
        Self {
            base_url,
            theme_mode,
        }
    }

    /// Handles a settings message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BaseUrlChanged(value) => {
                self.base_url = value;
                Event::None
            }
            Message::ThemeSelected(mode) => {
                self.theme_mode = mode;
                Event::None
            }
            Message::Save => Event::Saved {
                base_url: self.base_url.trim().trim_end_matches('/').to_owned(),
                theme_mode: self.theme_mode,
            },
        }
    }

    /// Renders the settings screen.
    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Settings").size(typography::TITLE_SM);

        let base_url_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(label("Portal base URL"))
            .push(
                text_input("http://localhost:5000", &self.base_url)
                    .on_input(Message::BaseUrlChanged)
                    .width(Length::Fixed(sizing::FORM_FIELD_WIDTH * 1.5)),
            );

        let theme_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(label("Theme"))
            .push(
                pick_list(ThemeMode::ALL, Some(self.theme_mode), Message::ThemeSelected)
                    .width(Length::Fixed(sizing::FORM_FIELD_WIDTH)),
            );

        let save = button(text("Save").size(typography::BODY))
            .on_press(Message::Save)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(base_url_row)
            .push(theme_row)
            .push(save);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .into()
    }
}

fn label<'a>(value: &'a str) -> Element<'a, Message> {
    Text::new(value)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::FORM_FIELD_WIDTH * 0.7))
        .into()
}
