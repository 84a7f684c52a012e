// SPDX-License-Identifier: MPL-2.0
//! Staff dashboard screen.
//!
//! Shows the quick-stat cards, the pending blood requests table with
//! per-row donor notification buttons, the new-request form, and the
//! table export buttons.
//!
//! # Donor notification flow
//!
//! Pressing a row's Notify button asks the parent to raise a confirmation
//! dialog. On acceptance the request ID enters the in-flight set, its
//! button renders disabled, and the parent dispatches the network call.
//! Completion always clears the in-flight entry and raises exactly one
//! toast, success or error. Presses on an in-flight row are ignored.

pub mod request_form;

use crate::api::{NotifyOutcome, QuickStats};
use crate::clock;
use crate::domain::{seed_requests, BloodGroup, BloodRequest};
use crate::export::{ExportFormat, ExportJob, REQUESTS_TABLE_ID};
use crate::ui::badge;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use chrono::{DateTime, Local};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::collections::HashSet;

/// Toast text for a form submit with missing fields.
pub const FORM_INVALID_TEXT: &str = "Please fill in all required fields";

/// Contextual data needed to render the dashboard.
pub struct ViewContext {
    pub now: DateTime<Local>,
}

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    /// A row's Notify button was pressed.
    NotifyPressed(u64),
    /// The confirmation dialog was answered.
    ConfirmResolved { request_id: u64, accepted: bool },
    /// The notification call settled.
    NotifyCompleted {
        request_id: u64,
        outcome: NotifyOutcome,
    },
    ExportPressed(ExportFormat),
    Form(request_form::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Raise a confirmation dialog for the given request.
    ConfirmNotify {
        request_id: u64,
        blood_type: BloodGroup,
    },
    /// Confirmation accepted; dispatch the network call.
    Dispatch(u64),
    Toast(Notification),
    Export(ExportJob),
}

/// Dashboard state.
#[derive(Debug)]
pub struct State {
    requests: Vec<BloodRequest>,
    stats: QuickStats,
    in_flight: HashSet<u64>,
    form: request_form::Form,
    next_request_id: u64,
}

impl State {
    /// Creates the dashboard with seed requests.
    #[must_use]
    pub fn new(now: DateTime<Local>) -> Self {
        let requests = seed_requests(now);
        let next_request_id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            requests,
            stats: QuickStats::default(),
            in_flight: HashSet::new(),
            form: request_form::Form::default(),
            next_request_id,
        }
    }

    /// Returns the pending requests, newest first.
    #[must_use]
    pub fn requests(&self) -> &[BloodRequest] {
        &self.requests
    }

    /// Replaces the quick stats after a refresh.
    pub fn set_stats(&mut self, stats: QuickStats) {
        self.stats = stats;
    }

    /// Returns whether a notification call is in flight for the request.
    #[must_use]
    pub fn is_in_flight(&self, request_id: u64) -> bool {
        self.in_flight.contains(&request_id)
    }

    /// Handles a dashboard message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NotifyPressed(request_id) => {
                if self.in_flight.contains(&request_id) {
                    return Event::None;
                }
                match self.requests.iter().find(|r| r.id == request_id) {
                    Some(request) => Event::ConfirmNotify {
                        request_id,
                        blood_type: request.blood_type,
                    },
                    None => Event::None,
                }
            }
            Message::ConfirmResolved {
                request_id,
                accepted,
            } => {
                if !accepted || !self.in_flight.insert(request_id) {
                    return Event::None;
                }
                Event::Dispatch(request_id)
            }
            Message::NotifyCompleted {
                request_id,
                outcome,
            } => {
                self.in_flight.remove(&request_id);
                Event::Toast(outcome_toast(&outcome))
            }
            Message::ExportPressed(format) => {
                Event::Export(ExportJob::new(format, REQUESTS_TABLE_ID))
            }
            Message::Form(message) => match self.form.update(message) {
                request_form::Event::None => Event::None,
                request_form::Event::Invalid => {
                    Event::Toast(Notification::warning(FORM_INVALID_TEXT))
                }
                request_form::Event::Submitted(new_request) => {
                    let request = new_request.with_id(self.next_request_id);
                    self.next_request_id += 1;
                    let id = request.id;
                    self.requests.insert(0, request);
                    Event::Toast(Notification::success(format!(
                        "Blood request #{id} added"
                    )))
                }
            },
        }
    }

    /// Renders the dashboard.
    pub fn view(&self, ctx: &ViewContext) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(spacing::LG)
            .push(self.stat_cards())
            .push(self.table_header())
            .push(self.form.view().map(Message::Form))
            .push(self.requests_table(ctx));

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .into()
    }

    /// Quick-stat counter cards.
    fn stat_cards(&self) -> Element<'_, Message> {
        Row::new()
            .spacing(spacing::MD)
            .push(stat_card("Pending Requests", self.stats.pending_requests))
            .push(stat_card("Low Stock Items", self.stats.low_stock))
            .push(stat_card(
                "Pending Eligibility",
                self.stats.pending_eligibility,
            ))
            .into()
    }

    /// Section title plus the export button strip.
    fn table_header(&self) -> Element<'_, Message> {
        let title = Text::new("Pending Blood Requests").size(typography::TITLE_SM);

        let exports = Row::new()
            .spacing(spacing::XS)
            .push(export_button(ExportFormat::Csv))
            .push(export_button(ExportFormat::Excel))
            .push(export_button(ExportFormat::Pdf));

        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Container::new(title).width(Length::Fill))
            .push(exports)
            .into()
    }

    /// The pending requests table.
    fn requests_table(&self, ctx: &ViewContext) -> Element<'_, Message> {
        let header = Row::new()
            .spacing(spacing::SM)
            .push(cell("Request", 1))
            .push(cell("Hospital", 3))
            .push(cell("Blood Type", 1))
            .push(cell("Units", 1))
            .push(cell("Needed By", 2))
            .push(cell("Requested", 2))
            .push(cell("", 2));

        let mut table = Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(rule());

        for request in &self.requests {
            table = table.push(self.request_row(request, ctx));
        }

        if self.requests.is_empty() {
            table = table.push(
                Text::new("No pending requests")
                    .size(typography::BODY_SM)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        table.into()
    }

    fn request_row<'a>(
        &'a self,
        request: &'a BloodRequest,
        ctx: &ViewContext,
    ) -> Element<'a, Message> {
        let needed_by = request
            .needed_by
            .format("%b %-d, %Y, %I:%M %p")
            .to_string();
        let requested = clock::time_since(request.created_at, ctx.now);

        let notify: Element<'_, Message> = if self.in_flight.contains(&request.id) {
            button(text("Sending...").size(typography::BODY_SM))
                .style(styles::button::disabled())
                .into()
        } else {
            let active = button(text("Notify Donors").size(typography::BODY_SM))
                .on_press(Message::NotifyPressed(request.id))
                .style(styles::button::danger);
            styles::tooltip::styled(
                active,
                "Send urgent notifications to all eligible donors",
                tooltip::Position::Top,
            )
            .into()
        };

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(cell_owned(format!("#{}", request.id), 1))
            .push(cell_owned(request.hospital.clone(), 3))
            .push(
                Container::new(badge::view(request.blood_type))
                    .width(Length::FillPortion(1)),
            )
            .push(cell_owned(request.units.to_string(), 1))
            .push(cell_owned(needed_by, 2))
            .push(cell_owned(requested, 2))
            .push(Container::new(notify).width(Length::FillPortion(2)))
            .into()
    }
}

/// Builds the toast for a settled notification call.
fn outcome_toast(outcome: &NotifyOutcome) -> Notification {
    match outcome {
        NotifyOutcome::Delivered { message, .. } => {
            Notification::success(format!("\u{2705} {message}"))
        }
        NotifyOutcome::Rejected { message } => {
            Notification::error(format!("\u{274c} {message}"))
        }
    }
}

/// One quick-stat counter card.
fn stat_card<'a>(label: &'a str, value: u32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(value.to_string()).size(typography::TITLE_MD))
        .push(Text::new(label).size(typography::BODY_SM));

    Container::new(content)
        .width(Length::Fixed(sizing::STAT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// One export button with a tooltip describing the target format.
fn export_button<'a>(format: ExportFormat) -> Element<'a, Message> {
    let label = button(text(format.label()).size(typography::BODY_SM))
        .on_press(Message::ExportPressed(format))
        .padding([spacing::XXS, spacing::XS]);

    styles::tooltip::styled(
        label,
        format!("Export table as {}", format.label()),
        tooltip::Position::Bottom,
    )
    .into()
}

fn cell<'a>(label: &'a str, portion: u16) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY_SM)
        .width(Length::FillPortion(portion))
        .into()
}

fn cell_owned<'a>(value: String, portion: u16) -> Element<'a, Message> {
    Text::new(value)
        .size(typography::BODY)
        .width(Length::FillPortion(portion))
        .into()
}

fn rule<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            ..Default::default()
        })
        .into()
}
