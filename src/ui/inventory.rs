// SPDX-License-Identifier: MPL-2.0
//! Blood inventory screen.
//!
//! Renders one row per blood type with stock-level highlighting: rows low
//! on stock are tinted amber, critical rows are tinted red and pulse while
//! the screen is visible. Carries its own export button strip.

use crate::clock;
use crate::domain::{seed_inventory, InventoryRow, StockLevel};
use crate::export::{ExportFormat, ExportJob, INVENTORY_TABLE_ID};
use crate::ui::badge;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Local};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Contextual data needed to render the inventory.
pub struct ViewContext {
    pub now: DateTime<Local>,
    /// Alternates on the animation tick to pulse critical rows.
    pub pulse_on: bool,
}

/// Messages emitted by the inventory screen.
#[derive(Debug, Clone)]
pub enum Message {
    ExportPressed(ExportFormat),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Export(ExportJob),
}

/// Inventory state.
#[derive(Debug)]
pub struct State {
    rows: Vec<InventoryRow>,
}

impl State {
    /// Creates the inventory with seed stock levels.
    #[must_use]
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            rows: seed_inventory(now),
        }
    }

    /// Returns the inventory rows, one per blood type.
    #[must_use]
    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    /// Returns whether any row is critical, which keeps the pulse
    /// animation tick alive while the screen is shown.
    #[must_use]
    pub fn has_critical_rows(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.stock_level() == StockLevel::Critical)
    }

    /// Handles an inventory message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ExportPressed(format) => {
                Event::Export(ExportJob::new(format, INVENTORY_TABLE_ID))
            }
        }
    }

    /// Renders the inventory screen.
    pub fn view(&self, ctx: &ViewContext) -> Element<'_, Message> {
        let title = Text::new("Blood Inventory").size(typography::TITLE_SM);

        let exports = Row::new()
            .spacing(spacing::XS)
            .push(export_button(ExportFormat::Csv))
            .push(export_button(ExportFormat::Excel))
            .push(export_button(ExportFormat::Pdf));

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Container::new(title).width(Length::Fill))
            .push(exports);

        let table_header = Row::new()
            .spacing(spacing::SM)
            .push(cell("Blood Type", 2))
            .push(cell("Units Available", 2))
            .push(cell("Status", 2))
            .push(cell("Last Updated", 3));

        let mut table = Column::new().spacing(spacing::XS).push(table_header);
        for row in &self.rows {
            table = table.push(inventory_row(row, ctx));
        }

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(table);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .into()
    }
}

/// One inventory row, tinted by stock level.
fn inventory_row<'a>(row: &'a InventoryRow, ctx: &ViewContext) -> Element<'a, Message> {
    let level = row.stock_level();
    let tint = row_tint(level, ctx.pulse_on);

    let status = match level {
        StockLevel::Critical => "Critical",
        StockLevel::Low => "Low",
        StockLevel::Normal => "Normal",
    };

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(badge::view(row.blood_type)).width(Length::FillPortion(2)))
        .push(cell_owned(row.units.to_string(), 2))
        .push(cell_owned(status.to_string(), 2))
        .push(cell_owned(clock::format_date(row.updated_at), 3));

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme| container::Style {
            background: tint.map(Into::into),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Background tint for a stock level. Critical rows alternate between two
/// red intensities on the animation tick.
fn row_tint(level: StockLevel, pulse_on: bool) -> Option<Color> {
    match level {
        StockLevel::Critical if pulse_on => Some(palette::ROW_DANGER_PULSE),
        StockLevel::Critical => Some(palette::ROW_DANGER),
        StockLevel::Low => Some(palette::ROW_WARNING),
        StockLevel::Normal => None,
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_inventory_contains_critical_rows() {
        let state = State::new(Local::now());
        assert!(state.has_critical_rows());
    }

    #[test]
    fn export_press_emits_an_inventory_table_job() {
        let mut state = State::new(Local::now());
        let event = state.update(Message::ExportPressed(ExportFormat::Excel));

        let Event::Export(job) = event;
        assert_eq!(job.format, ExportFormat::Excel);
        assert_eq!(job.table_id, INVENTORY_TABLE_ID);
    }

    #[test]
    fn critical_rows_pulse_between_two_tints() {
        let calm = row_tint(StockLevel::Critical, false);
        let bright = row_tint(StockLevel::Critical, true);
        assert_ne!(calm, bright);
        assert!(calm.is_some() && bright.is_some());
    }

    #[test]
    fn normal_rows_have_no_tint() {
        assert_eq!(row_tint(StockLevel::Normal, true), None);
        assert_eq!(row_tint(StockLevel::Normal, false), None);
    }

    #[test]
    fn low_rows_do_not_pulse() {
        assert_eq!(
            row_tint(StockLevel::Low, true),
            row_tint(StockLevel::Low, false)
        );
    }
}
