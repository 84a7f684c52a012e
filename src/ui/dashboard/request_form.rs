// SPDX-License-Identifier: MPL-2.0
//! Inline form for creating a new blood request.
//!
//! Every field is required. Submitting with a missing or unparseable field
//! marks the offending inputs and asks the parent to show a warning toast;
//! nothing is created until all fields validate.

use crate::app::config::defaults::{MAX_REQUEST_UNITS, MIN_REQUEST_UNITS};
use crate::clock;
use crate::domain::{BloodGroup, BloodRequest};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use iced::widget::{button, pick_list, text, text_input, Column, Row, Text};
use iced::{Border, Element, Length, Theme};

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    HospitalChanged(String),
    BloodTypeSelected(BloodGroup),
    UnitsChanged(String),
    DateChanged(String),
    TimeChanged(String),
    Submit,
}

/// Events propagated to the dashboard.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// At least one required field is missing or malformed.
    Invalid,
    /// All fields validated; the parent assigns the request an ID.
    Submitted(NewRequest),
}

/// A validated request, pending an ID from the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequest {
    pub hospital: String,
    pub blood_type: BloodGroup,
    pub units: u32,
    pub needed_by: NaiveDateTime,
}

impl NewRequest {
    /// Promote to a full request once the parent has chosen an ID.
    #[must_use]
    pub fn with_id(self, id: u64) -> BloodRequest {
        BloodRequest {
            id,
            hospital: self.hospital,
            blood_type: self.blood_type,
            units: self.units,
            needed_by: self.needed_by,
            created_at: Local::now(),
        }
    }
}

/// Form state. Field values stay as entered until a successful submit
/// resets them to fresh defaults.
#[derive(Debug, Clone)]
pub struct Form {
    hospital: String,
    blood_type: Option<BloodGroup>,
    units: String,
    date: String,
    time: String,
    hospital_invalid: bool,
    blood_type_invalid: bool,
    units_invalid: bool,
    date_invalid: bool,
    time_invalid: bool,
}

impl Default for Form {
    fn default() -> Self {
        let now = Local::now();
        Self {
            hospital: String::new(),
            blood_type: None,
            units: String::new(),
            date: clock::default_request_date(now).format("%Y-%m-%d").to_string(),
            time: clock::default_request_time(now).format("%H:%M").to_string(),
            hospital_invalid: false,
            blood_type_invalid: false,
            units_invalid: false,
            date_invalid: false,
            time_invalid: false,
        }
    }
}

impl Form {
    /// Handles a form message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::HospitalChanged(value) => {
                self.hospital = value;
                self.hospital_invalid = false;
                Event::None
            }
            Message::BloodTypeSelected(group) => {
                self.blood_type = Some(group);
                self.blood_type_invalid = false;
                Event::None
            }
            Message::UnitsChanged(value) => {
                // Keep only digits so the field can't hold junk
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.units = clamp_units_text(value);
                    self.units_invalid = false;
                }
                Event::None
            }
            Message::DateChanged(value) => {
                self.date = value;
                self.date_invalid = false;
                Event::None
            }
            Message::TimeChanged(value) => {
                self.time = value;
                self.time_invalid = false;
                Event::None
            }
            Message::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Event {
        self.hospital_invalid = self.hospital.trim().is_empty();
        self.blood_type_invalid = self.blood_type.is_none();

        let units = self.parse_units();
        self.units_invalid = units.is_none();

        // A needed-by date in the past is as useless as a malformed one
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .ok()
            .filter(|date| *date >= Local::now().date_naive());
        self.date_invalid = date.is_none();

        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M").ok();
        self.time_invalid = time.is_none();

        if self.hospital_invalid
            || self.blood_type_invalid
            || self.units_invalid
            || self.date_invalid
            || self.time_invalid
        {
            return Event::Invalid;
        }

        let request = NewRequest {
            hospital: self.hospital.trim().to_owned(),
            // Validated above
            blood_type: self.blood_type.unwrap_or(BloodGroup::OPositive),
            units: units.unwrap_or(MIN_REQUEST_UNITS),
            needed_by: NaiveDateTime::new(
                date.unwrap_or_default(),
                time.unwrap_or(NaiveTime::MIN),
            ),
        };

        *self = Self::default();
        Event::Submitted(request)
    }

    /// Parses the units field, clamping into the accepted range.
    fn parse_units(&self) -> Option<u32> {
        self.units
            .trim()
            .parse::<u32>()
            .ok()
            .map(|n| n.clamp(MIN_REQUEST_UNITS, MAX_REQUEST_UNITS))
    }
}

/// Clamps a digits-only units entry into range while the user types.
/// An emptied field stays empty so deleting before retyping works.
fn clamp_units_text(value: String) -> String {
    if value.is_empty() {
        return value;
    }
    let clamped = value
        .parse::<u32>()
        .unwrap_or(MAX_REQUEST_UNITS)
        .clamp(MIN_REQUEST_UNITS, MAX_REQUEST_UNITS);
    if clamped.to_string() == value {
        value
    } else {
        clamped.to_string()
    }
}

impl Form {
    /// Renders the form as a single row of fields plus a submit button.
    pub fn view(&self) -> Element<'_, Message> {
        let hospital = text_input("Hospital", &self.hospital)
            .on_input(Message::HospitalChanged)
            .width(Length::Fixed(sizing::FORM_FIELD_WIDTH))
            .style(field_style(self.hospital_invalid));

        let blood_type = pick_list(
            BloodGroup::ALL,
            self.blood_type,
            Message::BloodTypeSelected,
        )
        .placeholder("Blood type")
        .width(Length::Fixed(sizing::FORM_FIELD_WIDTH * 0.6));

        let units = text_input("Units", &self.units)
            .on_input(Message::UnitsChanged)
            .width(Length::Fixed(sizing::FORM_FIELD_WIDTH * 0.4))
            .style(field_style(self.units_invalid));

        let date = text_input("YYYY-MM-DD", &self.date)
            .on_input(Message::DateChanged)
            .width(Length::Fixed(sizing::FORM_FIELD_WIDTH * 0.6))
            .style(field_style(self.date_invalid));

        let time = text_input("HH:MM", &self.time)
            .on_input(Message::TimeChanged)
            .width(Length::Fixed(sizing::FORM_FIELD_WIDTH * 0.4))
            .style(field_style(self.time_invalid));

        let submit = button(text("Add Request").size(typography::BODY))
            .on_press(Message::Submit)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let mut marked_blood_type: Element<'_, Message> = blood_type.into();
        if self.blood_type_invalid {
            marked_blood_type = Column::new()
                .push(marked_blood_type)
                .push(
                    Text::new("Required")
                        .size(typography::CAPTION)
                        .color(palette::ERROR_500),
                )
                .into();
        }

        Row::new()
            .spacing(spacing::SM)
            .push(hospital)
            .push(marked_blood_type)
            .push(units)
            .push(date)
            .push(time)
            .push(submit)
            .into()
    }
}

/// Text input style that turns the border red once a submit flagged the field.
fn field_style(
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let mut style = text_input::default(theme, status);
        if invalid {
            style.border = Border {
                color: palette::ERROR_500,
                ..style.border
            };
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn filled_form() -> Form {
        let mut form = Form::default();
        form.update(Message::HospitalChanged("City General".into()));
        form.update(Message::BloodTypeSelected(BloodGroup::ONegative));
        form.update(Message::UnitsChanged("4".into()));
        form
    }

    #[test]
    fn defaults_to_today_and_next_full_hour() {
        let form = Form::default();
        let now = Local::now();

        let date = NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").unwrap();
        assert_eq!(date.year(), now.year());

        let time = NaiveTime::parse_from_str(&form.time, "%H:%M").unwrap();
        assert_eq!(time.minute(), 0);
    }

    #[test]
    fn submit_with_empty_fields_is_invalid() {
        let mut form = Form::default();
        let event = form.update(Message::Submit);
        assert!(matches!(event, Event::Invalid));
        assert!(form.hospital_invalid);
        assert!(form.blood_type_invalid);
        assert!(form.units_invalid);
    }

    #[test]
    fn submit_with_all_fields_produces_request() {
        let mut form = filled_form();
        let event = form.update(Message::Submit);

        match event {
            Event::Submitted(request) => {
                assert_eq!(request.hospital, "City General");
                assert_eq!(request.blood_type, BloodGroup::ONegative);
                assert_eq!(request.units, 4);
            }
            other => panic!("expected Submitted, got {other:?}"),
        }

        // Form resets after a successful submit
        assert!(form.hospital.is_empty());
        assert!(form.blood_type.is_none());
    }

    #[test]
    fn units_are_clamped_into_range() {
        let mut form = filled_form();
        form.update(Message::UnitsChanged("500".into()));
        let event = form.update(Message::Submit);

        match event {
            Event::Submitted(request) => assert_eq!(request.units, MAX_REQUEST_UNITS),
            other => panic!("expected Submitted, got {other:?}"),
        }

        let mut form = filled_form();
        form.update(Message::UnitsChanged("0".into()));
        let event = form.update(Message::Submit);

        match event {
            Event::Submitted(request) => assert_eq!(request.units, MIN_REQUEST_UNITS),
            other => panic!("expected Submitted, got {other:?}"),
        }
    }

    #[test]
    fn units_clamp_while_typing() {
        let mut form = Form::default();
        form.update(Message::UnitsChanged("500".into()));
        assert_eq!(form.units, MAX_REQUEST_UNITS.to_string());

        form.update(Message::UnitsChanged("0".into()));
        assert_eq!(form.units, MIN_REQUEST_UNITS.to_string());

        form.update(Message::UnitsChanged(String::new()));
        assert!(form.units.is_empty());
    }

    #[test]
    fn past_needed_by_date_is_invalid() {
        let yesterday = Local::now().date_naive().pred_opt().unwrap();

        let mut form = filled_form();
        form.update(Message::DateChanged(yesterday.format("%Y-%m-%d").to_string()));
        let event = form.update(Message::Submit);

        assert!(matches!(event, Event::Invalid));
        assert!(form.date_invalid);
    }

    #[test]
    fn non_numeric_units_input_is_ignored() {
        let mut form = Form::default();
        form.update(Message::UnitsChanged("12".into()));
        form.update(Message::UnitsChanged("12a".into()));
        assert_eq!(form.units, "12");
    }

    #[test]
    fn malformed_date_flags_the_field() {
        let mut form = filled_form();
        form.update(Message::DateChanged("tomorrow".into()));
        let event = form.update(Message::Submit);

        assert!(matches!(event, Event::Invalid));
        assert!(form.date_invalid);
        assert!(!form.hospital_invalid);
    }

    #[test]
    fn editing_a_field_clears_its_invalid_flag() {
        let mut form = Form::default();
        form.update(Message::Submit);
        assert!(form.hospital_invalid);

        form.update(Message::HospitalChanged("S".into()));
        assert!(!form.hospital_invalid);
    }
}
