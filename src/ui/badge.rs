// SPDX-License-Identifier: MPL-2.0
//! Blood-type pill badge shared by the dashboard and inventory tables.
//!
//! Badge color follows the ABO letter group regardless of Rh factor, so
//! `A+` and `A-` share the same red badge.

use crate::domain::{BloodGroup, LetterGroup};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Container, Text};
use iced::{Color, Element, Theme};

/// Returns the badge background color for a blood group.
#[must_use]
pub fn color(group: BloodGroup) -> Color {
    match group.letter_group() {
        LetterGroup::A => palette::BADGE_A,
        LetterGroup::B => palette::BADGE_B,
        LetterGroup::Ab => palette::BADGE_AB,
        LetterGroup::O => palette::BADGE_O,
    }
}

/// Renders a blood-type badge pill.
pub fn view<'a, Message: 'a>(group: BloodGroup) -> Element<'a, Message> {
    let background = color(group);

    Container::new(
        Text::new(group.label())
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(move |_theme: &Theme| container::Style {
        background: Some(background.into()),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rh_factor_does_not_change_badge_color() {
        assert_eq!(color(BloodGroup::APositive), color(BloodGroup::ANegative));
        assert_eq!(color(BloodGroup::OPositive), color(BloodGroup::ONegative));
    }

    #[test]
    fn letter_groups_have_distinct_colors() {
        let colors = [
            color(BloodGroup::APositive),
            color(BloodGroup::BPositive),
            color(BloodGroup::AbPositive),
            color(BloodGroup::OPositive),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
