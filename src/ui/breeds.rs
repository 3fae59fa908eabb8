/// Breed cards and the badge row
use iced::widget::{button, canvas, column, container, row, text};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::stars::StarRating;
use super::style::{self, fade, Palette};
use super::transition::Motion;
use crate::state::data::{Badge, BreedRecord};
use crate::Message;

/// One breed: icon and name, description, star rating
pub fn breed_card<'a>(breed: &BreedRecord, motion: Motion, palette: Palette) -> Element<'a, Message> {
    let opacity = motion.opacity;

    let stars = StarRating {
        count: breed.star_count(),
        color: fade(palette.star, opacity),
    };
    let size = stars.size();

    let title = row![
        text(breed.icon.glyph())
            .size(20)
            .color(fade(style::tint(breed.tint), opacity)),
        text(breed.name)
            .size(22)
            .color(fade(palette.heading, opacity)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body = column![
        title,
        text(breed.description)
            .size(16)
            .color(fade(palette.body, opacity)),
        canvas(stars).width(size.width).height(size.height),
    ]
    .spacing(10);

    let card = container(body)
        .padding(20)
        .width(Length::Fill)
        .style(style::card(palette, opacity));

    container(card).padding(style::shift(motion)).into()
}

/// Static badges; pressing one only plays its pressed style
pub fn badge_row<'a>(badges: &[Badge], palette: Palette) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = badges
        .iter()
        .map(|badge| {
            let label = row![text(badge.icon.glyph()).size(14), text(badge.label).size(14)]
                .spacing(6)
                .align_y(Alignment::Center);

            button(label)
                .padding([8, 16])
                .style(style::badge(palette))
                .on_press(Message::BadgePressed(badge.label))
                .into()
        })
        .collect();

    let wrap = Wrap::with_elements(items)
        .spacing(Pixels(16.0))
        .line_spacing(Pixels(12.0));

    container(wrap).center_x(Length::Fill).into()
}
