/// Page heading
use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length};

use super::style::{self, fade, Palette};
use super::transition::Motion;
use crate::state::data::Icon;
use crate::Message;

pub const TITLE: &str = "All About Cats";

pub fn hero<'a>(motion: Motion, palette: Palette) -> Element<'a, Message> {
    let heading = row![
        text(TITLE).size(48).color(fade(palette.heading, motion.opacity)),
        text(Icon::Heart.glyph())
            .size(40)
            .color(fade(palette.heart, motion.opacity)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(heading)
        .center_x(Length::Fill)
        .padding(style::shift(motion))
        .into()
}
