/// Image presenter
/// Manual carousel with arrows, or auto-advancing slideshow with dots
use iced::widget::{button, column, container, image, row, text, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};

use super::style::{self, Palette};
use crate::gallery::{Gallery, Slot};
use crate::state::data::ImageRecord;
use crate::state::page::{PageState, PresenterMode};
use crate::Message;

/// Height of the picture area
pub const PICTURE_HEIGHT: f32 = 400.0;

const DOT_SIZE: f32 = 10.0;

pub fn presenter<'a>(page: &PageState, gallery: &Gallery, palette: Palette) -> Element<'a, Message> {
    let shown = picture(page.position(), gallery, palette);

    match page.mode() {
        PresenterMode::Manual => row![
            button(text("‹").size(28))
                .padding([4, 14])
                .style(style::nav(palette))
                .on_press(Message::PreviousImage),
            shown,
            button(text("›").size(28))
                .padding([4, 14])
                .style(style::nav(palette))
                .on_press(Message::NextImage),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into(),
        PresenterMode::AutoAdvance => column![
            shown,
            dots(page.position(), page.image_count(), palette)
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),
    }
}

/// The current picture, or its alt text if it is not available
fn picture<'a>(index: usize, gallery: &Gallery, palette: Palette) -> Element<'a, Message> {
    match gallery.slot(index) {
        Some(Slot::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(PICTURE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Slot::Failed(err)) => container(
            column![
                text(ImageRecord::alt_text(index)).size(18),
                text(err.to_string()).size(12),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(PICTURE_HEIGHT)
        .style(style::picture_frame(palette))
        .into(),
        Some(Slot::Loading) | None => {
            container(text(ImageRecord::alt_text(index)).size(18))
                .center_x(Length::Fill)
                .center_y(PICTURE_HEIGHT)
                .style(style::picture_frame(palette))
                .into()
        }
    }
}

/// Position indicators; display only
fn dots<'a>(position: usize, count: usize, palette: Palette) -> Element<'a, Message> {
    let dots = (0..count).map(|i| -> Element<'a, Message> {
        container(Space::new(DOT_SIZE, DOT_SIZE))
            .style(style::dot(palette, i == position))
            .into()
    });

    Row::with_children(dots).spacing(8).into()
}
