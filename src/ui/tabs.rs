/// Tab switcher
///
/// The trigger row plus the single visible panel. `PanelContent` is what the
/// panel shows for a tab; matching on it in `panel` is what guarantees that
/// exactly one panel is on screen.
use iced::widget::{button, column, container, text, Column, Row};
use iced::{Element, Length};

use super::breeds::breed_card;
use super::style::{self, fade, Palette};
use super::transition::Motion;
use crate::state::data::{
    BreedRecord, BREEDS, BREEDS_HEADING, CARE_TIPS, CARE_TITLE, OVERVIEW_TEXT, OVERVIEW_TITLE,
};
use crate::state::page::Tab;
use crate::Message;

/// Content of the panel for one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    Overview {
        title: &'static str,
        text: &'static str,
    },
    Breeds {
        heading: &'static str,
        breeds: &'static [BreedRecord],
    },
    Care {
        title: &'static str,
        tips: &'static [&'static str],
    },
}

impl PanelContent {
    pub fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Overview => PanelContent::Overview {
                title: OVERVIEW_TITLE,
                text: OVERVIEW_TEXT,
            },
            Tab::Breeds => PanelContent::Breeds {
                heading: BREEDS_HEADING,
                breeds: &BREEDS,
            },
            Tab::Care => PanelContent::Care {
                title: CARE_TITLE,
                tips: &CARE_TIPS,
            },
        }
    }
}

/// Three equal-width triggers, the active one highlighted
pub fn triggers<'a>(active: Tab, palette: Palette) -> Element<'a, Message> {
    let buttons = Tab::ALL.into_iter().map(|tab| -> Element<'a, Message> {
        button(container(text(tab.label()).size(16)).center_x(Length::Fill))
            .width(Length::Fill)
            .padding([8, 12])
            .style(style::trigger(palette, tab == active))
            .on_press(Message::SelectTab(tab))
            .into()
    });

    Row::with_children(buttons).spacing(6).into()
}

/// The panel for `active`. `panel_motion` animates the panel as a whole,
/// `card_motion` the individual breed cards.
pub fn panel<'a>(
    active: Tab,
    panel_motion: Motion,
    card_motion: Motion,
    palette: Palette,
) -> Element<'a, Message> {
    let opacity = panel_motion.opacity;

    let content: Element<'a, Message> = match PanelContent::for_tab(active) {
        PanelContent::Overview { title, text: body } => card(
            title,
            text(body).size(20).color(fade(palette.body, opacity)).into(),
            opacity,
            palette,
        ),
        PanelContent::Breeds { heading, breeds } => {
            let cards = breeds
                .iter()
                .map(|breed| breed_card(breed, card_motion, palette));

            column![
                text(heading).size(26).color(fade(palette.heading, opacity)),
                Column::with_children(cards).spacing(4),
            ]
            .spacing(8)
            .into()
        }
        PanelContent::Care { title, tips } => {
            let items = tips.iter().map(|tip| -> Element<'a, Message> {
                text(format!("•  {tip}"))
                    .size(16)
                    .color(fade(palette.body, opacity))
                    .into()
            });

            card(title, Column::with_children(items).spacing(8).into(), opacity, palette)
        }
    };

    container(content)
        .width(Length::Fill)
        .padding(style::shift(panel_motion))
        .into()
}

/// Titled card
fn card<'a>(title: &'a str, body: Element<'a, Message>, opacity: f32, palette: Palette) -> Element<'a, Message> {
    container(
        column![text(title).size(24).color(fade(palette.heading, opacity)), body].spacing(14),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::card(palette, opacity))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_panel_per_tab() {
        for tab in Tab::ALL {
            let shown = match PanelContent::for_tab(tab) {
                PanelContent::Overview { .. } => Tab::Overview,
                PanelContent::Breeds { .. } => Tab::Breeds,
                PanelContent::Care { .. } => Tab::Care,
            };
            assert_eq!(shown, tab);
        }
    }

    #[test]
    fn test_breeds_panel_lists_breeds_in_order() {
        let PanelContent::Breeds { heading, breeds } = PanelContent::for_tab(Tab::Breeds) else {
            panic!("breeds tab must show the breeds panel");
        };

        assert_eq!(heading, "Popular Cat Breeds");
        let names: Vec<&str> = breeds.iter().map(|b| b.name).collect();
        assert_eq!(names, ["Siamese", "Maine Coon", "Persian"]);
    }

    #[test]
    fn test_care_panel_has_five_tips() {
        let PanelContent::Care { title, tips } = PanelContent::for_tab(Tab::Care) else {
            panic!("care tab must show the care panel");
        };

        assert_eq!(title, "Cat Care Essentials");
        assert_eq!(tips.len(), 5);
        assert_eq!(tips[0], "Provide a balanced diet");
    }

    #[test]
    fn test_overview_panel_title() {
        assert!(matches!(
            PanelContent::for_tab(Tab::Overview),
            PanelContent::Overview { title: "Feline Fascination", .. }
        ));
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Overview", "Breeds", "Care Tips"]);
    }
}
