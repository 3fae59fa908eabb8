/// Colors and widget styles
use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Degrees, Gradient, Padding, Shadow, Theme, Vector};

use super::transition::{Motion, MAX_OFFSET};
use crate::state::data::Tint;

/// Page colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page_top: Color,
    pub page_bottom: Color,
    pub card: Color,
    pub card_border: Color,
    pub heading: Color,
    pub body: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub trigger_idle: Color,
    pub badge: Color,
    pub star: Color,
    pub heart: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            page_top: Color::from_rgb8(243, 232, 255),
            page_bottom: Color::from_rgb8(252, 231, 243),
            card: Color::WHITE,
            card_border: Color::from_rgb8(229, 231, 235),
            heading: Color::from_rgb8(107, 33, 168),
            body: Color::from_rgb8(55, 65, 81),
            accent: Color::from_rgb8(147, 51, 234),
            on_accent: Color::WHITE,
            trigger_idle: Color::from_rgb8(237, 233, 254),
            badge: Color::from_rgb8(243, 244, 246),
            star: Color::from_rgb8(234, 179, 8),
            heart: Color::from_rgb8(236, 72, 153),
        }
    }

    pub fn dark() -> Self {
        Self {
            page_top: Color::from_rgb8(46, 16, 101),
            page_bottom: Color::from_rgb8(80, 7, 36),
            card: Color::from_rgb8(31, 41, 55),
            card_border: Color::from_rgb8(55, 65, 81),
            heading: Color::from_rgb8(216, 180, 254),
            body: Color::from_rgb8(229, 231, 235),
            accent: Color::from_rgb8(168, 85, 247),
            on_accent: Color::WHITE,
            trigger_idle: Color::from_rgb8(59, 7, 100),
            badge: Color::from_rgb8(55, 65, 81),
            star: Color::from_rgb8(250, 204, 21),
            heart: Color::from_rgb8(244, 114, 182),
        }
    }

    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Icon accent color
pub fn tint(tint: Tint) -> Color {
    match tint {
        Tint::Blue => Color::from_rgb8(59, 130, 246),
        Tint::Orange => Color::from_rgb8(249, 115, 22),
        Tint::Gray => Color::from_rgb8(107, 114, 128),
    }
}

/// Multiply a color's alpha by `opacity`
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Padding that shifts content vertically by the motion's offset while
/// keeping the overall height constant
pub fn shift(motion: Motion) -> Padding {
    let offset = motion.offset_y.clamp(-MAX_OFFSET, MAX_OFFSET);
    Padding {
        top: MAX_OFFSET + offset,
        right: 0.0,
        bottom: MAX_OFFSET - offset,
        left: 0.0,
    }
}

pub fn page(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Degrees(180.0))
                .add_stop(0.0, palette.page_top)
                .add_stop(1.0, palette.page_bottom),
        ))),
        ..container::Style::default()
    }
}

pub fn card(palette: Palette, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(fade(palette.body, opacity)),
        background: Some(Background::Color(fade(palette.card, opacity))),
        border: Border {
            color: fade(palette.card_border, opacity),
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: fade(Color::from_rgba(0.0, 0.0, 0.0, 0.08), opacity),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
    }
}

/// Placeholder shown where a picture is missing
pub fn picture_frame(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(palette.body),
        background: Some(Background::Color(fade(palette.card, 0.6))),
        border: Border {
            color: palette.card_border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn trigger(palette: Palette, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = match (active, status) {
            (true, _) => (palette.accent, palette.on_accent),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                (fade(palette.accent, 0.25), palette.heading)
            }
            (false, _) => (palette.trigger_idle, palette.heading),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }
}

/// Badges grow a shadow on hover and sink on press; no state changes
pub fn badge(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (lift, blur) = match status {
            button::Status::Hovered => (3.0, 10.0),
            button::Status::Pressed => (0.0, 2.0),
            _ => (1.0, 4.0),
        };

        button::Style {
            background: Some(Background::Color(palette.badge)),
            text_color: palette.body,
            border: Border {
                color: palette.card_border,
                width: 1.0,
                radius: 999.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, lift),
                blur_radius: blur,
            },
        }
    }
}

/// Previous/next arrows on the manual carousel
pub fn nav(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.accent,
            _ => fade(palette.card, 0.9),
        };
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette.on_accent,
            _ => palette.heading,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette.card_border,
                width: 1.0,
                radius: 999.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Slideshow position dot
pub fn dot(palette: Palette, active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(if active {
            palette.accent
        } else {
            fade(palette.accent, 0.3)
        })),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.5);
        let faded = fade(color, 0.5);
        assert_eq!((faded.r, faded.g, faded.b), (0.2, 0.4, 0.6));
        assert_eq!(faded.a, 0.25);
        assert_eq!(fade(color, 3.0).a, 0.5);
    }

    #[test]
    fn test_shift_keeps_height() {
        for offset in [-20.0, -7.5, 0.0, 10.0, 20.0, 45.0] {
            let padding = shift(Motion {
                opacity: 1.0,
                offset_y: offset,
            });
            assert_eq!(padding.top + padding.bottom, 2.0 * MAX_OFFSET);
            assert!(padding.top >= 0.0 && padding.bottom >= 0.0);
        }
    }

    #[test]
    fn test_settled_shift_is_centered() {
        let padding = shift(Motion {
            opacity: 1.0,
            offset_y: 0.0,
        });
        assert_eq!(padding.top, MAX_OFFSET);
        assert_eq!(padding.bottom, MAX_OFFSET);
    }
}
