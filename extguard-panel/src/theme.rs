//! Dark panel theme with a small set of reusable widget styles.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, theme};

use crate::toast::ToastLevel;

#[derive(Debug, Clone, Copy)]
pub struct PanelTheme;

impl PanelTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.07, 0.07, 0.09);
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.5, 1.0);

    // Surfaces
    pub const CARD_BG: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const TAG_BG: Color = Color::from_rgb(0.16, 0.16, 0.19);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.22, 0.22, 0.25);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4);
    pub const WARNING: Color = Color::from_rgb(1.0, 0.75, 0.03);
    pub const DANGER: Color = Color::from_rgb(0.86, 0.21, 0.27);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::DANGER;

        Theme::custom("Extguard".to_string(), palette)
    }
}

// Container styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Container {
    Card,
    Tag,
    Modal,
    ModalOverlay,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(PanelTheme::TEXT_PRIMARY),
                background: Some(Background::Color(PanelTheme::CARD_BG)),
                border: Border {
                    color: PanelTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            },
            Container::Tag => |_| container::Style {
                text_color: Some(PanelTheme::TEXT_PRIMARY),
                background: Some(Background::Color(PanelTheme::TAG_BG)),
                border: Border {
                    color: PanelTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..container::Style::default()
            },
            Container::Modal => |_| container::Style {
                text_color: Some(PanelTheme::TEXT_PRIMARY),
                background: Some(Background::Color(PanelTheme::CARD_BG)),
                border: Border {
                    color: PanelTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.8),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 20.0,
                },
                ..container::Style::default()
            },
            Container::ModalOverlay => |_| container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.7,
                ))),
                ..container::Style::default()
            },
        }
    }
}

/// Toast surface, tinted by severity.
pub fn toast_container(level: ToastLevel) -> impl Fn(&Theme) -> container::Style
{
    let (background, border_color) = match level {
        ToastLevel::Success => {
            (Color::from_rgb(0.06, 0.2, 0.12), PanelTheme::SUCCESS)
        }
        ToastLevel::Error => {
            (Color::from_rgb(0.24, 0.08, 0.08), PanelTheme::DANGER)
        }
    };

    move |_| container::Style {
        text_color: Some(PanelTheme::TEXT_PRIMARY),
        background: Some(Background::Color(background)),
        border: Border { color: border_color, width: 1.0, radius: 6.0.into() },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

// Button styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    /// Disabled add control when the input spells a reserved name.
    Warning,
    /// Disabled add control at capacity, and modal remove confirmation.
    Danger,
    Secondary,
    /// The bare `×` on a tag.
    TagRemove,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::from_rgb(0.0, 0.6, 1.0)
                    }
                    _ => PanelTheme::ACCENT,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: PanelTheme::TEXT_PRIMARY,
                    border: Border { radius: 6.0.into(), ..Border::default() },
                    ..button::Style::default()
                }
            },
            Button::Warning => |_, _| button::Style {
                background: Some(Background::Color(PanelTheme::WARNING)),
                text_color: Color::from_rgb(0.1, 0.1, 0.1),
                border: Border { radius: 6.0.into(), ..Border::default() },
                ..button::Style::default()
            },
            Button::Danger => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::from_rgb(0.95, 0.3, 0.35)
                    }
                    _ => PanelTheme::DANGER,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: PanelTheme::TEXT_PRIMARY,
                    border: Border { radius: 6.0.into(), ..Border::default() },
                    ..button::Style::default()
                }
            },
            Button::Secondary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::from_rgb(0.2, 0.2, 0.24)
                    }
                    _ => PanelTheme::TAG_BG,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: PanelTheme::TEXT_PRIMARY,
                    border: Border {
                        color: PanelTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    ..button::Style::default()
                }
            },
            Button::TagRemove => |_, status| button::Style {
                background: None,
                text_color: match status {
                    button::Status::Hovered => PanelTheme::DANGER,
                    _ => PanelTheme::TEXT_DIMMED,
                },
                ..button::Style::default()
            },
        }
    }
}

// Text input styles keyed by the add-control state
#[derive(Debug, Clone, Copy)]
pub enum TextInput {
    Normal,
    Warning,
    Danger,
}

impl TextInput {
    pub fn style(&self) -> fn(&Theme, text_input::Status) -> text_input::Style
    {
        match self {
            TextInput::Normal => text_input::default,
            TextInput::Warning => |theme, status| {
                let mut style = text_input::default(theme, status);
                style.border.color = PanelTheme::WARNING;
                style
            },
            TextInput::Danger => |theme, status| {
                let mut style = text_input::default(theme, status);
                style.border.color = PanelTheme::DANGER;
                style
            },
        }
    }
}
