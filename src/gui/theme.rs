#![allow(clippy::approx_constant)]

//! Custom theme definitions for the application, in a light and a dark variant

use crate::preferences::ThemePreference;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Accent colors shared by both variants ---

pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // Primary actions
pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // Focus ring
pub const PURPLE_500: Color = Color::from_rgb(0.545, 0.361, 0.965); // Accent
pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.600); // Accent end
pub const EMERALD_500: Color = Color::from_rgb(0.063, 0.725, 0.506); // Success state
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Danger state
pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.094); // In progress
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Surface and text colors for one theme variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background_start: Color,
    pub background_mid: Color,
    pub background_end: Color,
    pub surface: Color,
    pub sidebar: Color,
    pub border: Color,
    pub chip: Color,
    pub hover: Color,
    pub input: Color,
    pub danger_surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background_start: Color::from_rgb(0.941, 0.976, 1.0), // Sky Blue 50
        background_mid: Color::from_rgb(0.878, 0.906, 1.0),   // Indigo 50
        background_end: Color::from_rgb(0.953, 0.910, 1.0),   // Purple 50
        surface: Color::from_rgba(1.0, 1.0, 1.0, 0.85),
        sidebar: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
        border: Color::from_rgb(0.898, 0.906, 0.922),
        chip: Color::from_rgb(0.953, 0.957, 0.965),
        hover: Color::from_rgb(0.976, 0.980, 0.984),
        input: WHITE,
        danger_surface: Color::from_rgb(0.996, 0.886, 0.886),
        text_primary: Color::from_rgb(0.122, 0.161, 0.216),
        text_secondary: Color::from_rgb(0.294, 0.333, 0.388),
        text_muted: Color::from_rgb(0.420, 0.447, 0.502),
    };

    pub const DARK: Palette = Palette {
        background_start: Color::from_rgb(0.059, 0.067, 0.118),
        background_mid: Color::from_rgb(0.082, 0.078, 0.165),
        background_end: Color::from_rgb(0.118, 0.067, 0.153),
        surface: Color::from_rgba(0.137, 0.145, 0.212, 0.9),
        sidebar: Color::from_rgba(0.102, 0.110, 0.165, 0.85),
        border: Color::from_rgb(0.216, 0.227, 0.306),
        chip: Color::from_rgb(0.169, 0.176, 0.251),
        hover: Color::from_rgb(0.204, 0.212, 0.294),
        input: Color::from_rgb(0.098, 0.106, 0.153),
        danger_surface: Color::from_rgb(0.298, 0.106, 0.122),
        text_primary: Color::from_rgb(0.925, 0.933, 0.961),
        text_secondary: Color::from_rgb(0.741, 0.757, 0.816),
        text_muted: Color::from_rgb(0.545, 0.561, 0.631),
    };

    pub fn of(preference: ThemePreference) -> Palette {
        match preference {
            ThemePreference::Dark => Palette::DARK,
            ThemePreference::Light => Palette::LIGHT,
        }
    }
}

/// Built-in iced theme matching the preference, for widgets without a
/// custom stylesheet
pub fn iced_theme(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
    }
}

fn accent_gradient(angle: f32) -> Background {
    Background::Gradient(Gradient::Linear(
        iced::gradient::Linear::new(iced::Radians(angle))
            .add_stop(0.0, INDIGO_500)
            .add_stop(0.5, PURPLE_500)
            .add_stop(1.0, PINK_500),
    ))
}

// --- Container Styles ---

pub struct MainGradientContainer(pub Palette);

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let p = self.0;
        container::Appearance {
            text_color: Some(p.text_primary),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, p.background_start)
                    .add_stop(0.5, p.background_mid)
                    .add_stop(1.0, p.background_end),
            ))),
            ..Default::default()
        }
    }
}

pub struct GlassContainer(pub Palette);

impl container::StyleSheet for GlassContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let p = self.0;
        container::Appearance {
            text_color: Some(p.text_primary),
            background: Some(Background::Color(p.surface)),
            border: Border {
                color: p.border,
                width: 2.0,
                radius: 24.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.15),
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
        }
    }
}

pub struct SidebarContainer(pub Palette);

impl container::StyleSheet for SidebarContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let p = self.0;
        container::Appearance {
            text_color: Some(p.text_secondary),
            background: Some(Background::Color(p.sidebar)),
            border: Border {
                color: p.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(2.0, 0.0),
                blur_radius: 8.0,
            },
        }
    }
}

/// Small rounded tag, used for extension badges and history rows
pub struct ChipContainer(pub Palette);

impl container::StyleSheet for ChipContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let p = self.0;
        container::Appearance {
            text_color: Some(p.text_primary),
            background: Some(Background::Color(p.chip)),
            border: Border {
                color: p.border,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Error panel and notices
pub struct DangerContainer(pub Palette);

impl container::StyleSheet for DangerContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(RED_500),
            background: Some(Background::Color(self.0.danger_surface)),
            border: Border {
                color: RED_500,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(accent_gradient(0.0)),
            text_color: WHITE,
            border: Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.4),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 20.0,
            },
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.388, 0.400, 0.945, 0.45))),
            shadow: Shadow::default(),
            ..active
        }
    }
}

pub struct SecondaryButton(pub Palette);

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let p = self.0;
        button::Appearance {
            background: Some(Background::Color(p.input)),
            text_color: p.text_secondary,
            border: Border {
                radius: 12.0.into(),
                color: p.border,
                width: 1.0,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 4.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(self.0.hover)),
            ..active
        }
    }
}

pub enum SidebarButtonStyle {
    Active(Palette),
    Inactive(Palette),
}

impl button::StyleSheet for SidebarButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active(p) => button::Appearance {
                background: Some(Background::Gradient(Gradient::Linear(
                    iced::gradient::Linear::new(iced::Radians(2.356))
                        .add_stop(0.0, Color::from_rgba(0.388, 0.400, 0.945, 0.15))
                        .add_stop(1.0, Color::from_rgba(0.545, 0.361, 0.965, 0.15)),
                ))),
                text_color: p.text_primary,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Inactive(p) => button::Appearance {
                background: None,
                text_color: p.text_muted,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active(_) => self.active(style),
            Self::Inactive(p) => button::Appearance {
                text_color: p.text_secondary,
                background: Some(Background::Color(p.hover)),
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }
}

pub struct IconButton(pub Palette);

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: self.0.text_muted,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: self.0.text_primary,
            background: Some(Background::Color(self.0.hover)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct DestructiveButton(pub Palette);

impl button::StyleSheet for DestructiveButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: RED_500,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.0.danger_surface)),
            text_color: RED_500,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle {
    pub palette: Palette,
    pub invalid: bool,
}

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        let border_color = if self.invalid {
            RED_500
        } else {
            self.palette.border
        };
        text_input::Appearance {
            background: Background::Color(self.palette.input),
            border: Border {
                radius: 16.0.into(),
                width: 2.0,
                color: border_color,
            },
            icon_color: self.palette.text_muted,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        if self.invalid {
            return active;
        }
        text_input::Appearance {
            border: Border {
                color: INDIGO_400,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        self.palette.text_muted
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        self.palette.text_primary
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.388, 0.400, 0.945, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(self.palette.chip),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        self.palette.text_muted
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.388, 0.400, 0.945, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.388, 0.400, 0.945, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}
