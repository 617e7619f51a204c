use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};
use once_cell::sync::Lazy;

static THEME: Lazy<Theme> = Lazy::new(|| {
    let mut palette = theme::Palette::LIGHT;
    palette.background = SlideConnectTheme::BACKGROUND;
    palette.text = SlideConnectTheme::TEXT_PRIMARY;
    palette.primary = SlideConnectTheme::GREEN_700;
    palette.success = SlideConnectTheme::GREEN_400;
    palette.danger = SlideConnectTheme::PINK_900;

    Theme::custom("Slide Connect", palette)
});

/// Plain light page with the card's greens and pinks
#[derive(Debug, Clone, Copy)]
pub struct SlideConnectTheme;

impl SlideConnectTheme {
    pub const BACKGROUND: Color = Color::WHITE;
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563

    // Card palette
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #F3F4F6
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // #D1D5DB
    pub const GREEN_400: Color = Color::from_rgb(0.290, 0.871, 0.502); // #4ADE80
    pub const GREEN_700: Color = Color::from_rgb(0.082, 0.502, 0.239); // #15803D
    pub const GREEN_800: Color = Color::from_rgb(0.086, 0.396, 0.204); // #166534
    pub const PINK_900: Color = Color::from_rgb(0.514, 0.094, 0.263); // #831843

    pub fn theme() -> Theme {
        THEME.clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    /// Start Animation
    Primary,
    /// Reset Animation
    Secondary,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered => SlideConnectTheme::GREEN_800,
                    button::Status::Pressed => SlideConnectTheme::GREEN_800,
                    button::Status::Disabled => SlideConnectTheme::GRAY_300,
                    _ => SlideConnectTheme::GREEN_700,
                };

                button::Style {
                    text_color: Color::WHITE,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 9999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::Secondary => |_, status| {
                let (background, border) = match status {
                    button::Status::Hovered => {
                        (SlideConnectTheme::GRAY_100, SlideConnectTheme::GRAY_300)
                    }
                    button::Status::Pressed => {
                        (SlideConnectTheme::GRAY_200, SlideConnectTheme::GRAY_300)
                    }
                    _ => (SlideConnectTheme::BACKGROUND, SlideConnectTheme::GRAY_200),
                };

                button::Style {
                    text_color: SlideConnectTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: border,
                        width: 1.0,
                        radius: 9999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Page,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| container::Style {
                background: Some(Background::Color(SlideConnectTheme::BACKGROUND)),
                text_color: Some(SlideConnectTheme::TEXT_PRIMARY),
                ..Default::default()
            },
        }
    }
}
