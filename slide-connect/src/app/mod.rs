use std::sync::Arc;

use iced::{Application, Font, Preset, Program as IcedProgram, Settings, Theme};

use crate::message::Message;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;
pub mod presets;

pub use bootstrap::AppConfig;

const WINDOW_SIZE: iced::Size = iced::Size::new(640.0, 720.0);

/// Build the application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>> {
    let config = Arc::new(config);
    let presets = presets::collect(&config);
    application_with_presets(config, presets)
}

/// Same as [`application`] but with a caller-supplied preset list.
pub fn application_with_presets(
    config: Arc<AppConfig>,
    presets: Vec<Preset<State, Message>>,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>> {
    iced::application(
        move || bootstrap::runtime_boot(&config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Slide to connect")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: WINDOW_SIZE,
        resizable: true,
        decorations: true,
        ..Default::default()
    })
    .presets(presets)
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("slide-connect".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(_: &State) -> Theme {
    crate::theme::SlideConnectTheme::theme()
}
