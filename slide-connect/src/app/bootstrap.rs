use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use iced::Task;
use slide_motion::{CardSwipeAnimation, PresetTable, MAX_TIME_SCALE, MIN_TIME_SCALE};

use crate::error::ConfigError;
use crate::message::Message;
use crate::state::State;

pub const ASSETS_ENV: &str = "SLIDE_CONNECT_ASSETS";
pub const PRESETS_ENV: &str = "SLIDE_CONNECT_PRESETS";
pub const TIME_SCALE_ENV: &str = "SLIDE_CONNECT_TIME_SCALE";
pub const AUTOPLAY_ENV: &str = "SLIDE_CONNECT_AUTOPLAY";

const AVATAR_FILE: &str = "earth.svg";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub assets_dir: Arc<Path>,
    pub presets_path: Option<Arc<Path>>,
    pub time_scale: f32,
    pub autoplay: bool,
}

impl AppConfig {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: Arc::from(assets_dir.into()),
            presets_path: None,
            time_scale: 1.0,
            autoplay: true,
        }
    }

    pub fn from_environment() -> Self {
        let mut config = Self::default();

        match read_path(ASSETS_ENV) {
            Ok(Some(dir)) => config.assets_dir = Arc::from(dir),
            Ok(None) => {}
            Err(err) => log::warn!("{err}, using {}", config.assets_dir.display()),
        }

        match read_path(PRESETS_ENV) {
            Ok(path) => config.presets_path = path.map(Arc::from),
            Err(err) => log::warn!("{err}, using built-in presets"),
        }

        if let Ok(value) = std::env::var(TIME_SCALE_ENV) {
            match parse_time_scale(&value) {
                Ok(scale) => config.time_scale = scale,
                Err(err) => log::warn!("{err}, using {}", config.time_scale),
            }
        }

        if let Ok(value) = std::env::var(AUTOPLAY_ENV) {
            match parse_flag(AUTOPLAY_ENV, &value) {
                Ok(autoplay) => config.autoplay = autoplay,
                Err(err) => log::warn!("{err}, using {}", config.autoplay),
            }
        }

        log::debug!("{config:?}");
        config
    }

    pub fn with_presets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.presets_path = Some(Arc::from(path.into()));
        self
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn avatar_path(&self) -> PathBuf {
        self.assets_dir.join(AVATAR_FILE)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }
}

fn read_path(var: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match std::env::var_os(var) {
        None => Ok(None),
        Some(value) if value.is_empty() => Err(ConfigError::EmptyPath { var }),
        Some(value) => Ok(Some(PathBuf::from(value))),
    }
}

pub fn parse_time_scale(value: &str) -> Result<f32, ConfigError> {
    match value.trim().parse::<f32>() {
        Ok(scale) if (MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&scale) => Ok(scale),
        _ => Err(ConfigError::InvalidTimeScale {
            var: TIME_SCALE_ENV,
            value: value.to_string(),
        }),
    }
}

pub fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

/// Preset table for this run. A broken override file falls back to the
/// built-in table rather than failing the launch.
pub fn load_table(config: &AppConfig) -> PresetTable {
    let Some(path) = config.presets_path.as_deref() else {
        return PresetTable::builtin();
    };

    match PresetTable::load(path) {
        Ok(table) => table,
        Err(err) => {
            log::warn!("{err}; falling back to built-in presets");
            PresetTable::builtin()
        }
    }
}

/// Boot logic used both by the runtime application and presets.
pub fn base_state(config: &Arc<AppConfig>) -> State {
    let avatar = config.avatar_path();
    if !avatar.is_file() {
        log::warn!(
            "avatar asset {} not found; the card will render without it",
            avatar.display()
        );
    }

    let animation = CardSwipeAnimation::with_time_scale(load_table(config), config.time_scale);
    State::new(Arc::clone(config), animation)
}

pub fn runtime_boot(config: &Arc<AppConfig>) -> (State, Task<Message>) {
    let mut state = base_state(config);

    if config.autoplay {
        state.start_animation(Instant::now());
    }

    (state, Task::none())
}
