use std::sync::Arc;
use std::time::Instant;

use iced::{Preset, Task};

use crate::app::bootstrap::{self, AppConfig};
use crate::message::Message;
use crate::state::State;

pub fn collect(config: &Arc<AppConfig>) -> Vec<Preset<State, Message>> {
    vec![
        resting_preset(Arc::clone(config)),
        connected_preset(Arc::clone(config)),
        reset_preset(Arc::clone(config)),
    ]
}

/// Card as first mounted, before anything plays.
fn resting_preset(config: Arc<AppConfig>) -> Preset<State, Message> {
    Preset::new("Resting", move || (bootstrap::base_state(&config), Task::none()))
}

/// Connect animation played to completion.
fn connected_preset(config: Arc<AppConfig>) -> Preset<State, Message> {
    Preset::new("Connected", move || {
        let mut state = bootstrap::base_state(&config);
        state.start_animation(Instant::now());
        state.settle();
        (state, Task::none())
    })
}

/// Connect then reset, both settled.
fn reset_preset(config: Arc<AppConfig>) -> Preset<State, Message> {
    Preset::new("Reset", move || {
        let mut state = bootstrap::base_state(&config);
        state.start_animation(Instant::now());
        let settled = state.settle();
        state.reset_animation(settled);
        state.settle();
        (state, Task::none())
    })
}
