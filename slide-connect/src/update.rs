use std::time::Instant;

use iced::Task;

use crate::message::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::StartAnimation => {
            log::debug!("start requested");
            state.start_animation(Instant::now());
        }
        Message::ResetAnimation => {
            log::debug!("reset requested");
            state.reset_animation(Instant::now());
        }
        Message::Tick(now) => {
            if !state.advance(now) {
                log::debug!("card at rest");
            }
        }
    }

    Task::none()
}
