//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;

use crate::message::Message;
use crate::state::State;

/// ~120 FPS
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(8_333_333);

/// Frame ticks only while some element is moving.
pub fn subscription(state: &State) -> Subscription<Message> {
    if state.is_animating() {
        iced::time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
