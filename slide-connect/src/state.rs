use std::sync::Arc;
use std::time::Instant;

use iced::widget::svg;
use slide_motion::{CardSwipeAnimation, Snapshot};

use crate::app::AppConfig;

#[derive(Debug)]
pub struct State {
    pub config: Arc<AppConfig>,
    pub animation: CardSwipeAnimation,
    /// Last sampled frame; this is what the view paints.
    pub frame: Snapshot,
    pub avatar: svg::Handle,
}

impl State {
    pub fn new(config: Arc<AppConfig>, animation: CardSwipeAnimation) -> Self {
        let frame = animation.frame(Instant::now());
        let avatar = svg::Handle::from_path(config.avatar_path());
        Self {
            config,
            animation,
            frame,
            avatar,
        }
    }

    pub fn start_animation(&mut self, now: Instant) {
        self.animation.play_forward(now);
        self.advance(now);
    }

    pub fn reset_animation(&mut self, now: Instant) {
        self.animation.play_reverse(now);
        self.advance(now);
    }

    /// Resample the frame at `now` and retire anything that has finished.
    /// Returns whether the card is still moving.
    pub fn advance(&mut self, now: Instant) -> bool {
        let animating = self.animation.tick(now);
        self.frame = self.animation.frame(now);
        animating
    }

    /// Jump to the instant everything in flight comes to rest.
    pub fn settle(&mut self) -> Instant {
        let end = self.animation.settles_at().unwrap_or_else(Instant::now);
        self.advance(end);
        end
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }
}
