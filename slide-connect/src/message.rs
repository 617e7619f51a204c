use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Play the connect animation on every element.
    StartAnimation,
    /// Send every element back to rest.
    ResetAnimation,
    /// Frame tick while something is animating
    Tick(Instant),
}
