//! Slide Connect
//!
//! iced front end for the slide-to-connect card. The animation itself lives
//! in `slide-motion`; this crate boots it from the environment, feeds it
//! frame ticks while something is moving and paints the card on a canvas.

pub mod app;
pub mod error;
pub mod message;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;

pub use message::Message;
pub use state::State;
