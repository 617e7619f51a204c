pub mod slide_card;

pub use slide_card::{SlideCard, slide_card};
