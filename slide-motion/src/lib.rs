//! Slide Motion
//!
//! Headless animation engine behind the slide-to-connect card. Six visual
//! elements each own an [`ElementController`]; a [`PresetTable`] describes
//! what every element animates to when the card connects and what it falls
//! back to on reset, and [`CardSwipeAnimation`] fires those presets.
//!
//! Nothing in this crate reads the wall clock. Every operation takes the
//! `Instant` it happens at, so the UI drives it from frame ticks and tests
//! drive it with synthetic timestamps.

pub mod controller;
pub mod easing;
pub mod error;
pub mod keyframes;
pub mod orchestrator;
pub mod preset;
pub mod spring;
pub mod track;
pub mod transition;
pub mod value;

pub use controller::{ElementController, MAX_TIME_SCALE, MIN_TIME_SCALE};
pub use easing::Easing;
pub use error::PresetError;
pub use orchestrator::{CardSwipeAnimation, Snapshot};
pub use preset::{AnimationPreset, PresetTable};
pub use spring::{Spring, SpringConfig, SpringParams};
pub use transition::{TransitionKind, TransitionSpec};
pub use value::{ElementId, ElementMap, Property, Target, VisualState};
