//! Per-element controller handle
//!
//! An [`ElementController`] is the imperative entry point for one animated
//! element. Starting a preset only supersedes the properties that preset
//! names; every new motion begins from the value (and, for springs, the
//! velocity) the property has at that instant, so interrupting a running
//! animation never makes the element jump.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::preset::AnimationPreset;
use crate::track::PropertyTrack;
use crate::value::{ElementId, Property, VisualState};

/// Fastest playback a controller accepts (100x speed).
pub const MIN_TIME_SCALE: f32 = 0.01;
/// Slowest playback a controller accepts (100x slower).
pub const MAX_TIME_SCALE: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct ElementController {
    element: ElementId,
    /// Values of properties with no running track.
    committed: VisualState,
    /// Where every property ends up once all running tracks finish.
    target: VisualState,
    tracks: BTreeMap<Property, PropertyTrack>,
    time_scale: f32,
}

impl ElementController {
    pub fn new(element: ElementId, initial: VisualState) -> Self {
        Self {
            element,
            committed: initial,
            target: initial,
            tracks: BTreeMap::new(),
            time_scale: 1.0,
        }
    }

    /// Play every motion `time_scale` times slower. Scales outside
    /// [`MIN_TIME_SCALE`]..=[`MAX_TIME_SCALE`] are ignored.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        if (MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&time_scale) {
            self.time_scale = time_scale;
        } else {
            log::warn!(
                "{}: ignoring invalid time scale {time_scale}",
                self.element
            );
        }
        self
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Animate toward `preset`, superseding the properties it names.
    pub fn start(&mut self, preset: &AnimationPreset, now: Instant) {
        let delay = preset.transition.delay_duration();

        for (property, target) in &preset.values {
            let property = *property;
            let origin = self.value_at(property, now);
            let velocity = self.velocity_at(property, now);

            let Some(motion) = preset
                .transition
                .resolve(property, target, origin, velocity)
            else {
                log::warn!(
                    "{}: preset '{}' has no value for {property}, skipping",
                    self.element,
                    preset.name
                );
                continue;
            };

            self.target.set(property, motion.final_value());
            self.tracks.insert(
                property,
                PropertyTrack::new(motion, origin, now, delay, self.time_scale),
            );
        }

        log::debug!(
            "{}: started '{}' ({} properties, {} running)",
            self.element,
            preset.name,
            preset.values.len(),
            self.tracks.len()
        );
    }

    pub fn value_at(&self, property: Property, now: Instant) -> f32 {
        match self.tracks.get(&property) {
            Some(track) => track.sample(now),
            None => self.committed.get(property),
        }
    }

    fn velocity_at(&self, property: Property, now: Instant) -> f32 {
        self.tracks
            .get(&property)
            .map(|track| track.velocity(now))
            .unwrap_or(0.0)
    }

    /// Interpolated state of the element at `now`.
    pub fn sample(&self, now: Instant) -> VisualState {
        let mut state = self.committed;
        for (property, track) in &self.tracks {
            state.set(*property, track.sample(now));
        }
        state
    }

    /// End-of-timeline state of the element.
    pub fn target(&self) -> VisualState {
        self.target
    }

    /// Retire finished tracks. Returns whether anything is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let committed = &mut self.committed;
        self.tracks.retain(|property, track| {
            if track.is_finished(now) {
                committed.set(*property, track.final_value());
                false
            } else {
                true
            }
        });
        !self.tracks.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Freeze every property where it is at `now`.
    pub fn stop(&mut self, now: Instant) {
        let state = self.sample(now);
        self.committed = state;
        self.target = state;
        self.tracks.clear();
    }

    /// Instant by which every running track has finished.
    pub fn settles_at(&self) -> Option<Instant> {
        self.tracks.values().map(PropertyTrack::finishes_at).max()
    }
}
