//! Fires the connect and reset presets across all six elements

use std::time::Instant;

use crate::controller::ElementController;
use crate::preset::PresetTable;
use crate::value::{ElementId, ElementMap, VisualState};

/// State of every element at one instant.
pub type Snapshot = ElementMap<VisualState>;

/// Owns one controller per element and plays the table's presets on them.
///
/// Each play issues six independent starts. Elements are only staggered by
/// the delays baked into their presets; nothing waits on anything else.
#[derive(Debug, Clone)]
pub struct CardSwipeAnimation {
    table: PresetTable,
    controllers: ElementMap<ElementController>,
}

impl CardSwipeAnimation {
    pub fn new(table: PresetTable) -> Self {
        Self::with_time_scale(table, 1.0)
    }

    /// `time_scale` above 1 slows the whole choreography down.
    pub fn with_time_scale(table: PresetTable, time_scale: f32) -> Self {
        let controllers = ElementMap::from_fn(|id| {
            ElementController::new(id, table.initial(id)).with_time_scale(time_scale)
        });
        Self { table, controllers }
    }

    pub fn table(&self) -> &PresetTable {
        &self.table
    }

    pub fn controller(&self, element: ElementId) -> &ElementController {
        &self.controllers[element]
    }

    /// Start every element's forward preset.
    pub fn play_forward(&mut self, now: Instant) {
        log::info!("playing connect animation");
        for element in ElementId::ALL {
            self.controllers[element].start(self.table.forward(element), now);
        }
    }

    /// Send every element back to its rest values, overriding anything in flight.
    pub fn play_reverse(&mut self, now: Instant) {
        log::info!("playing reset animation");
        for element in ElementId::ALL {
            self.controllers[element].start(self.table.rest(element), now);
        }
    }

    /// Freeze every element where it is.
    pub fn stop(&mut self, now: Instant) {
        for (_, controller) in self.controllers.iter_mut() {
            controller.stop(now);
        }
    }

    /// Interpolated state of all elements at `now`.
    pub fn frame(&self, now: Instant) -> Snapshot {
        self.controllers.map(|_, controller| controller.sample(now))
    }

    /// End-of-timeline state of all elements.
    pub fn targets(&self) -> Snapshot {
        self.controllers.map(|_, controller| controller.target())
    }

    /// Retire finished motions. Returns whether any element is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for (_, controller) in self.controllers.iter_mut() {
            animating |= controller.tick(now);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.controllers
            .iter()
            .any(|(_, controller)| controller.is_animating())
    }

    /// Instant by which every element has come to rest.
    pub fn settles_at(&self) -> Option<Instant> {
        self.controllers
            .iter()
            .filter_map(|(_, controller)| controller.settles_at())
            .max()
    }
}

impl Default for CardSwipeAnimation {
    fn default() -> Self {
        Self::new(PresetTable::builtin())
    }
}
