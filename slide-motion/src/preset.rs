//! Animation presets and the table of presets for every element
//!
//! The built-in table encodes the connect choreography: the card wobbles,
//! the knob and avatar slide right while the avatar fades, the green fill
//! grows behind them, the streak lines shoot past and the check glyph
//! fades in. The rest presets put everything back behind the track.
//!
//! A TOML file can replace individual entries:
//!
//! ```toml
//! [forward.circle]
//! values = { x = 294, z_index = 10 }
//! transition = { type = "spring", delay = 0.2, duration = 1.0, bounce = 0.2 }
//!
//! [initial.icon]
//! opacity = 0
//! x = -100
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::PresetError;
use crate::transition::TransitionSpec;
use crate::value::{ElementId, ElementMap, Property, Target, VisualState};

/// Horizontal travel of the knob and avatar across the track, in pixels.
pub const KNOB_TRAVEL: f32 = 294.0;

/// A named bundle of target values plus the timing to reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationPreset {
    #[serde(default)]
    pub name: String,
    pub values: BTreeMap<Property, Target>,
    #[serde(default)]
    pub transition: TransitionSpec,
}

impl AnimationPreset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
            transition: TransitionSpec::default(),
        }
    }

    pub fn value(mut self, property: Property, target: impl Into<Target>) -> Self {
        self.values.insert(property, target.into());
        self
    }

    pub fn transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// State an element lands in when this preset finishes from `from`.
    pub fn settled_state(&self, from: VisualState) -> VisualState {
        self.values.iter().fold(from, |state, (property, target)| {
            match target.final_value() {
                Some(value) => state.with(*property, value),
                None => state,
            }
        })
    }

    fn validate(&self) -> Result<(), String> {
        if self.values.is_empty() {
            return Err("preset animates no properties".to_string());
        }
        for (property, target) in &self.values {
            let values = target.values();
            if values.is_empty() {
                return Err(format!("{property} has an empty keyframe list"));
            }
            if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
                return Err(format!("{property} has a non-finite value {bad}"));
            }
            if *property == Property::Opacity
                && values.iter().any(|v| !(0.0..=1.0).contains(v))
            {
                return Err(format!("opacity values must be within 0..=1, got {values:?}"));
            }
        }
        self.transition.validate()
    }
}

/// Forward, rest and initial state for each of the six elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    forward: ElementMap<AnimationPreset>,
    rest: ElementMap<AnimationPreset>,
    initial: ElementMap<VisualState>,
}

static BUILTIN: Lazy<PresetTable> = Lazy::new(build_builtin);

impl PresetTable {
    /// The stock connect choreography.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Built-in table with the entries of a TOML document layered on top.
    pub fn from_toml_str(source: &str) -> Result<Self, PresetError> {
        let file: PresetFile = toml::from_str(source)?;
        let mut table = Self::builtin();

        for (element, mut preset) in file.forward {
            if preset.name.is_empty() {
                preset.name = format!("{element}.forward");
            }
            table.forward[element] = preset;
        }
        for (element, mut preset) in file.rest {
            if preset.name.is_empty() {
                preset.name = format!("{element}.rest");
            }
            table.rest[element] = preset;
        }
        for (element, values) in file.initial {
            table.initial[element] = values
                .into_iter()
                .fold(VisualState::NEUTRAL, |state, (property, value)| {
                    state.with(property, value)
                });
        }

        table.validate()?;
        Ok(table)
    }

    /// Read and merge a TOML override file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&source)?;
        log::info!("loaded animation presets from {}", path.display());
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), PresetError> {
        for (section, presets) in [("forward", &self.forward), ("rest", &self.rest)] {
            for (element, preset) in presets.iter() {
                preset
                    .validate()
                    .map_err(|reason| PresetError::Invalid {
                        section,
                        element,
                        reason,
                    })?;
            }
        }
        for (element, state) in self.initial.iter() {
            let finite = Property::ALL.iter().all(|p| state.get(*p).is_finite());
            if !finite || !(0.0..=1.0).contains(&state.opacity) {
                return Err(PresetError::Invalid {
                    section: "initial",
                    element,
                    reason: format!("initial state out of range: {state:?}"),
                });
            }
        }
        Ok(())
    }

    pub fn forward(&self, element: ElementId) -> &AnimationPreset {
        &self.forward[element]
    }

    pub fn rest(&self, element: ElementId) -> &AnimationPreset {
        &self.rest[element]
    }

    pub fn initial(&self, element: ElementId) -> VisualState {
        self.initial[element]
    }

    /// End-of-timeline snapshot after a forward play from the initial states.
    pub fn forward_snapshot(&self) -> ElementMap<VisualState> {
        ElementMap::from_fn(|id| self.forward[id].settled_state(self.initial[id]))
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// On-disk shape of an override file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PresetFile {
    forward: BTreeMap<ElementId, AnimationPreset>,
    rest: BTreeMap<ElementId, AnimationPreset>,
    initial: BTreeMap<ElementId, BTreeMap<Property, f32>>,
}

fn build_builtin() -> PresetTable {
    use Property::{Opacity, Rotate, Width, X, ZIndex};

    let initial = ElementMap::from_fn(|id| match id {
        ElementId::Card => VisualState::NEUTRAL,
        ElementId::Swipe => VisualState::NEUTRAL
            .with(Width, 0.0)
            .with(ZIndex, -1.0)
            .with(Opacity, 0.0),
        ElementId::Circle => VisualState::NEUTRAL.with(X, 0.0).with(ZIndex, -1.0),
        ElementId::Line => VisualState::NEUTRAL
            .with(Width, 0.0)
            .with(ZIndex, -1.0)
            .with(Opacity, 1.0)
            .with(X, 0.0),
        ElementId::Icon => VisualState::NEUTRAL.with(Opacity, 0.0).with(X, -100.0),
        ElementId::Avatar => VisualState::NEUTRAL.with(X, 0.0).with(ZIndex, 10.0),
    });

    let forward = ElementMap::from_fn(|id| match id {
        ElementId::Card => AnimationPreset::new("card.forward")
            .value(Rotate, vec![0.0, -20.0, -10.0, 10.0, 0.0])
            .transition(TransitionSpec::new().duration(0.5).damping(10.0)),
        ElementId::Swipe => AnimationPreset::new("swipe.forward")
            .value(Width, 100.0)
            .value(ZIndex, 1.0)
            .value(Opacity, vec![0.0, 0.5, 1.0])
            .transition(
                TransitionSpec::new()
                    .delay(0.3)
                    .duration(1.0)
                    .bounce(0.5)
                    .spring()
                    .mass(0.2),
            ),
        ElementId::Circle => AnimationPreset::new("circle.forward")
            .value(ZIndex, 10.0)
            .value(X, KNOB_TRAVEL)
            .transition(
                TransitionSpec::new()
                    .delay(0.2)
                    .duration(1.0)
                    .spring()
                    .bounce(0.2),
            ),
        ElementId::Line => AnimationPreset::new("line.forward")
            .value(Width, 110.0)
            .value(ZIndex, 10.0)
            .value(Opacity, vec![1.0, 0.7, 0.5, 0.0])
            .value(X, 50.0)
            .transition(TransitionSpec::new().duration(1.0).spring().bounce(0.2)),
        ElementId::Icon => AnimationPreset::new("icon.forward")
            .value(Opacity, 1.0)
            .value(X, vec![0.0, 30.0, 0.0])
            .transition(TransitionSpec::new().delay(0.4).duration(1.0)),
        ElementId::Avatar => AnimationPreset::new("avatar.forward")
            .value(X, KNOB_TRAVEL)
            .value(Opacity, vec![1.0, 0.5, 0.0])
            .transition(
                TransitionSpec::new()
                    .delay(0.2)
                    .duration(1.1)
                    .spring()
                    .bounce(0.2),
            ),
    });

    let rest = ElementMap::from_fn(|id| match id {
        ElementId::Card => AnimationPreset::new("card.rest").value(Rotate, 0.0),
        ElementId::Swipe => AnimationPreset::new("swipe.rest")
            .value(Width, 0.0)
            .value(Opacity, 0.0)
            .value(ZIndex, -1.0),
        ElementId::Circle => AnimationPreset::new("circle.rest")
            .value(X, 0.0)
            .value(ZIndex, -1.0),
        ElementId::Line => AnimationPreset::new("line.rest")
            .value(Width, 0.0)
            .value(Opacity, 0.0)
            .value(ZIndex, -1.0)
            .value(X, 0.0),
        ElementId::Icon => AnimationPreset::new("icon.rest")
            .value(Opacity, 0.0)
            .value(X, -100.0),
        ElementId::Avatar => AnimationPreset::new("avatar.rest")
            .value(X, 0.0)
            .value(Opacity, 1.0),
    });

    PresetTable {
        forward,
        rest,
        initial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionKind;

    #[test]
    fn builtin_table_is_valid() {
        PresetTable::builtin()
            .validate()
            .expect("built-in presets must validate");
    }

    #[test]
    fn builtin_forward_snapshot_matches_choreography() {
        let snapshot = PresetTable::builtin().forward_snapshot();
        assert_eq!(snapshot[ElementId::Card].rotate, 0.0);
        assert_eq!(snapshot[ElementId::Circle].x, 294.0);
        assert_eq!(snapshot[ElementId::Circle].z_index, 10);
        assert_eq!(snapshot[ElementId::Line].width, 110.0);
        assert_eq!(snapshot[ElementId::Line].opacity, 0.0);
        assert_eq!(snapshot[ElementId::Swipe].width, 100.0);
        assert_eq!(snapshot[ElementId::Icon].opacity, 1.0);
        assert_eq!(snapshot[ElementId::Icon].x, 0.0);
        assert_eq!(snapshot[ElementId::Avatar].opacity, 0.0);
    }

    #[test]
    fn override_replaces_only_named_entries() {
        let table = PresetTable::from_toml_str(
            r#"
            [forward.circle]
            values = { x = 200, z_index = 10 }
            transition = { type = "spring", delay = 0.1, stiffness = 300, damping = 20 }

            [initial.icon]
            opacity = 0.5
            "#,
        )
        .expect("valid override");

        let circle = table.forward(ElementId::Circle);
        assert_eq!(circle.name, "circle.forward");
        assert_eq!(circle.values[&Property::X], Target::Value(200.0));
        assert_eq!(circle.transition.kind, Some(TransitionKind::Spring));
        assert_eq!(circle.transition.stiffness, Some(300.0));

        assert_eq!(table.initial(ElementId::Icon).opacity, 0.5);
        assert_eq!(table.initial(ElementId::Icon).x, 0.0);
        assert_eq!(
            table.forward(ElementId::Avatar),
            PresetTable::builtin().forward(ElementId::Avatar)
        );
    }

    #[test]
    fn keyframes_parse_from_arrays() {
        let table = PresetTable::from_toml_str(
            r#"
            [forward.card]
            name = "wobble"
            values = { rotate = [0, 15, -15, 0] }
            transition = { duration = 0.4, ease = "ease_out" }
            "#,
        )
        .expect("valid override");
        let card = table.forward(ElementId::Card);
        assert_eq!(card.name, "wobble");
        assert_eq!(
            card.values[&Property::Rotate],
            Target::Keyframes(vec![0.0, 15.0, -15.0, 0.0])
        );
    }

    #[test]
    fn rejects_invalid_override() {
        let err = PresetTable::from_toml_str(
            r#"
            [rest.line]
            values = { opacity = 2.0 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PresetError::Invalid {
                section: "rest",
                element: ElementId::Line,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = PresetTable::from_toml_str(
            r#"
            [forward.circle]
            values = { x = 1 }
            transition = { springiness = 3 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PresetError::Parse(_)));
    }

    #[test]
    fn rejects_timings_too_long_to_play() {
        for transition in [
            r#"{ type = "tween", delay = 1e30, duration = 1.0 }"#,
            r#"{ type = "tween", delay = 0.1, duration = 1e30 }"#,
        ] {
            let source = format!("[forward.circle]\nvalues = {{ x = 10 }}\ntransition = {transition}\n");
            let err = PresetTable::from_toml_str(&source).unwrap_err();
            assert!(
                matches!(
                    err,
                    PresetError::Invalid {
                        section: "forward",
                        element: ElementId::Circle,
                        ..
                    }
                ),
                "{transition} should be rejected, got {err}"
            );
        }
    }
}
