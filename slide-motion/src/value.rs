//! Animated elements, their properties and value snapshots

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The six independently animated parts of the card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    /// The whole card, rotated as one piece.
    Card,
    /// Green fill growing across the slide track.
    Swipe,
    /// Dark green knob carrying the check glyph.
    Circle,
    /// Thin lines streaking above and below the track.
    Line,
    /// White check glyph inside the circle.
    Icon,
    /// Earth image sitting on top of the knob.
    Avatar,
}

impl ElementId {
    /// All elements, in declaration (and painting) order.
    pub const ALL: [ElementId; 6] = [
        ElementId::Card,
        ElementId::Swipe,
        ElementId::Circle,
        ElementId::Line,
        ElementId::Icon,
        ElementId::Avatar,
    ];

    pub const fn index(self) -> usize {
        match self {
            ElementId::Card => 0,
            ElementId::Swipe => 1,
            ElementId::Circle => 2,
            ElementId::Line => 3,
            ElementId::Icon => 4,
            ElementId::Avatar => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementId::Card => "card",
            ElementId::Swipe => "swipe",
            ElementId::Circle => "circle",
            ElementId::Line => "line",
            ElementId::Icon => "icon",
            ElementId::Avatar => "avatar",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed map with exactly one slot per [`ElementId`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMap<T>([T; 6]);

impl<T> ElementMap<T> {
    pub fn from_fn(mut f: impl FnMut(ElementId) -> T) -> Self {
        Self(ElementId::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &T)> {
        ElementId::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ElementId, &mut T)> {
        ElementId::ALL.into_iter().zip(self.0.iter_mut())
    }

    pub fn map<U>(&self, mut f: impl FnMut(ElementId, &T) -> U) -> ElementMap<U> {
        ElementMap::from_fn(|id| f(id, &self[id]))
    }
}

impl<T> Index<ElementId> for ElementMap<T> {
    type Output = T;

    fn index(&self, id: ElementId) -> &T {
        &self.0[id.index()]
    }
}

impl<T> IndexMut<ElementId> for ElementMap<T> {
    fn index_mut(&mut self, id: ElementId) -> &mut T {
        &mut self.0[id.index()]
    }
}

/// A single animatable property of an element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Rotation in degrees, clockwise.
    Rotate,
    /// Horizontal offset in logical pixels.
    X,
    /// Width as a percentage of the slide track.
    Width,
    /// Opacity in `0.0..=1.0`.
    Opacity,
    /// Stacking order among the track's children.
    ZIndex,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Rotate,
        Property::X,
        Property::Width,
        Property::Opacity,
        Property::ZIndex,
    ];

    /// Transform properties get a physical spring when no transition is given.
    pub fn is_transform(self) -> bool {
        matches!(self, Property::Rotate | Property::X)
    }

    /// Discrete properties switch instead of interpolating.
    pub fn is_discrete(self) -> bool {
        matches!(self, Property::ZIndex)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Rotate => "rotate",
            Property::X => "x",
            Property::Width => "width",
            Property::Opacity => "opacity",
            Property::ZIndex => "z_index",
        };
        f.write_str(name)
    }
}

/// Values of every property of one element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub rotate: f32,
    pub x: f32,
    pub width: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl VisualState {
    /// Untouched element: fully opaque, no offset, no rotation.
    pub const NEUTRAL: VisualState = VisualState {
        rotate: 0.0,
        x: 0.0,
        width: 0.0,
        opacity: 1.0,
        z_index: 0,
    };

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Rotate => self.rotate,
            Property::X => self.x,
            Property::Width => self.width,
            Property::Opacity => self.opacity,
            Property::ZIndex => self.z_index as f32,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Rotate => self.rotate = value,
            Property::X => self.x = value,
            Property::Width => self.width = value,
            Property::Opacity => self.opacity = value,
            Property::ZIndex => self.z_index = value.round() as i32,
        }
    }

    pub fn with(mut self, property: Property, value: f32) -> Self {
        self.set(property, value);
        self
    }

    /// Largest per-property difference, z-index included.
    pub fn max_difference(&self, other: &VisualState) -> f32 {
        Property::ALL
            .iter()
            .map(|p| (self.get(*p) - other.get(*p)).abs())
            .fold(0.0, f32::max)
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// What a property animates to: one value, or a keyframe sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Value(f32),
    Keyframes(Vec<f32>),
}

impl Target {
    /// The value the property rests at once the animation completes.
    ///
    /// An empty keyframe list has no final value; tables reject it on load.
    pub fn final_value(&self) -> Option<f32> {
        match self {
            Target::Value(v) => Some(*v),
            Target::Keyframes(frames) => frames.last().copied(),
        }
    }

    pub fn values(&self) -> &[f32] {
        match self {
            Target::Value(v) => std::slice::from_ref(v),
            Target::Keyframes(frames) => frames,
        }
    }
}

impl From<f32> for Target {
    fn from(value: f32) -> Self {
        Target::Value(value)
    }
}

impl From<Vec<f32>> for Target {
    fn from(frames: Vec<f32>) -> Self {
        Target::Keyframes(frames)
    }
}
