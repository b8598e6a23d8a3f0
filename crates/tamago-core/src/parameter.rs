//! Bounded creature parameters
//!
//! A [`Parameter`] is a single numeric attribute (satiety, health, ...) whose
//! value always stays inside its `[min, max]` range. Every write clamps.

use serde::Serialize;

use crate::error::{ModelError, Result};

/// The closed set of parameter kinds, in registry order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ParameterKind {
    Health,
    Satiety,
    Fatigue,
    Hygiene,
    Mood,
    Stamina,
}

impl ParameterKind {
    /// Number of registered kinds
    pub const COUNT: usize = 6;

    /// All kinds in registry order
    pub const ALL: [ParameterKind; Self::COUNT] = [
        ParameterKind::Health,
        ParameterKind::Satiety,
        ParameterKind::Fatigue,
        ParameterKind::Hygiene,
        ParameterKind::Mood,
        ParameterKind::Stamina,
    ];

    /// Slot of this kind in registry order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Registered name of this kind
    pub fn name(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Satiety => "Satiety",
            Self::Fatigue => "Fatigue",
            Self::Hygiene => "Hygiene",
            Self::Mood => "Mood",
            Self::Stamina => "Stamina",
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn check_bounds(kind: ParameterKind, min: f32, max: f32) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ModelError::InvalidBounds { kind, min, max });
    }
    Ok(())
}

/// A live, bounded creature parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameter {
    kind: ParameterKind,
    value: f32,
    min: f32,
    max: f32,
}

impl Parameter {
    /// Create a parameter, clamping `initial` into `[min, max]`
    ///
    /// Fails when `min > max` or either bound is not finite.
    pub fn new(kind: ParameterKind, initial: f32, min: f32, max: f32) -> Result<Self> {
        check_bounds(kind, min, max)?;
        Ok(Self::new_unchecked(kind, initial, min, max))
    }

    /// Bounds must already have been validated
    pub(crate) fn new_unchecked(kind: ParameterKind, initial: f32, min: f32, max: f32) -> Self {
        let mut parameter = Parameter {
            kind,
            value: min,
            min,
            max,
        };
        parameter.set_value(initial);
        parameter
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// `(min, max)` bounds
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Set the value (clamped to min..=max)
    pub fn set_value(&mut self, value: f32) {
        // NaN would slip through clamp, treat it as the floor
        self.value = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
    }

    /// Add `delta` to the value (clamped)
    pub fn adjust(&mut self, delta: f32) {
        self.set_value(self.value + delta);
    }

    /// Fill ratio between the bounds (0.0 - 1.0)
    pub fn percentage(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.value <= self.min
    }
}

/// Template for one parameter within a maturity phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterTemplate {
    kind: ParameterKind,
    initial: Option<f32>,
    min: f32,
    max: f32,
}

impl ParameterTemplate {
    /// `initial: None` keeps the creature's current value across growth
    pub fn new(kind: ParameterKind, initial: Option<f32>, min: f32, max: f32) -> Result<Self> {
        check_bounds(kind, min, max)?;
        Ok(ParameterTemplate {
            kind,
            initial,
            min,
            max,
        })
    }

    /// Template with an explicit starting value
    pub fn with_value(kind: ParameterKind, initial: f32, min: f32, max: f32) -> Result<Self> {
        Self::new(kind, Some(initial), min, max)
    }

    /// Template that only re-bounds the carried value
    pub fn carry(kind: ParameterKind, min: f32, max: f32) -> Result<Self> {
        Self::new(kind, None, min, max)
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn initial(&self) -> Option<f32> {
        self.initial
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Build a live parameter, using `carried` when the template has no override
    ///
    /// With neither an override nor a carried value the parameter starts at `min`.
    pub fn instantiate(&self, carried: Option<f32>) -> Parameter {
        let initial = self.initial.or(carried).unwrap_or(self.min);
        Parameter::new_unchecked(self.kind, initial, self.min, self.max)
    }
}

/// Exactly one live parameter per registered kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    parameters: [Parameter; ParameterKind::COUNT],
}

impl ParameterSet {
    /// Materialize a full set from per-kind templates
    ///
    /// Values not overridden by a template are carried from `previous`.
    pub(crate) fn instantiate(
        templates: &[ParameterTemplate; ParameterKind::COUNT],
        previous: Option<&ParameterSet>,
    ) -> Self {
        let parameters = std::array::from_fn(|i| {
            let carried = previous.map(|set| set.parameters[i].value);
            templates[i].instantiate(carried)
        });
        ParameterSet { parameters }
    }

    pub fn get(&self, kind: ParameterKind) -> &Parameter {
        &self.parameters[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ParameterKind) -> &mut Parameter {
        &mut self.parameters[kind.index()]
    }

    /// Current value of one kind
    pub fn value(&self, kind: ParameterKind) -> f32 {
        self.get(kind).value
    }

    /// Iterate parameters in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn values(&self) -> [f32; ParameterKind::COUNT] {
        std::array::from_fn(|i| self.parameters[i].value)
    }
}

impl std::ops::Index<ParameterKind> for ParameterSet {
    type Output = Parameter;

    fn index(&self, kind: ParameterKind) -> &Parameter {
        self.get(kind)
    }
}
