//! Creature kinds and the age → phase index
//!
//! A [`Kind`] lays its phases end to end starting at day 0. Each phase owns
//! the half-open range `[start, start + days)`; lookup by age is a binary
//! search over those ranges.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::phase::MaturePhase;

/// Half-open day range owned by one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    pub start: u32,
    pub end: u32,
    pub phase: usize,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        self.start <= age && age < self.end
    }
}

/// A species: a name plus its ordered maturity phases
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kind {
    name: String,
    phases: Vec<MaturePhase>,
    ranges: Vec<AgeRange>,
}

impl Kind {
    /// Build a kind, accumulating phase durations left to right from day 0
    pub fn new(name: impl Into<String>, phases: Vec<MaturePhase>) -> Result<Self> {
        let name = name.into();
        if phases.is_empty() {
            return Err(ModelError::MalformedKind(format!(
                "kind {name:?} has no maturity phases"
            )));
        }

        let mut ranges = Vec::with_capacity(phases.len());
        let mut start: u32 = 0;
        for (phase, mature_phase) in phases.iter().enumerate() {
            debug_assert!(mature_phase.days() > 0, "phases are validated on construction");
            let end = start.checked_add(mature_phase.days()).ok_or_else(|| {
                ModelError::MalformedKind(format!("lifespan of {name:?} overflows"))
            })?;
            ranges.push(AgeRange { start, end, phase });
            start = end;
        }

        Ok(Kind {
            name,
            phases,
            ranges,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phases(&self) -> &[MaturePhase] {
        &self.phases
    }

    pub fn ranges(&self) -> &[AgeRange] {
        &self.ranges
    }

    /// Total covered days; valid ages are `0..lifespan`
    pub fn lifespan(&self) -> u32 {
        self.ranges.last().map_or(0, |range| range.end)
    }

    /// Index of the phase covering `age`
    pub fn phase_index(&self, age: u32) -> Result<usize> {
        let i = self.ranges.partition_point(|range| range.end <= age);
        match self.ranges.get(i) {
            Some(range) if range.contains(age) => Ok(range.phase),
            _ => Err(ModelError::AgeOutOfRange {
                age,
                lifespan: self.lifespan(),
            }),
        }
    }

    /// Phase covering `age`
    pub fn phase_at(&self, age: u32) -> Result<&MaturePhase> {
        self.phase_index(age).map(|i| &self.phases[i])
    }
}
