//! State snapshots and the history log
//!
//! A [`State`] captures the creature's age and every parameter value at one
//! moment. [`History`] keeps them in capture order and only ever grows.

use serde::Serialize;

use crate::parameter::{ParameterKind, ParameterSet};

/// Immutable snapshot of a creature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct State {
    age: u32,
    values: [f32; ParameterKind::COUNT],
}

impl State {
    pub(crate) fn capture(age: u32, parameters: &ParameterSet) -> Self {
        State {
            age,
            values: parameters.values(),
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Captured value of one parameter kind
    pub fn value(&self, kind: ParameterKind) -> f32 {
        self.values[kind.index()]
    }

    /// `(kind, value)` pairs in registry order
    pub fn values(&self) -> impl Iterator<Item = (ParameterKind, f32)> + '_ {
        ParameterKind::ALL.iter().map(|&kind| (kind, self.value(kind)))
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "age={}", self.age)?;
        for (kind, value) in self.values() {
            write!(f, "/{kind}={value}")?;
        }
        Ok(())
    }
}

/// Append-only log of snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    states: Vec<State>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, state: State) -> &State {
        self.states.push(state);
        &self.states[self.states.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn as_slice(&self) -> &[State] {
        &self.states
    }

    /// Time series of one parameter across every captured state
    pub fn series(&self, kind: ParameterKind) -> Vec<f32> {
        self.states.iter().map(|state| state.value(kind)).collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
