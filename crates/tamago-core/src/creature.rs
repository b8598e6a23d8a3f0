//! The creature aggregate
//!
//! Owns the live parameters, the current phase's actions and the history
//! log. Growth happens only through [`Creature::set_age`].

use std::sync::Arc;

use crate::action::{Action, ActionEvent, CreatureAction, NoAction, PlayerAction};
use crate::error::{ModelError, Result};
use crate::history::{History, State};
use crate::kind::Kind;
use crate::parameter::ParameterSet;
use crate::phase::MaturePhase;
use crate::registry::ParameterRegistry;
use crate::rng::CreatureRng;

/// A virtual pet of some kind
#[derive(Debug, Clone)]
pub struct Creature {
    kind: Arc<Kind>,
    name: String,
    age: u32,
    phase: usize,
    parameters: ParameterSet,
    player_actions: Vec<PlayerAction>,
    creature_actions: Vec<CreatureAction>,
    history: History,
}

impl Creature {
    /// Create a newborn creature (age 0, first phase)
    pub fn new(kind: Arc<Kind>, name: impl Into<String>) -> Self {
        // A kind always has at least one phase starting at day 0
        let first = &kind.phases()[0];
        let parameters = ParameterSet::instantiate(first.parameters(), None);
        let player_actions = first.player_actions().to_vec();
        let creature_actions = first.creature_actions().to_vec();

        Creature {
            kind,
            name: name.into(),
            age: 0,
            phase: 0,
            parameters,
            player_actions,
            creature_actions,
            history: History::new(),
        }
    }

    pub fn kind(&self) -> &Arc<Kind> {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Index of the current phase within the kind
    pub fn phase_index(&self) -> usize {
        self.phase
    }

    pub fn phase(&self) -> &MaturePhase {
        &self.kind.phases()[self.phase]
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }

    pub fn player_actions(&self) -> &[PlayerAction] {
        &self.player_actions
    }

    pub fn creature_actions(&self) -> &[CreatureAction] {
        &self.creature_actions
    }

    /// Player action of the current phase with the given name
    pub fn player_action(&self, name: &str) -> Option<&PlayerAction> {
        self.player_actions.iter().find(|action| action.name() == name)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Advance one tick: run every update rule in registry order, then snapshot
    pub fn update(&mut self) -> &State {
        for def in ParameterRegistry::global().iter() {
            let next = (def.update)(self.parameters.get(def.kind), &self.parameters);
            self.parameters.get_mut(def.kind).set_value(next);
        }
        self.save()
    }

    /// Move the creature to `new_age`, growing up if the phase changes
    ///
    /// Returns whether a growth transition ran. Ages outside the kind's
    /// lifespan are rejected and leave the creature untouched.
    pub fn set_age(&mut self, new_age: u32) -> Result<bool> {
        let next_phase = self.kind.phase_index(new_age)?;
        let grows = next_phase != self.phase;

        self.age = new_age;
        if grows {
            self.phase = next_phase;
            self.grow_up();
        }
        Ok(grows)
    }

    /// Re-materialize parameters and actions from the current phase
    fn grow_up(&mut self) {
        let phase = &self.kind.phases()[self.phase];
        self.parameters = ParameterSet::instantiate(phase.parameters(), Some(&self.parameters));
        self.player_actions = phase.player_actions().to_vec();
        self.creature_actions = phase.creature_actions().to_vec();

        log::debug!(
            "{} grew into phase {} at age {}",
            self.name,
            self.phase,
            self.age
        );
    }

    /// Capture the current state and append it to the history
    pub fn save(&mut self) -> &State {
        let state = State::capture(self.age, &self.parameters);
        self.history.push(state)
    }

    /// Run a player action of the current phase by name
    pub fn perform_player_action(&mut self, name: &str) -> Result<ActionEvent> {
        let action = *self
            .player_action(name)
            .ok_or_else(|| ModelError::UnknownAction(name.to_string()))?;
        Ok(action.perform(self))
    }

    /// Pick one creature action uniformly and run it with its trigger chance
    ///
    /// When the coin flip fails the creature idles instead.
    pub fn random_action<R: CreatureRng + ?Sized>(&mut self, rng: &mut R) -> Result<ActionEvent> {
        if self.creature_actions.is_empty() {
            return Err(ModelError::NoCreatureActions { age: self.age });
        }

        let action = self.creature_actions[rng.gen_index(self.creature_actions.len())];
        if rng.check_probability(action.chance()) {
            Ok(action.perform(self))
        } else {
            Ok(NoAction.perform(self))
        }
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind.name(), self.name, self.age)?;
        for parameter in self.parameters.iter() {
            write!(f, "\n\t{} {:.2}", parameter.kind(), parameter.value())?;
        }
        Ok(())
    }
}
