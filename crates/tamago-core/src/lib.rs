//! Virtual pet model for Tamago
//!
//! This crate implements:
//! - Bounded creature parameters and their per-tick update rules
//! - Species ("kinds") made of maturity phases, indexed by age
//! - The creature aggregate: growth transitions, actions, state history
//! - RON kind definitions and a tick-driven headless simulation

pub mod action;
pub mod creature;
pub mod definition;
pub mod error;
pub mod history;
pub mod kind;
pub mod kinds;
pub mod parameter;
pub mod phase;
pub mod registry;
pub mod rng;
pub mod simulation;

// Re-export main types for convenience
pub use action::{Action, ActionEvent, CreatureAction, NoAction, PlayerAction};
pub use creature::Creature;
pub use definition::KindDefinition;
pub use error::{ModelError, Result};
pub use history::{History, State};
pub use kind::{AgeRange, Kind};
pub use parameter::{Parameter, ParameterKind, ParameterSet, ParameterTemplate};
pub use phase::MaturePhase;
pub use registry::{ParameterDef, ParameterRegistry};
pub use rng::CreatureRng;
pub use simulation::{Simulation, SimulationConfig, TickReport};
