//! Error types for the creature model
//!
//! Every failure is local to the call that caused it: bad template data is
//! rejected when a kind or phase is built, bad requests when they are made.

use thiserror::Error;

use crate::parameter::ParameterKind;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the creature model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid bounds for {kind}: min {min} > max {max}")]
    InvalidBounds {
        kind: ParameterKind,
        min: f32,
        max: f32,
    },

    #[error("unregistered parameter kind: {0:?}")]
    UnknownParameterKind(String),

    #[error("age {age} is outside the covered lifespan 0..{lifespan}")]
    AgeOutOfRange { age: u32, lifespan: u32 },

    #[error("no creature actions available at age {age}")]
    NoCreatureActions { age: u32 },

    #[error("malformed kind: {0}")]
    MalformedKind(String),

    #[error("malformed maturity phase: {reason}")]
    MalformedPhase { reason: String },

    #[error("trigger chance {chance} for {action:?} is outside [0, 1]")]
    InvalidChance { action: String, chance: f32 },

    #[error("amount {amount} for {action:?} is not a finite number")]
    InvalidAmount { action: String, amount: f32 },

    #[error("player action {0:?} is not available in the current phase")]
    UnknownAction(String),

    #[error("kind definition error: {0}")]
    Definition(String),
}

impl ModelError {
    pub(crate) fn phase(reason: impl Into<String>) -> Self {
        ModelError::MalformedPhase {
            reason: reason.into(),
        }
    }
}
