//! Player and creature actions
//!
//! Actions hold no reference to a creature. Whoever runs one passes the
//! creature in, so a stale action from an earlier phase can never keep an
//! old creature state alive.

use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::error::{ModelError, Result};
use crate::parameter::ParameterKind;

/// Behavior shared by every action
pub trait Action {
    /// Display label, also the action's identity within a phase
    fn name(&self) -> &'static str;

    /// Run the action against `creature`
    fn perform(&self, creature: &mut Creature) -> ActionEvent;
}

/// Actions triggered by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Raise satiety by `amount`
    Feed { amount: f32 },
    TeaseHead,
}

impl PlayerAction {
    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            Self::Feed { amount } if !amount.is_finite() => Err(ModelError::InvalidAmount {
                action: self.name().to_string(),
                amount,
            }),
            _ => Ok(()),
        }
    }
}

impl Action for PlayerAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Feed { .. } => "Feed",
            Self::TeaseHead => "Tease head",
        }
    }

    fn perform(&self, creature: &mut Creature) -> ActionEvent {
        let event = match *self {
            Self::Feed { amount } => {
                let satiety = creature.parameters_mut().get_mut(ParameterKind::Satiety);
                satiety.adjust(amount);
                ActionEvent::Fed {
                    amount,
                    satiety: satiety.value(),
                }
            }
            Self::TeaseHead => ActionEvent::HeadTeased,
        };
        log::debug!("{} performed {:?}", creature.name(), event);
        event
    }
}

/// Actions the creature takes on its own
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CreatureAction {
    /// Fires with probability `chance` when picked
    ChaseTail { chance: f32 },
}

impl CreatureAction {
    /// Probability of running this action rather than idling
    pub fn chance(&self) -> f32 {
        match *self {
            Self::ChaseTail { chance } => chance,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let chance = self.chance();
        if !(0.0..=1.0).contains(&chance) {
            return Err(ModelError::InvalidChance {
                action: self.name().to_string(),
                chance,
            });
        }
        Ok(())
    }
}

impl Action for CreatureAction {
    fn name(&self) -> &'static str {
        match self {
            Self::ChaseTail { .. } => "Chase tail",
        }
    }

    fn perform(&self, creature: &mut Creature) -> ActionEvent {
        match self {
            Self::ChaseTail { .. } => {
                log::info!("Event: {} is chasing its tail", creature.name());
                ActionEvent::ChasedTail
            }
        }
    }
}

/// Placeholder run when a creature action loses its coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoAction;

impl Action for NoAction {
    fn name(&self) -> &'static str {
        "No action"
    }

    fn perform(&self, creature: &mut Creature) -> ActionEvent {
        log::trace!("{} idles", creature.name());
        ActionEvent::Idle
    }
}

/// Observable result of running an action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEvent {
    Fed { amount: f32, satiety: f32 },
    HeadTeased,
    ChasedTail,
    Idle,
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fed { amount, satiety } => write!(f, "Fed {amount} (satiety {satiety:.1})"),
            Self::HeadTeased => write!(f, "Head teased"),
            Self::ChasedTail => write!(f, "Chased tail"),
            Self::Idle => write!(f, "Idle"),
        }
    }
}
