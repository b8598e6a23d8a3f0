//! Maturity phases
//!
//! A phase describes one stretch of a creature's life: how many days it
//! lasts, the parameter templates that apply during it, and which actions
//! are available. Phases are validated once and never change afterwards.

use serde::Serialize;

use crate::action::{Action, CreatureAction, PlayerAction};
use crate::error::{ModelError, Result};
use crate::parameter::{ParameterKind, ParameterTemplate};

/// One maturity phase of a kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturePhase {
    days: u32,
    parameters: [ParameterTemplate; ParameterKind::COUNT],
    player_actions: Vec<PlayerAction>,
    creature_actions: Vec<CreatureAction>,
}

impl MaturePhase {
    /// Build a phase, validating its templates and actions
    ///
    /// `parameters` must contain exactly one template per registered kind
    /// (in any order). Action names must be unique within each list.
    pub fn new(
        days: u32,
        parameters: impl IntoIterator<Item = ParameterTemplate>,
        player_actions: Vec<PlayerAction>,
        creature_actions: Vec<CreatureAction>,
    ) -> Result<Self> {
        if days == 0 {
            return Err(ModelError::phase("phase must last at least one day"));
        }

        let mut slots: [Option<ParameterTemplate>; ParameterKind::COUNT] =
            [None; ParameterKind::COUNT];
        for template in parameters {
            let slot = &mut slots[template.kind().index()];
            if slot.is_some() {
                return Err(ModelError::phase(format!(
                    "duplicate template for {}",
                    template.kind()
                )));
            }
            *slot = Some(template);
        }

        let mut templates = Vec::with_capacity(ParameterKind::COUNT);
        for (kind, slot) in ParameterKind::ALL.iter().zip(slots) {
            match slot {
                Some(template) => templates.push(template),
                None => return Err(ModelError::phase(format!("missing template for {kind}"))),
            }
        }
        let parameters: [ParameterTemplate; ParameterKind::COUNT] = templates
            .try_into()
            .map_err(|_| ModelError::phase("template count mismatch"))?;

        for action in &player_actions {
            action.validate()?;
        }
        for action in &creature_actions {
            action.validate()?;
        }
        check_unique_names(&player_actions)?;
        check_unique_names(&creature_actions)?;

        Ok(MaturePhase {
            days,
            parameters,
            player_actions,
            creature_actions,
        })
    }

    /// Duration in days
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Templates in registry order
    pub fn parameters(&self) -> &[ParameterTemplate; ParameterKind::COUNT] {
        &self.parameters
    }

    pub fn template(&self, kind: ParameterKind) -> &ParameterTemplate {
        &self.parameters[kind.index()]
    }

    pub fn player_actions(&self) -> &[PlayerAction] {
        &self.player_actions
    }

    pub fn creature_actions(&self) -> &[CreatureAction] {
        &self.creature_actions
    }
}

fn check_unique_names<A: Action>(actions: &[A]) -> Result<()> {
    for (i, action) in actions.iter().enumerate() {
        if actions[..i].iter().any(|other| other.name() == action.name()) {
            return Err(ModelError::phase(format!(
                "duplicate action {:?}",
                action.name()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(max: f32) -> Vec<ParameterTemplate> {
        ParameterKind::ALL
            .iter()
            .map(|&kind| ParameterTemplate::carry(kind, 0.0, max).unwrap())
            .collect()
    }

    #[test]
    fn test_phase_orders_templates_by_kind() {
        let mut shuffled = templates(75.0);
        shuffled.reverse();

        let phase = MaturePhase::new(20, shuffled, vec![], vec![]).unwrap();
        assert_eq!(phase.days(), 20);
        for (i, template) in phase.parameters().iter().enumerate() {
            assert_eq!(template.kind(), ParameterKind::ALL[i]);
        }
        assert_eq!(phase.template(ParameterKind::Mood).range(), (0.0, 75.0));
    }

    #[test]
    fn test_phase_rejects_zero_days() {
        let err = MaturePhase::new(0, templates(50.0), vec![], vec![]).unwrap_err();
        assert!(matches!(err, ModelError::MalformedPhase { .. }));
    }

    #[test]
    fn test_phase_rejects_missing_template() {
        let mut partial = templates(50.0);
        partial.retain(|t| t.kind() != ParameterKind::Satiety);

        let err = MaturePhase::new(5, partial, vec![], vec![]).unwrap_err();
        assert_eq!(err, ModelError::phase("missing template for Satiety"));
    }

    #[test]
    fn test_phase_rejects_duplicate_template() {
        let mut doubled = templates(50.0);
        doubled.push(ParameterTemplate::carry(ParameterKind::Health, 0.0, 10.0).unwrap());

        let err = MaturePhase::new(5, doubled, vec![], vec![]).unwrap_err();
        assert_eq!(err, ModelError::phase("duplicate template for Health"));
    }

    #[test]
    fn test_phase_rejects_duplicate_action_names() {
        let err = MaturePhase::new(
            5,
            templates(50.0),
            vec![
                PlayerAction::Feed { amount: 3.0 },
                PlayerAction::Feed { amount: 5.0 },
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ModelError::phase("duplicate action \"Feed\""));
    }

    #[test]
    fn test_phase_rejects_bad_chance() {
        let err = MaturePhase::new(
            5,
            templates(50.0),
            vec![],
            vec![CreatureAction::ChaseTail { chance: -0.1 }],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::InvalidChance { .. }));
    }
}
