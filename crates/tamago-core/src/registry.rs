//! Parameter registry
//!
//! Maps each parameter kind name to its per-tick update rule. The table is
//! fixed at compile time; a new kind is added by registering a new
//! [`ParameterDef`] entry, leaving the existing rules untouched.

use crate::error::{ModelError, Result};
use crate::parameter::{Parameter, ParameterKind, ParameterSet};

/// Per-tick update rule: returns the parameter's next value (clamped by the caller)
///
/// Rules read sibling parameters through the set but never write them.
pub type UpdateRule = fn(&Parameter, &ParameterSet) -> f32;

/// Definition of a registered parameter kind
#[derive(Debug, Clone, Copy)]
pub struct ParameterDef {
    pub kind: ParameterKind,
    pub name: &'static str,
    pub update: UpdateRule,
}

/// Registry of all parameter kinds
pub struct ParameterRegistry {
    defs: [ParameterDef; ParameterKind::COUNT],
}

static REGISTRY: ParameterRegistry = ParameterRegistry {
    defs: [
        ParameterDef {
            kind: ParameterKind::Health,
            name: "Health",
            update: update_health,
        },
        ParameterDef {
            kind: ParameterKind::Satiety,
            name: "Satiety",
            update: update_satiety,
        },
        ParameterDef {
            kind: ParameterKind::Fatigue,
            name: "Fatigue",
            update: keep_value,
        },
        ParameterDef {
            kind: ParameterKind::Hygiene,
            name: "Hygiene",
            update: keep_value,
        },
        ParameterDef {
            kind: ParameterKind::Mood,
            name: "Mood",
            update: keep_value,
        },
        ParameterDef {
            kind: ParameterKind::Stamina,
            name: "Stamina",
            update: keep_value,
        },
    ],
};

impl ParameterRegistry {
    /// The process-wide registry
    pub fn global() -> &'static ParameterRegistry {
        &REGISTRY
    }

    /// Look up a kind by its registered name
    pub fn resolve(&self, name: &str) -> Result<&ParameterDef> {
        self.defs
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| ModelError::UnknownParameterKind(name.to_string()))
    }

    /// Get the definition of a kind
    pub fn get(&self, kind: ParameterKind) -> &ParameterDef {
        &self.defs[kind.index()]
    }

    /// All definitions in registry order
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDef> {
        self.defs.iter()
    }
}

/// Convenience wrapper over the global registry
pub fn resolve(name: &str) -> Result<ParameterKind> {
    ParameterRegistry::global().resolve(name).map(|def| def.kind)
}

/// Health falls by 1 while satiety is below a quarter of `min + max`, by 2 at zero
fn update_health(health: &Parameter, parameters: &ParameterSet) -> f32 {
    let satiety = parameters.get(ParameterKind::Satiety);
    let (min, max) = satiety.range();
    let critical = (min + max) / 4.0;
    let value = satiety.value();

    if 0.0 < value && value < critical {
        health.value() - 1.0
    } else if value == 0.0 {
        health.value() - 2.0
    } else {
        health.value()
    }
}

fn update_satiety(satiety: &Parameter, _parameters: &ParameterSet) -> f32 {
    satiety.value() - 1.0
}

fn keep_value(parameter: &Parameter, _parameters: &ParameterSet) -> f32 {
    parameter.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterTemplate;

    fn set_with_satiety(satiety: f32, health: f32) -> ParameterSet {
        let templates = ParameterKind::ALL.map(|kind| {
            let initial = match kind {
                ParameterKind::Satiety => satiety,
                _ => health,
            };
            ParameterTemplate::with_value(kind, initial, 0.0, 40.0).unwrap()
        });
        ParameterSet::instantiate(&templates, None)
    }

    fn next_health(set: &ParameterSet) -> f32 {
        let def = ParameterRegistry::global().get(ParameterKind::Health);
        (def.update)(set.get(ParameterKind::Health), set)
    }

    #[test]
    fn test_registry_order_matches_kinds() {
        let registry = ParameterRegistry::global();
        let kinds: Vec<_> = registry.iter().map(|def| def.kind).collect();
        assert_eq!(kinds, ParameterKind::ALL.to_vec());

        for def in registry.iter() {
            assert_eq!(def.name, def.kind.name());
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        assert_eq!(resolve("Satiety").unwrap(), ParameterKind::Satiety);
        assert_eq!(resolve("Stamina").unwrap(), ParameterKind::Stamina);

        let err = resolve("Disease").unwrap_err();
        assert_eq!(err, ModelError::UnknownParameterKind("Disease".to_string()));

        // Names are case sensitive
        assert!(resolve("satiety").is_err());
    }

    #[test]
    fn test_health_rule_thresholds() {
        // Satiety bounds (0, 40) → critical threshold 10
        assert_eq!(next_health(&set_with_satiety(25.0, 30.0)), 30.0);
        assert_eq!(next_health(&set_with_satiety(10.0, 30.0)), 30.0);
        assert_eq!(next_health(&set_with_satiety(9.5, 30.0)), 29.0);
        assert_eq!(next_health(&set_with_satiety(1.0, 30.0)), 29.0);
        assert_eq!(next_health(&set_with_satiety(0.0, 30.0)), 28.0);
    }

    #[test]
    fn test_satiety_rule_drains() {
        let set = set_with_satiety(12.0, 30.0);
        let def = ParameterRegistry::global().get(ParameterKind::Satiety);
        assert_eq!((def.update)(set.get(ParameterKind::Satiety), &set), 11.0);
    }

    #[test]
    fn test_idle_rules_keep_value() {
        let set = set_with_satiety(12.0, 30.0);
        for kind in [
            ParameterKind::Fatigue,
            ParameterKind::Hygiene,
            ParameterKind::Mood,
            ParameterKind::Stamina,
        ] {
            let def = ParameterRegistry::global().get(kind);
            assert_eq!((def.update)(set.get(kind), &set), 30.0);
        }
    }
}
