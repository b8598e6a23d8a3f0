//! Kind definitions and RON file loading
//!
//! Kinds are plain data: a name and a list of phases. Parameter kinds are
//! referenced by their registered name and resolved when the definition is
//! turned into a [`Kind`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{CreatureAction, PlayerAction};
use crate::error::{ModelError, Result};
use crate::kind::Kind;
use crate::parameter::ParameterTemplate;
use crate::phase::MaturePhase;
use crate::registry;

/// Top-level kind definition loaded from RON files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindDefinition {
    /// Species label
    pub name: String,

    /// Maturity phases, youngest first
    pub phases: Vec<PhaseDefinition>,
}

/// One maturity phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDefinition {
    /// Duration in days
    pub days: u32,

    /// One entry per registered parameter kind
    pub parameters: Vec<ParameterDefinition>,

    #[serde(default)]
    pub player_actions: Vec<PlayerAction>,

    #[serde(default)]
    pub creature_actions: Vec<CreatureAction>,
}

/// Parameter template as written in a kind file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Registered parameter name, e.g. "Satiety"
    pub kind: String,

    /// Starting value; omitted to keep the current value across growth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<f32>,

    pub min: f32,
    pub max: f32,
}

impl KindDefinition {
    /// Parse a definition from RON text
    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| ModelError::Definition(e.to_string()))
    }

    /// Load a definition from a RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ModelError::Definition(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_ron_str(&content).map_err(|e| match e {
            ModelError::Definition(msg) => {
                ModelError::Definition(format!("failed to parse {}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ModelError::Definition(e.to_string()))
    }

    /// Describe an existing kind
    pub fn from_kind(kind: &Kind) -> Self {
        let phases = kind
            .phases()
            .iter()
            .map(|phase| PhaseDefinition {
                days: phase.days(),
                parameters: phase
                    .parameters()
                    .iter()
                    .map(|template| {
                        let (min, max) = template.range();
                        ParameterDefinition {
                            kind: template.kind().name().to_string(),
                            initial: template.initial(),
                            min,
                            max,
                        }
                    })
                    .collect(),
                player_actions: phase.player_actions().to_vec(),
                creature_actions: phase.creature_actions().to_vec(),
            })
            .collect();

        KindDefinition {
            name: kind.name().to_string(),
            phases,
        }
    }
}

impl Kind {
    /// Resolve and validate a definition
    pub fn from_definition(definition: &KindDefinition) -> Result<Kind> {
        let mut phases = Vec::with_capacity(definition.phases.len());
        for phase in &definition.phases {
            let mut templates = Vec::with_capacity(phase.parameters.len());
            for parameter in &phase.parameters {
                let kind = registry::resolve(&parameter.kind)?;
                templates.push(ParameterTemplate::new(
                    kind,
                    parameter.initial,
                    parameter.min,
                    parameter.max,
                )?);
            }
            phases.push(MaturePhase::new(
                phase.days,
                templates,
                phase.player_actions.clone(),
                phase.creature_actions.clone(),
            )?);
        }
        Kind::new(definition.name.clone(), phases)
    }

    /// Load and validate a kind from a RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Kind> {
        Kind::from_definition(&KindDefinition::from_file(path)?)
    }
}
