//! Driver configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `tamago.ron` file (if exists)
//! 3. Environment variables prefixed with `TAMAGO_`
//!
//! Example environment variable: `TAMAGO_SIMULATION__TICKS_PER_DAY=12`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tamago_core::SimulationConfig;

/// Main driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TamagoConfig {
    #[serde(default)]
    pub simulation: SimulationSection,

    #[serde(default)]
    pub care: CareConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Clock and randomness settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Ticks per simulated day
    pub ticks_per_day: u32,
    /// Seed for autonomous creature actions
    pub seed: u64,
    /// Per-tick chance that the creature acts on its own
    pub creature_action_chance: f32,
    /// Days to simulate (stops early at the end of the lifespan)
    pub days: u32,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            ticks_per_day: 24,
            seed: 0,
            creature_action_chance: 0.25,
            days: 30,
        }
    }
}

/// Scripted player behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareConfig {
    /// Feed every N ticks (0 = never)
    pub feed_every_ticks: u64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            feed_every_ticks: 6,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Enable verbose logging
    pub verbose_logging: bool,
}

impl TamagoConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `tamago.ron` file (if exists)
    /// 3. Environment variables prefixed with `TAMAGO_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("simulation.ticks_per_day", 24_i64)?
            .set_default("simulation.seed", 0_i64)?
            .set_default("simulation.creature_action_chance", 0.25)?
            .set_default("simulation.days", 30_i64)?
            .set_default("care.feed_every_ticks", 6_i64)?
            .set_default("debug.verbose_logging", false)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("tamago")
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (TAMAGO_SIMULATION__SEED, etc.)
            .add_source(
                Environment::with_prefix("TAMAGO")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Settings for the core simulation
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            ticks_per_day: self.simulation.ticks_per_day,
            seed: self.simulation.seed,
            creature_action_chance: self.simulation.creature_action_chance,
        }
    }
}
