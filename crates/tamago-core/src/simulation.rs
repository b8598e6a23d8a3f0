//! Tick-driven simulation of a single creature
//!
//! Stands in for the real-time timer of an interactive front end: every tick
//! updates the creature, may let it act on its own, and every
//! `ticks_per_day` ticks ages it by one day.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::action::ActionEvent;
use crate::creature::Creature;
use crate::error::{ModelError, Result};
use crate::rng::CreatureRng;

/// Simulation tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Ticks per simulated day (values below 1 are treated as 1)
    pub ticks_per_day: u32,
    /// RNG seed for autonomous actions
    pub seed: u64,
    /// Per-tick probability that the creature tries an action of its own
    pub creature_action_chance: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks_per_day: 24,
            seed: 0,
            creature_action_chance: 0.25,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub age: u32,
    pub grew: bool,
    pub event: Option<ActionEvent>,
    pub lifespan_complete: bool,
}

/// A creature plus the clock and RNG that drive it
pub struct Simulation {
    creature: Creature,
    rng: Xoshiro256StarStar,
    config: SimulationConfig,
    tick: u64,
    lifespan_complete: bool,
}

impl Simulation {
    pub fn new(creature: Creature, config: SimulationConfig) -> Self {
        let config = SimulationConfig {
            ticks_per_day: config.ticks_per_day.max(1),
            ..config
        };
        Self {
            creature,
            rng: Xoshiro256StarStar::seed_from_u64(config.seed),
            config,
            tick: 0,
            lifespan_complete: false,
        }
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks run so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// True once the creature has reached the last day of its kind
    pub fn lifespan_complete(&self) -> bool {
        self.lifespan_complete
    }

    /// Run a player action by name
    pub fn perform(&mut self, action: &str) -> Result<ActionEvent> {
        self.creature.perform_player_action(action)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> Result<TickReport> {
        self.tick += 1;
        self.creature.update();

        let mut event = None;
        if self.rng.check_probability(self.config.creature_action_chance) {
            match self.creature.random_action(&mut self.rng) {
                Ok(e) => event = Some(e),
                // Phases without creature actions simply stay quiet
                Err(ModelError::NoCreatureActions { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        let mut grew = false;
        if !self.lifespan_complete && self.tick % u64::from(self.config.ticks_per_day) == 0 {
            let next_age = self.creature.age() + 1;
            match self.creature.set_age(next_age) {
                Ok(g) => grew = g,
                Err(ModelError::AgeOutOfRange { lifespan, .. }) => {
                    log::info!(
                        "{} reached the end of its {lifespan}-day lifespan",
                        self.creature.name()
                    );
                    self.lifespan_complete = true;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(TickReport {
            tick: self.tick,
            age: self.creature.age(),
            grew,
            event,
            lifespan_complete: self.lifespan_complete,
        })
    }

    /// Run `ticks` ticks, stopping early once the lifespan is complete
    pub fn run(&mut self, ticks: u64) -> Result<Vec<TickReport>> {
        let mut reports = Vec::new();
        for _ in 0..ticks {
            let report = self.step()?;
            reports.push(report);
            if report.lifespan_complete {
                break;
            }
        }
        Ok(reports)
    }

    /// Hand the creature back, ending the simulation
    pub fn into_creature(self) -> Creature {
        self.creature
    }
}
