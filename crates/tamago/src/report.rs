//! Plain-text summary of a headless run

use std::fmt;

use tamago_core::{ActionEvent, Creature, ParameterKind, TickReport};

/// Observed range of one parameter over the run
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSummary {
    pub kind: ParameterKind,
    pub lowest: f32,
    pub highest: f32,
    pub last: f32,
    pub bounds: (f32, f32),
}

/// Everything printed at the end of a run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub kind: String,
    pub name: String,
    pub age: u32,
    pub ticks: usize,
    pub growths: usize,
    pub feedings: usize,
    pub creature_events: usize,
    pub lifespan_complete: bool,
    pub parameters: Vec<ParameterSummary>,
}

impl RunSummary {
    /// Summarize a creature's history plus the tick reports of the run
    pub fn new(creature: &Creature, ticks: &[TickReport], feedings: usize) -> Self {
        let history = creature.history();
        let parameters = ParameterKind::ALL
            .iter()
            .map(|&kind| {
                let series = history.series(kind);
                let current = &creature.parameters()[kind];
                ParameterSummary {
                    kind,
                    lowest: series.iter().copied().fold(current.value(), f32::min),
                    highest: series.iter().copied().fold(current.value(), f32::max),
                    last: current.value(),
                    bounds: current.range(),
                }
            })
            .collect();

        RunSummary {
            kind: creature.kind().name().to_string(),
            name: creature.name().to_string(),
            age: creature.age(),
            ticks: ticks.len(),
            growths: ticks.iter().filter(|t| t.grew).count(),
            feedings,
            creature_events: ticks
                .iter()
                .filter(|t| matches!(t.event, Some(e) if e != ActionEvent::Idle))
                .count(),
            lifespan_complete: ticks.last().is_some_and(|t| t.lifespan_complete),
            parameters,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} (age {})", self.kind, self.name, self.age)?;
        writeln!(
            f,
            "ticks: {}  growths: {}  feedings: {}  own actions: {}{}",
            self.ticks,
            self.growths,
            self.feedings,
            self.creature_events,
            if self.lifespan_complete {
                "  [lifespan complete]"
            } else {
                ""
            }
        )?;
        for p in &self.parameters {
            writeln!(
                f,
                "  {:<8} {:>7.2}  low {:>7.2}  high {:>7.2}  bounds {}..{}",
                p.kind.name(),
                p.last,
                p.lowest,
                p.highest,
                p.bounds.0,
                p.bounds.1
            )?;
        }
        Ok(())
    }
}
