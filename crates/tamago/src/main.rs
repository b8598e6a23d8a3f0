use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tamago::{RunSummary, TamagoConfig};
use tamago_core::{Creature, Kind, KindDefinition, ModelError, Simulation, kinds};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Kind definition file (RON); defaults to the built-in kind
    #[arg(long)]
    kind: Option<PathBuf>,

    /// Built-in kind to use when no file is given
    #[arg(long, default_value = "cube")]
    builtin: String,

    /// Creature name
    #[arg(long, default_value = "Yasha")]
    name: String,

    /// Days to simulate
    #[arg(long)]
    days: Option<u32>,

    /// Ticks per simulated day
    #[arg(long)]
    ticks_per_day: Option<u32>,

    /// Seed for autonomous creature actions
    #[arg(long)]
    seed: Option<u64>,

    /// Feed every N ticks (0 = never)
    #[arg(long)]
    feed_every: Option<u64>,

    /// Print the resolved kind definition as RON and exit
    #[arg(long)]
    dump_kind: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TamagoConfig::load()?;
    if let Some(days) = args.days {
        config.simulation.days = days;
    }
    if let Some(ticks) = args.ticks_per_day {
        config.simulation.ticks_per_day = ticks;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(every) = args.feed_every {
        config.care.feed_every_ticks = every;
    }
    config.debug.verbose_logging |= args.verbose;

    let level = if config.debug.verbose_logging {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let kind = load_kind(&args)?;

    if args.dump_kind {
        let ron = KindDefinition::from_kind(&kind)
            .to_ron_string()
            .context("Failed to serialize kind definition")?;
        println!("{ron}");
        return Ok(());
    }

    log::info!(
        "Raising {} the {} for {} days ({} ticks/day, seed {})",
        args.name,
        kind.name(),
        config.simulation.days,
        config.simulation.ticks_per_day,
        config.simulation.seed
    );

    let creature = Creature::new(Arc::new(kind), args.name.as_str());
    let mut sim = Simulation::new(creature, config.simulation_config());
    let total_ticks =
        u64::from(config.simulation.days) * u64::from(sim.config().ticks_per_day);

    let mut ticks = Vec::new();
    let mut feedings = 0;
    for _ in 0..total_ticks {
        let report = sim.step()?;
        ticks.push(report);
        if report.grew {
            log::info!(
                "{} grew up at age {} (phase {})",
                sim.creature().name(),
                report.age,
                sim.creature().phase_index()
            );
        }
        if report.lifespan_complete {
            break;
        }

        let every = config.care.feed_every_ticks;
        if every > 0 && report.tick % every == 0 {
            match sim.perform("Feed") {
                Ok(event) => {
                    feedings += 1;
                    log::debug!("tick {}: {event}", report.tick);
                }
                Err(ModelError::UnknownAction(_)) => {
                    log::warn!("No feed action available at age {}", report.age);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    print!("{}", RunSummary::new(sim.creature(), &ticks, feedings));
    Ok(())
}

fn load_kind(args: &Args) -> Result<Kind> {
    match &args.kind {
        Some(path) => Kind::from_file(path)
            .with_context(|| format!("Failed to load kind file: {}", path.display())),
        None => kinds::builtin(&args.builtin)
            .with_context(|| {
                format!(
                    "Unknown built-in kind {:?} (available: {})",
                    args.builtin,
                    kinds::BUILTIN_NAMES.join(", ")
                )
            })?
            .context("Built-in kind failed validation"),
    }
}
