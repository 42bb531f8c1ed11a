//! headless: run the ant colony simulation without a front-end.
//!
//! Loads a TOML run configuration (or the defaults), optionally scatters
//! obstacles, runs the configured number of ticks and writes
//! `tick_summaries.csv` and `travel_histogram.csv` to the output directory.
//!
//! By default time is simulated: the clock jumps by `tick_interval_ms` after
//! every tick, so a run takes as long as the computation.  `--realtime`
//! switches to the wall clock and sleeps between ticks.
//!
//! ```text
//! RUST_LOG=debug cargo run -p headless -- --config demos/headless/colony.toml --ticks 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use colony_behavior::ObstacleMap;
use colony_core::{ManualClock, Millis, SharedClock, SimRng, SystemClock, Tick};
use colony_output::{CsvWriter, OutputWriter, StatsOutputObserver};
use colony_sim::{SimBuilder, SimConfig, SimObserver, TickSummary};
use colony_stats::AntSimulationStats;

/// Obstacle brushes keep this many cells clear around the nest and food.
const CLEAR_RADIUS_CELLS: u32 = 4;

const SCATTER_STREAM: u64 = 0x0b57;

/// Headless ant colony simulation runner.
#[derive(Parser)]
#[command(name = "headless", version, about = "Headless ant colony simulation")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `total_ticks`.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override `seed`.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the CSV output.
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Pace ticks with the wall clock instead of simulated time.
    #[arg(long)]
    realtime: bool,

    /// Number of 3x3 obstacle brushes to scatter at random.
    #[arg(long, default_value_t = 0)]
    obstacles: usize,
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            let config: SimConfig = toml::from_str(&content)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => {
            info!("no config file provided, using defaults");
            Ok(SimConfig::default())
        }
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Stamp `count` brushes at random cells, away from the nest and food.
fn scatter_obstacles(config: &SimConfig, count: usize) -> ObstacleMap {
    let mut map = ObstacleMap::new(config.cell_size);
    if count == 0 {
        return map;
    }
    let mut rng = SimRng::for_purpose(config.seed, SCATTER_STREAM);
    let grid = config.grid();
    let keep_clear = [config.nest_cell, config.food_cell()];

    let mut placed = 0;
    let mut attempts = 0;
    while placed < count && attempts < count * 20 {
        attempts += 1;
        let (x, y) = rng.cell(config.grid_size);
        let near_target = keep_clear
            .iter()
            .any(|&[cx, cy]| x.abs_diff(cx) <= CLEAR_RADIUS_CELLS && y.abs_diff(cy) <= CLEAR_RADIUS_CELLS);
        if near_target {
            continue;
        }
        map.insert_brush_at(grid.cell_center(x, y));
        placed += 1;
    }
    info!(brushes = placed, cells = map.len(), "obstacles scattered");
    map
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Forwards to the output observer and logs progress every `interval` ticks.
struct Progress<W: OutputWriter> {
    inner:    StatsOutputObserver<W>,
    interval: u64,
}

impl<W: OutputWriter> SimObserver for Progress<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        if summary.tick.0 > 0 && summary.tick.0.is_multiple_of(self.interval) {
            info!(
                tick = %summary.tick,
                pheromones = summary.pheromones,
                trips = summary.trips,
                food = summary.food_delivered,
                avg_ms = format_args!("{:.1}", summary.avg_travel_time_ms),
                "progress"
            );
        }
        self.inner.on_tick_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &AntSimulationStats) {
        self.inner.on_sim_end(final_tick, stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // 1. Config + CLI overrides.
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(ticks) = cli.ticks {
        config.total_ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate().context("invalid configuration")?;

    println!("=== headless: ant colony simulation ===");
    println!(
        "Ants: {}  |  Grid: {}x{} cells of {}  |  Ticks: {}  |  Seed: {}",
        config.ant_count,
        config.grid_size,
        config.grid_size,
        config.cell_size,
        config.total_ticks,
        config.seed,
    );

    // 2. Clock.
    let clock: SharedClock = if cli.realtime {
        SystemClock::shared()
    } else {
        ManualClock::shared(Millis::ZERO).1
    };

    // 3. Build the simulation.
    let obstacles = scatter_obstacles(&config, cli.obstacles);
    let mut sim = SimBuilder::foraging(config.clone())?
        .clock(clock)
        .obstacles(obstacles)
        .build()?;

    // 4. Run.
    let writer = CsvWriter::new(&cli.output)
        .with_context(|| format!("failed to open output directory '{}'", cli.output.display()))?;
    let mut observer = Progress {
        inner:    StatsOutputObserver::new(writer, config.histogram_bin_ms),
        interval: (config.total_ticks / 10).max(1),
    };

    let started = Instant::now();
    sim.run(&mut observer);
    let elapsed = started.elapsed();

    if let Some(e) = observer.inner.take_error() {
        bail!("output error: {e}");
    }

    // 5. Report.
    let stats = &sim.stats;
    println!();
    println!("Finished {} ticks in {:.2?}", sim.current_tick().0, elapsed);
    println!("Trips completed:      {}", stats.get_trips_count());
    println!("Food delivered:       {}", stats.get_food_delivered());
    println!("Average travel time:  {:.1} ms", stats.get_avg_travel_time());
    println!("Total travel time:    {} ms", stats.get_total_travel_time());
    println!("Live pheromones:      {}", sim.pheromones().len());
    println!("Obstacle cells:       {}", sim.obstacles.len());

    let histogram = stats.get_histogram(config.histogram_bin_ms);
    if !histogram.is_empty() {
        println!();
        println!("Travel time histogram ({} ms bins):", config.histogram_bin_ms);
        let widest = histogram.values().copied().max().unwrap_or(1).max(1);
        for (bin, count) in &histogram {
            let bar = "#".repeat(count * 40 / widest);
            println!("  {bin:>8} ms  {count:>5}  {bar}");
        }
    }

    info!(output = %cli.output.display(), "output written");
    Ok(())
}
