//! Color Patches
//!
//! Opinion diffusion on a 2D lattice: every tick, each cell adopts the
//! majority opinion among its neighbors (ties broken at random) with a
//! configurable probability. Runs headless and writes JSON snapshots for
//! an external visualization harness.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_patches::config::{Config, DEFAULT_TUNING_PATH};
use color_patches::model::ColorPatches;
use color_patches::output::{
    generate_snapshot, portray_grid, state_count_summary, write_current_state,
    write_snapshot_to_dir, SnapshotGenerator,
};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "color_patches")]
#[command(about = "An opinion diffusion lattice simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Number of distinct opinions (1..=16)
    #[arg(long)]
    num_opinions: Option<usize>,

    /// Probability of adopting the polled majority opinion per tick
    #[arg(long)]
    adopt_probability: Option<f64>,

    /// Radius of opinion polling
    #[arg(long)]
    radius: Option<usize>,

    /// Interval between lattice snapshots (in ticks)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Path to the tuning file
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: String,

    /// Output the initial lattice portrayal as JSON
    #[arg(long)]
    output_initial_state: bool,
}

impl Args {
    /// Fold CLI overrides into the tuning-file configuration.
    fn apply_to(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.run.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.run.default_ticks = ticks;
        }
        if let Some(interval) = self.snapshot_interval {
            config.run.snapshot_interval = interval;
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(num_opinions) = self.num_opinions {
            config.grid.num_opinions = num_opinions;
        }
        if let Some(probability) = self.adopt_probability {
            config.grid.adopt_probability = probability;
        }
        if let Some(radius) = self.radius {
            config.grid.radius = radius;
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_patches=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = Config::load_or_default_from(&args.tuning);
    args.apply_to(&mut config);

    println!("Color Patches");
    println!("=============");
    println!("Seed: {}", config.run.seed);
    println!("Ticks: {}", config.run.default_ticks);
    println!(
        "Grid: {}x{}, {} opinions, p={}, radius={}",
        config.grid.width,
        config.grid.height,
        config.grid.num_opinions,
        config.grid.adopt_probability,
        config.grid.radius
    );
    println!("Snapshot interval: {}", config.run.snapshot_interval);
    println!();

    fs::create_dir_all("output/snapshots").unwrap_or_else(|e| {
        eprintln!("Warning: Could not create output directories: {}", e);
    });

    let rng = SmallRng::seed_from_u64(config.run.seed);
    let mut model = match ColorPatches::new(&config.grid, rng) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Invalid parameters: {}", e);
            std::process::exit(1);
        }
    };

    let mut generator = SnapshotGenerator::new(config.run.snapshot_interval);

    if args.output_initial_state {
        output_initial_state(&model);
    }

    let initial_snapshot = generate_snapshot(&model, &mut generator, "simulation_start");
    if let Err(e) = write_snapshot_to_dir(&initial_snapshot) {
        eprintln!("Warning: Could not write initial snapshot: {}", e);
    }
    if let Err(e) = write_current_state(&initial_snapshot) {
        eprintln!("Warning: Could not write current state: {}", e);
    } else {
        println!("Wrote initial snapshot (tick 0)");
    }

    println!();
    println!("Starting simulation...");
    println!();

    for _ in 0..config.run.default_ticks {
        model.step();
        let tick = model.tick();

        if tick % 10 == 0 {
            println!("[Tick {:>4}] {}", tick, state_count_summary(&model));
        }

        if generator.should_snapshot(tick) {
            let snapshot = generate_snapshot(&model, &mut generator, "periodic");
            if let Err(e) = write_snapshot_to_dir(&snapshot) {
                eprintln!("Warning: Could not write snapshot at tick {}: {}", tick, e);
            }
            if let Err(e) = write_current_state(&snapshot) {
                eprintln!("Warning: Could not write current state at tick {}: {}", tick, e);
            }
            generator.mark_snapshot(tick);
        }
    }

    let final_snapshot = generate_snapshot(&model, &mut generator, "simulation_end");
    if let Err(e) = write_snapshot_to_dir(&final_snapshot) {
        eprintln!("Warning: Could not write final snapshot: {}", e);
    }
    if let Err(e) = write_current_state(&final_snapshot) {
        eprintln!("Warning: Could not write final current state: {}", e);
    }

    println!();
    println!(
        "Simulation complete. Ran {} ticks, final count {}.",
        model.tick(),
        state_count_summary(&model)
    );
    println!("Generated {} snapshots.", generator.snapshot_count());
}

/// Write the initial lattice portrayal as JSON
fn output_initial_state(model: &ColorPatches) {
    println!();
    println!("Outputting initial lattice state...");

    let portrayals = portray_grid(model);
    match serde_json::to_string_pretty(&portrayals) {
        Ok(json) => {
            let path = "output/initial_grid.json";
            if let Err(e) = fs::write(path, json) {
                eprintln!("  Warning: Could not write initial state: {}", e);
            } else {
                println!("  Wrote {}", path);
            }
        }
        Err(e) => eprintln!("  Warning: Could not serialize initial state: {}", e),
    }
}
