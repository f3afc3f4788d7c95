use gravsim::{bench_render, bench_simulate, render_frame, PlaybackController, Scenario, ScenarioConfig};
use gravsim::visualization::display::draw_frame;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Simulate a few gravitating bodies and scrub through them as ASCII")]
struct Args {
    /// Scenario file; bare names are looked up in the crate's scenarios/ directory
    #[arg(short, default_value = "earth_moon.yaml")]
    file_name: String,

    /// Override the simulated duration (seconds)
    #[arg(long)]
    duration: Option<i64>,

    /// First playback time (seconds)
    #[arg(long, default_value_t = 0)]
    start: i64,

    /// Last playback time (seconds), defaults to the end of the run
    #[arg(long)]
    end: Option<i64>,

    /// Print the frame at --start and exit
    #[arg(long)]
    once: bool,

    /// Run the timing benchmarks instead of playback
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("cannot open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("cannot parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(duration) = args.duration {
        scenario_cfg.parameters.duration = duration;
    }
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.bench {
        bench_simulate(&scenario)?;
        bench_render(&scenario)?;
        return Ok(());
    }

    let log = scenario.simulate().context("simulation failed")?;

    if args.once {
        let frame = render_frame(&log, args.start, &scenario.view)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(draw_frame(&frame, &scenario.view).as_bytes())?;
        return Ok(());
    }

    let end = args.end.unwrap_or(scenario.parameters.duration);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut controller = PlaybackController::new(&log, scenario.view.clone(), scenario.render_step, stdin, stdout);
    controller.playback(args.start, end)?;

    Ok(())
}
