use std::path::PathBuf;

use clap::Parser;
use headless::config::PresetArg;
use headless::{run, LaunchOptions};

#[derive(Parser, Debug)]
#[command(version, about = "Runs the floating islands scene without a window", long_about = None)]
struct Args {
    /// RON scene config
    #[arg(short, long, default_value = "scene.ron")]
    config: PathBuf,

    /// Number of frames to simulate before exiting
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Pace frames in real time
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Overrides the config seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Picks a fresh random seed, ignored when --seed is given
    #[arg(long, default_value_t = false)]
    random_seed: bool,

    #[arg(short, long, value_enum)]
    preset: Option<PresetArg>,

    /// Where to write the final scene snapshot
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Ocean grid cells per side, at most 2048
    #[arg(long, default_value_t = 160)]
    grid_subdivisions: u32,
}

fn main() {
    let args = Args::parse();

    let launch = LaunchOptions {
        config_path: args.config,
        seed: args
            .seed
            .or_else(|| args.random_seed.then(rand::random::<u64>)),
        preset: args.preset,
        frames: args.frames,
        fps: args.fps,
        realtime: args.realtime,
        report_every: args.report_every,
        snapshot_path: args.snapshot,
        grid_subdivisions: args.grid_subdivisions,
    };

    if let Err(err) = launch.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    if let Err(err) = run(launch) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
