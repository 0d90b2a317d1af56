use std::path::PathBuf;
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use sim::sets::SceneSet;
use sim::{IslandScenePlugin, SceneConfig};

pub mod config;
pub mod report;
pub mod snapshot;
pub mod surface;

use config::{apply_overrides, load_scene_config, PresetArg};
use report::{report_progress, RunLimits};
use surface::{displace_ocean_surface, OceanSurface};

/// Side of the square ocean grid in world units.
pub const OCEAN_GRID_SIZE: f32 = 16000.0;

pub const MAX_FPS: f64 = 1000.0;
/// Keeps the flat-shaded grid (6 vertices per cell) within memory.
pub const MAX_GRID_SUBDIVISIONS: u32 = 2048;

/// Everything the command line decides before the scene config is loaded.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config_path: PathBuf,
    pub seed: Option<u64>,
    pub preset: Option<PresetArg>,
    pub frames: u64,
    pub fps: f64,
    pub realtime: bool,
    pub report_every: u64,
    pub snapshot_path: Option<PathBuf>,
    pub grid_subdivisions: u32,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        let run = RunOptions::default();
        Self {
            config_path: PathBuf::from("scene.ron"),
            seed: None,
            preset: None,
            frames: run.frames,
            fps: run.fps,
            realtime: run.realtime,
            report_every: run.report_every,
            snapshot_path: run.snapshot_path,
            grid_subdivisions: run.grid_subdivisions,
        }
    }
}

impl LaunchOptions {
    pub fn validate(&self) -> Result<(), String> {
        if !self.fps.is_finite() || self.fps <= 0.0 || self.fps > MAX_FPS {
            return Err(format!("--fps must be in (0, {MAX_FPS}], got {}", self.fps));
        }
        if self.grid_subdivisions == 0 || self.grid_subdivisions > MAX_GRID_SUBDIVISIONS {
            return Err(format!(
                "--grid-subdivisions must be in [1, {MAX_GRID_SUBDIVISIONS}], got {}",
                self.grid_subdivisions
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: SceneConfig,
    pub frames: u64,
    pub fps: f64,
    /// Pace frames at `fps` instead of running as fast as possible
    pub realtime: bool,
    pub report_every: u64,
    pub snapshot_path: Option<PathBuf>,
    pub grid_subdivisions: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: SceneConfig::default(),
            frames: 600,
            fps: 60.0,
            realtime: false,
            report_every: 60,
            snapshot_path: None,
            grid_subdivisions: 160,
        }
    }
}

fn base_app(fps: f64, realtime: bool) -> App {
    let frame_time = Duration::from_secs_f64(1.0 / fps);
    let wait = if realtime { frame_time } else { Duration::ZERO };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(wait)));

    // Simulated time advances by exactly one frame per update.
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame_time));
    app
}

/// Adds the scene, the ocean surface and the reporting systems.
pub fn add_scene(app: &mut App, options: RunOptions) {
    app.add_plugins(IslandScenePlugin::new(options.config).with_islands_ready(true));
    app.insert_resource(OceanSurface::new(OCEAN_GRID_SIZE, options.grid_subdivisions));
    app.insert_resource(RunLimits {
        frames: options.frames,
        report_every: options.report_every.max(1),
        snapshot_path: options.snapshot_path,
    });

    app.add_systems(
        Update,
        (
            displace_ocean_surface.in_set(SceneSet::Surface),
            report_progress.in_set(SceneSet::Report),
        ),
    );
}

/// Build the app without logging.
pub fn build_app(options: RunOptions) -> App {
    let mut app = base_app(options.fps, options.realtime);
    add_scene(&mut app, options);
    app
}

/// Builds the app with logging installed, then loads the scene config into it.
pub fn launch_app(launch: LaunchOptions) -> Result<App, Box<dyn std::error::Error>> {
    launch.validate()?;

    let mut app = base_app(launch.fps, launch.realtime);
    app.add_plugins(LogPlugin::default());

    let config = match load_scene_config(&launch.config_path) {
        Ok(config) => config,
        Err(err) => {
            error!(
                "Failed to load scene config {}: {}",
                launch.config_path.display(),
                err
            );
            return Err(err);
        }
    };
    let config = apply_overrides(config, launch.seed, launch.preset);
    config.validate()?;

    info!(
        "Running headless scene for {} frames at {} fps",
        launch.frames, launch.fps
    );

    add_scene(
        &mut app,
        RunOptions {
            config,
            frames: launch.frames,
            fps: launch.fps,
            realtime: launch.realtime,
            report_every: launch.report_every,
            snapshot_path: launch.snapshot_path,
            grid_subdivisions: launch.grid_subdivisions,
        },
    );
    Ok(app)
}

pub fn run(launch: LaunchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = launch_app(launch)?;
    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("scene exited with code {code}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::IslandScene;

    #[test]
    fn test_app_steps_scene_and_surface() {
        let mut app = build_app(RunOptions {
            frames: 1000,
            grid_subdivisions: 8,
            ..Default::default()
        });

        for _ in 0..5 {
            app.update();
        }

        let scene = app.world().resource::<IslandScene>();
        assert_eq!(scene.frame(), 5);
        assert!(scene.ocean_time() > 0.0);

        let surface = app.world().resource::<OceanSurface>();
        assert_eq!(surface.base.len(), surface.displaced.len());
        assert!(surface
            .displaced
            .iter()
            .all(|p| p.iter().all(|c| c.is_finite())));
        assert_ne!(surface.base, surface.displaced);
    }

    #[test]
    fn test_launch_installs_logging_before_loading_config() {
        let app = launch_app(LaunchOptions {
            config_path: PathBuf::from("/nonexistent/headless-scene.ron"),
            seed: Some(5),
            grid_subdivisions: 4,
            ..Default::default()
        });
        let app = match app {
            Ok(app) => app,
            Err(err) => panic!("launch failed: {err}"),
        };

        assert!(app.is_plugin_added::<LogPlugin>());
        let scene = app.world().resource::<IslandScene>();
        assert_eq!(scene.config().seed, 5);
        assert!(scene.islands().iter().all(|i| i.ready));
    }

    #[test]
    fn test_launch_options_bounds() {
        assert!(LaunchOptions::default().validate().is_ok());

        let bad_fps = LaunchOptions {
            fps: 0.0,
            ..Default::default()
        };
        assert!(bad_fps.validate().is_err());

        let huge_grid = LaunchOptions {
            grid_subdivisions: 65535,
            ..Default::default()
        };
        assert!(huge_grid.validate().is_err());

        let no_grid = LaunchOptions {
            grid_subdivisions: 0,
            ..Default::default()
        };
        assert!(no_grid.validate().is_err());

        let largest = LaunchOptions {
            grid_subdivisions: MAX_GRID_SUBDIVISIONS,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }
}
