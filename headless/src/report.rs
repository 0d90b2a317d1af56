use std::path::PathBuf;

use bevy::prelude::*;
use sim::scene::LastStepSummary;
use sim::IslandScene;

use crate::snapshot::save_snapshot;
use crate::surface::OceanSurface;

#[derive(Resource, Debug, Clone)]
pub struct RunLimits {
    pub frames: u64,
    pub report_every: u64,
    pub snapshot_path: Option<PathBuf>,
}

pub fn report_progress(
    last_step: Res<LastStepSummary>,
    limits: Res<RunLimits>,
    scene: Res<IslandScene>,
    surface: Res<OceanSurface>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(summary) = &last_step.0 else {
        return;
    };

    if summary.frame % limits.report_every == 0 {
        let overlap = summary
            .separation
            .as_ref()
            .map(|report| report.final_overlap())
            .unwrap_or(0.0);
        info!(
            "frame {} | ocean t={:.2}s | sky blend {:.2} | sun {:.2} moon {:.2} | overlap {:.1} | surface y {:?}",
            summary.frame,
            summary.ocean_time,
            summary.sky.blend,
            summary.sky.sun_intensity,
            summary.sky.moon_intensity,
            overlap,
            surface.sample_height(),
        );
    }

    if summary.frame < limits.frames {
        return;
    }

    if let Some(path) = &limits.snapshot_path {
        if let Err(err) = save_snapshot(&scene.snapshot(), path) {
            error!("Failed to save snapshot to {}: {}", path.display(), err);
            exit.write(AppExit::error());
            return;
        }
    }

    info!("Finished after {} frames", summary.frame);
    exit.write(AppExit::Success);
}
