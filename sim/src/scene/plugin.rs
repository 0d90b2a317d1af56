//! Bevy plugin that drives an [`IslandScene`] from the frame clock.

use bevy::prelude::*;
use bevy_log::{debug, info};

use super::{IslandScene, SceneConfig, StepSummary};
use crate::sets::SceneSet;

/// Plugin that adds the floating-islands simulation to an app.
///
/// This plugin:
/// - Creates the scene from its config and inserts it as a resource
/// - Steps the scene once per frame in `Update`
/// - Publishes the last step summary for reporting systems
pub struct IslandScenePlugin {
    pub config: SceneConfig,
    /// Mark islands ready immediately (no asset loading to wait for)
    pub islands_ready: bool,
}

impl IslandScenePlugin {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            islands_ready: false,
        }
    }

    pub fn with_islands_ready(mut self, ready: bool) -> Self {
        self.islands_ready = ready;
        self
    }
}

#[derive(Resource, Default, Debug)]
pub struct LastStepSummary(pub Option<StepSummary>);

impl Plugin for IslandScenePlugin {
    fn build(&self, app: &mut App) {
        let mut scene = IslandScene::create(self.config.clone());
        if self.islands_ready {
            scene.mark_all_islands_ready();
        }
        info!(
            "Island scene plugin added ({} islands, ready: {})",
            scene.islands().len(),
            self.islands_ready
        );

        app.insert_resource(scene)
            .init_resource::<LastStepSummary>()
            .configure_sets(
                Update,
                (SceneSet::Simulation, SceneSet::Surface, SceneSet::Report).chain(),
            )
            .add_systems(Update, step_island_scene.in_set(SceneSet::Simulation));
    }
}

fn step_island_scene(
    mut scene: ResMut<IslandScene>,
    mut last_step: ResMut<LastStepSummary>,
    time: Res<Time>,
) {
    let summary = scene.step(time.delta_secs());
    if let Some(report) = summary.separation.as_ref().filter(|r| r.clamped > 0) {
        debug!(
            "Frame {}: {} islands clamped to the boundary",
            summary.frame, report.clamped
        );
    }
    last_step.0 = Some(summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use bevy::time::TimeUpdateStrategy;

    #[test]
    fn test_plugin_steps_scene_each_update() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
            .add_plugins(IslandScenePlugin::new(SceneConfig::default()).with_islands_ready(true));

        app.update();
        app.update();
        app.update();

        let scene = app.world().resource::<IslandScene>();
        assert_eq!(scene.frame(), 3);
        assert!(scene.islands().iter().all(|i| i.ready));
        assert!(app.world().resource::<LastStepSummary>().0.is_some());
    }

    #[test]
    fn test_plugin_publishes_separation_report() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
            .add_plugins(IslandScenePlugin::new(SceneConfig::default()).with_islands_ready(true));
        app.update();

        let summary = app.world().resource::<LastStepSummary>().0.clone();
        let report = summary.and_then(|s| s.separation);
        assert!(report.map(|r| r.overlap_after.len() == 2).unwrap_or(false));

        let scene = app.world().resource::<IslandScene>();
        let boundary = *scene.boundary();
        for island in scene.islands() {
            let d = island.body.position.distance(boundary.center);
            assert!(d <= boundary.radius * 0.98 + 1e-2);
        }
    }
}
