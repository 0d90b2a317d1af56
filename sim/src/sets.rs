use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Advance the scene by one frame
    Simulation,
    /// Redisplace caller-owned surface buffers
    Surface,
    Report,
}
