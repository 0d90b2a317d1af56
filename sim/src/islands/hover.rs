use serde::{Deserialize, Serialize};

use super::placement::Island;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverParams {
    /// Vertical drift added per frame at the peak of the bob
    pub bob_amplitude: f32,
    /// Yaw speed in radians per second
    pub yaw_rate: f32,
    pub pitch_amplitude: f32,
    pub roll_amplitude: f32,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            bob_amplitude: 0.10,
            yaw_rate: 0.05,
            pitch_amplitude: 0.02,
            roll_amplitude: 0.015,
        }
    }
}

/// Gentle bob, slow yaw and a small pitch/roll sway.
///
/// `clock` is the orbit clock; islands sharing an `index mod 3` bob at the same rate.
pub fn apply_hover(island: &mut Island, index: usize, clock: f32, dt: f32, params: &HoverParams) {
    let rate = 0.5 + (index % 3) as f32 * 0.2;
    let i = index as f32;

    island.body.position.y += (clock * rate + island.phase).sin() * params.bob_amplitude;
    island.rotation.y += params.yaw_rate * dt;
    island.rotation.x = (clock * 0.5 + i).sin() * params.pitch_amplitude;
    island.rotation.z = (clock * 0.4 + i).cos() * params.roll_amplitude;
}
