//! Sun and moon orbits and the sky colours they drive.

pub mod day_night;
pub mod orbit;

pub use day_night::{blend_factor, light_intensities, DayNightBlend, SkyPalette, SkyState};
pub use orbit::{CelestialFrame, CelestialOrbit, OrbitConfig};
