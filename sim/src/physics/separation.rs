//! Positional relaxation that keeps orbiting bodies apart.
//!
//! Each iteration runs three phases in order:
//! 1. symmetric push-apart of every overlapping pair,
//! 2. push-out from immovable exclusion zones,
//! 3. clamp onto `boundary.radius · clamp_fraction`.
//!
//! The clamp runs last, so it can undo a pair separation when the boundary
//! is too small for every body. The boundary always wins in that case.
//! There is no velocity; every frame starts from the current positions.

use bevy::math::Vec3;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{
    BOUNDARY_CLAMP_FRACTION, DEFAULT_SEPARATION_GAP, DEFAULT_SEPARATION_ITERATIONS,
};
use crate::utils::random_unit_vector;

/// Anything the resolver can move.
pub trait Separable {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Exclusion radius around the position
    fn radius(&self) -> f32;
    /// Inactive bodies (e.g. still loading) are neither moved nor pushed against.
    fn is_active(&self) -> bool {
        true
    }
}

/// Plain body with a circular exclusion zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitingBody {
    pub position: Vec3,
    pub radius: f32,
}

impl OrbitingBody {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }
}

impl Separable for OrbitingBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Immovable obstacle. A body is pushed out to `body.radius + min_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub center: Vec3,
    pub min_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereBoundary {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereBoundary {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationParams {
    pub iterations: u32,
    /// Extra spacing on top of the summed radii
    pub gap: f32,
    /// Below this distance two points count as coincident
    pub epsilon: f32,
    /// Length of the random nudge that splits coincident pairs
    pub pair_nudge: f32,
    /// Length of the random nudge away from a coincident zone center
    pub zone_nudge: f32,
    /// Bodies are clamped to `boundary.radius * clamp_fraction`
    pub clamp_fraction: f32,
}

impl Default for SeparationParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_SEPARATION_ITERATIONS,
            gap: DEFAULT_SEPARATION_GAP,
            epsilon: 1e-3,
            pair_nudge: 0.01,
            zone_nudge: 0.02,
            clamp_fraction: BOUNDARY_CLAMP_FRACTION,
        }
    }
}

/// Overlap bookkeeping for one `resolve` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeparationReport {
    pub overlap_before: f32,
    /// Total pairwise overlap measured at the end of each iteration
    pub overlap_after: Vec<f32>,
    pub nudges: u32,
    pub clamped: u32,
}

impl SeparationReport {
    pub fn final_overlap(&self) -> f32 {
        self.overlap_after.last().copied().unwrap_or(self.overlap_before)
    }
}

/// Sum of `max(0, ra + rb + gap - distance)` over active pairs.
pub fn total_overlap<B: Separable>(bodies: &[B], gap: f32) -> f32 {
    let mut total = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        if !a.is_active() {
            continue;
        }
        for b in bodies[i + 1..].iter().filter(|b| b.is_active()) {
            let min_dist = a.radius() + b.radius() + gap;
            total += (min_dist - a.position().distance(b.position())).max(0.0);
        }
    }
    total
}

pub struct SeparationResolver {
    pub params: SeparationParams,
    rng: StdRng,
}

impl SeparationResolver {
    /// The seed only drives the tie-breaking nudges.
    pub fn new(params: SeparationParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn resolve<B: Separable>(
        &mut self,
        bodies: &mut [B],
        zones: &[ExclusionZone],
        boundary: &SphereBoundary,
    ) -> SeparationReport {
        let mut report = SeparationReport {
            overlap_before: total_overlap(bodies, self.params.gap),
            ..Default::default()
        };

        for _ in 0..self.params.iterations {
            self.separate_pairs(bodies, &mut report);
            self.push_out_of_zones(bodies, zones, &mut report);
            self.clamp_to_boundary(bodies, boundary, &mut report);
            report
                .overlap_after
                .push(total_overlap(bodies, self.params.gap));
        }

        report
    }

    fn separate_pairs<B: Separable>(&mut self, bodies: &mut [B], report: &mut SeparationReport) {
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            if !a.is_active() {
                continue;
            }
            for b in tail.iter_mut().filter(|b| b.is_active()) {
                self.separate_pair(a, b, report);
            }
        }
    }

    fn separate_pair<B: Separable>(&mut self, a: &mut B, b: &mut B, report: &mut SeparationReport) {
        let mut offset = a.position() - b.position();
        let mut dist = offset.length();

        if dist < self.params.epsilon {
            let nudge = random_unit_vector(&mut self.rng) * self.params.pair_nudge;
            a.set_position(a.position() + nudge);
            b.set_position(b.position() - nudge);
            offset = a.position() - b.position();
            dist = offset.length();
            report.nudges += 1;
            debug!("Nudged coincident bodies apart (distance now {dist})");
        }

        let min_dist = a.radius() + b.radius() + self.params.gap;
        if dist < min_dist {
            let push = offset.normalize_or_zero() * ((min_dist - dist) * 0.5);
            a.set_position(a.position() + push);
            b.set_position(b.position() - push);
        }
    }

    fn push_out_of_zones<B: Separable>(
        &mut self,
        bodies: &mut [B],
        zones: &[ExclusionZone],
        report: &mut SeparationReport,
    ) {
        for body in bodies.iter_mut().filter(|b| b.is_active()) {
            for zone in zones {
                let mut offset = body.position() - zone.center;
                let mut dist = offset.length();

                if dist < self.params.epsilon {
                    let nudge = random_unit_vector(&mut self.rng) * self.params.zone_nudge;
                    body.set_position(body.position() + nudge);
                    offset = body.position() - zone.center;
                    dist = offset.length();
                    report.nudges += 1;
                    debug!("Nudged body off an exclusion zone center (distance now {dist})");
                }

                let min_dist = body.radius() + zone.min_distance;
                if dist < min_dist {
                    body.set_position(body.position() + offset.normalize_or_zero() * (min_dist - dist));
                }
            }
        }
    }

    fn clamp_to_boundary<B: Separable>(
        &self,
        bodies: &mut [B],
        boundary: &SphereBoundary,
        report: &mut SeparationReport,
    ) {
        let max_r = boundary.radius * self.params.clamp_fraction;
        for body in bodies.iter_mut().filter(|b| b.is_active()) {
            let offset = body.position() - boundary.center;
            let d = offset.length();
            if d > max_r {
                body.set_position(boundary.center + offset / d * max_r);
                report.clamped += 1;
            }
        }
    }
}
