use bevy::math::Vec3;
use rand::Rng;

/// Uniformly distributed point on the unit sphere (Marsaglia's method).
pub fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    loop {
        let u: f32 = rng.gen_range(-1.0..1.0);
        let v: f32 = rng.gen_range(-1.0..1.0);
        let s = u * u + v * v;
        if s >= 1.0 || s == 0.0 {
            continue;
        }
        let factor = (1.0 - s).sqrt();
        return Vec3::new(2.0 * u * factor, 1.0 - 2.0 * s, 2.0 * v * factor);
    }
}

pub fn is_finite_vec3(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_unit_vector_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-4, "got length {}", v.length());
        }
    }

    #[test]
    fn random_unit_vector_is_seed_deterministic() {
        let a = random_unit_vector(&mut StdRng::seed_from_u64(42));
        let b = random_unit_vector(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
