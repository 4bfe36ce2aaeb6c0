use super::Potential;
use super::potentials;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Coordinate vector of length {0} is not a whole number of 3D atoms")]
    PartialAtom(usize),
    #[error("Gradient buffer of length {found} does not match {expected} coordinates")]
    GradientLength { expected: usize, found: usize },
}

/// Pairwise 12-6 Lennard-Jones energy of a cluster of atoms.
///
/// Coordinates are flat `[x0, y0, z0, x1, y1, z1, ...]`; any number of atoms is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJonesCluster {
    r_min: f64,
    well_depth: f64,
}

impl Default for LennardJonesCluster {
    fn default() -> Self {
        Self::from_sigma_epsilon(1.0, 1.0)
    }
}

impl LennardJonesCluster {
    pub fn new(r_min: f64, well_depth: f64) -> Self {
        Self { r_min, well_depth }
    }

    /// Builds the potential from the conventional `4ε[(σ/r)^12 - (σ/r)^6]` parameters.
    pub fn from_sigma_epsilon(sigma: f64, epsilon: f64) -> Self {
        Self::new(2f64.powf(1.0 / 6.0) * sigma, epsilon)
    }

    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    pub fn well_depth(&self) -> f64 {
        self.well_depth
    }

    fn positions(coords: &[f64]) -> Result<Vec<Point3<f64>>, ClusterError> {
        if coords.len() % 3 != 0 {
            return Err(ClusterError::PartialAtom(coords.len()));
        }
        Ok(coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect())
    }
}

impl Potential for LennardJonesCluster {
    type Error = ClusterError;

    fn energy(&self, coords: &[f64]) -> Result<f64, ClusterError> {
        let positions = Self::positions(coords)?;
        let mut energy = 0.0;
        for (i, p1) in positions.iter().enumerate() {
            for p2 in &positions[i + 1..] {
                let dist = (p1 - p2).norm();
                energy += potentials::lennard_jones_12_6(dist, self.r_min, self.well_depth);
            }
        }
        Ok(energy)
    }

    fn energy_and_gradient(
        &self,
        coords: &[f64],
        gradient: &mut [f64],
    ) -> Result<f64, ClusterError> {
        let positions = Self::positions(coords)?;
        if gradient.len() != coords.len() {
            return Err(ClusterError::GradientLength {
                expected: coords.len(),
                found: gradient.len(),
            });
        }

        let mut forces = vec![Vector3::zeros(); positions.len()];
        let mut energy = 0.0;
        for (i, p1) in positions.iter().enumerate() {
            for (offset, p2) in positions[i + 1..].iter().enumerate() {
                let j = i + 1 + offset;
                let separation = p1 - p2;
                let dist = separation.norm();
                let (pair_energy, d_energy) = potentials::lennard_jones_12_6_with_derivative(
                    dist,
                    self.r_min,
                    self.well_depth,
                );
                energy += pair_energy;
                if d_energy != 0.0 {
                    let pair_gradient = separation * (d_energy / dist);
                    forces[i] += pair_gradient;
                    forces[j] -= pair_gradient;
                }
            }
        }

        for (chunk, g) in gradient.chunks_exact_mut(3).zip(&forces) {
            chunk.copy_from_slice(g.as_slice());
        }
        Ok(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn dimer_at_r_min_sits_at_well_bottom() {
        let lj = LennardJonesCluster::new(1.5, 2.0);
        let (energy, gradient) = lj
            .energy_gradient(&[0.0, 0.0, 0.0, 1.5, 0.0, 0.0])
            .unwrap();
        assert!(f64_approx_equal(energy, -2.0));
        assert!(gradient.iter().all(|g| f64_approx_equal(*g, 0.0)));
    }

    #[test]
    fn sigma_epsilon_form_places_minimum_at_two_to_the_sixth_sigma() {
        let lj = LennardJonesCluster::from_sigma_epsilon(1.0, 1.0);
        assert!(f64_approx_equal(lj.r_min(), 2f64.powf(1.0 / 6.0)));
        assert_eq!(lj, LennardJonesCluster::default());
    }

    #[test]
    fn trimer_energy_sums_all_pairs() {
        let lj = LennardJonesCluster::new(1.0, 1.0);
        let h = 3f64.sqrt() / 2.0;
        let energy = lj
            .energy(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, h, 0.0])
            .unwrap();
        assert!(f64_approx_equal(energy, -3.0));
    }

    #[test]
    fn gradient_matches_numerical_gradient() {
        let lj = LennardJonesCluster::default();
        let coords = [0.0, 0.1, -0.2, 1.2, 0.0, 0.1, 0.4, 1.0, 0.3, -0.5, 0.6, 1.0];
        let (_, analytic) = lj.energy_gradient(&coords).unwrap();
        let numeric = lj.numerical_gradient(&coords, 1e-6).unwrap();
        for (a, n) in analytic.iter().zip(&numeric) {
            assert!((a - n).abs() < 1e-5, "{a} vs {n}");
        }
    }

    #[test]
    fn gradient_sums_to_zero_for_isolated_cluster() {
        let lj = LennardJonesCluster::default();
        let coords = [0.0, 0.0, 0.0, 1.3, 0.2, 0.0, 0.1, 1.1, 0.9];
        let (_, gradient) = lj.energy_gradient(&coords).unwrap();
        for axis in 0..3 {
            let total: f64 = gradient.iter().skip(axis).step_by(3).sum();
            assert!(total.abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_partial_atoms() {
        let lj = LennardJonesCluster::default();
        assert_eq!(lj.energy(&[0.0; 4]), Err(ClusterError::PartialAtom(4)));
    }

    #[test]
    fn rejects_mismatched_gradient_buffer() {
        let lj = LennardJonesCluster::default();
        let mut gradient = [0.0; 3];
        assert_eq!(
            lj.energy_and_gradient(&[0.0; 6], &mut gradient),
            Err(ClusterError::GradientLength {
                expected: 6,
                found: 3
            })
        );
    }
}
