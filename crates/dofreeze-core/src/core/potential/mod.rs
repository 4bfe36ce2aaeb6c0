//! # Potentials
//!
//! Energy evaluators over flat coordinate vectors, and the decorator that drives a
//! full-space evaluator from reduced coordinates.
//!
//! - [`Potential`] - The capability every evaluator exposes: energy, and energy plus gradient
//! - [`frozen`] - [`ReducedSpacePotential`], which freezes a subset of degrees of freedom
//! - [`harmonic`] - Independent springs pulling each coordinate toward an origin
//! - [`lj`] - Pairwise 12-6 Lennard-Jones over a cluster of 3D atoms
//!
//! Gradients are written into caller-provided buffers of the same length as the
//! coordinates, so the same evaluator works for either coordinate space.

pub mod frozen;
pub mod harmonic;
pub mod lj;
pub(crate) mod potentials;

pub use frozen::{ReducedPotentialError, ReducedSpacePotential};
pub use harmonic::Harmonic;
pub use lj::LennardJonesCluster;

pub trait Potential {
    type Error: std::error::Error + Send + Sync + 'static;

    fn energy(&self, coords: &[f64]) -> Result<f64, Self::Error>;

    /// Returns the energy at `coords` and overwrites `gradient` with dE/dx.
    ///
    /// `gradient` must have the same length as `coords`.
    fn energy_and_gradient(
        &self,
        coords: &[f64],
        gradient: &mut [f64],
    ) -> Result<f64, Self::Error>;

    fn energy_gradient(&self, coords: &[f64]) -> Result<(f64, Vec<f64>), Self::Error> {
        let mut gradient = vec![0.0; coords.len()];
        let energy = self.energy_and_gradient(coords, &mut gradient)?;
        Ok((energy, gradient))
    }

    /// Central-difference gradient with step `eps`, for checking analytic gradients.
    fn numerical_gradient(&self, coords: &[f64], eps: f64) -> Result<Vec<f64>, Self::Error> {
        let mut shifted = coords.to_vec();
        let mut gradient = Vec::with_capacity(coords.len());
        for i in 0..coords.len() {
            shifted[i] = coords[i] + eps;
            let forward = self.energy(&shifted)?;
            shifted[i] = coords[i] - eps;
            let backward = self.energy(&shifted)?;
            shifted[i] = coords[i];
            gradient.push((forward - backward) / (2.0 * eps));
        }
        Ok(gradient)
    }
}

impl<P: Potential + ?Sized> Potential for &P {
    type Error = P::Error;

    fn energy(&self, coords: &[f64]) -> Result<f64, Self::Error> {
        (**self).energy(coords)
    }

    fn energy_and_gradient(
        &self,
        coords: &[f64],
        gradient: &mut [f64],
    ) -> Result<f64, Self::Error> {
        (**self).energy_and_gradient(coords, gradient)
    }
}

impl<P: Potential + ?Sized> Potential for Box<P> {
    type Error = P::Error;

    fn energy(&self, coords: &[f64]) -> Result<f64, Self::Error> {
        (**self).energy(coords)
    }

    fn energy_and_gradient(
        &self,
        coords: &[f64],
        gradient: &mut [f64],
    ) -> Result<f64, Self::Error> {
        (**self).energy_and_gradient(coords, gradient)
    }
}
