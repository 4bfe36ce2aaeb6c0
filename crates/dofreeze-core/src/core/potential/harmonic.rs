use super::Potential;
use super::potentials;
use crate::core::coords::{ConversionError, Space};

/// Independent springs of stiffness `k` pulling each coordinate toward `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Harmonic {
    origin: Vec<f64>,
    k: f64,
}

impl Harmonic {
    pub fn new(origin: Vec<f64>, k: f64) -> Self {
        Self { origin, k }
    }

    pub fn ndof(&self) -> usize {
        self.origin.len()
    }
}

impl Potential for Harmonic {
    type Error = ConversionError;

    fn energy(&self, coords: &[f64]) -> Result<f64, ConversionError> {
        ConversionError::check_len(Space::Full, self.ndof(), coords.len())?;
        Ok(coords
            .iter()
            .zip(&self.origin)
            .map(|(x, x0)| potentials::harmonic(x - x0, self.k))
            .sum())
    }

    fn energy_and_gradient(
        &self,
        coords: &[f64],
        gradient: &mut [f64],
    ) -> Result<f64, ConversionError> {
        ConversionError::check_len(Space::Full, self.ndof(), coords.len())?;
        ConversionError::check_len(Space::Gradient, self.ndof(), gradient.len())?;

        let mut energy = 0.0;
        for ((g, x), x0) in gradient.iter_mut().zip(coords).zip(&self.origin) {
            energy += potentials::harmonic(x - x0, self.k);
            *g = potentials::harmonic_derivative(x - x0, self.k);
        }
        Ok(energy)
    }
}
