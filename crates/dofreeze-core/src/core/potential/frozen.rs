use super::Potential;
use crate::core::coords::{ConversionError, CoordinateConverter, Space};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum ReducedPotentialError<E> {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Potential(E),
}

/// Presents a full-space potential as a potential over reduced coordinates.
///
/// Reduced coordinates are expanded through the owned [`CoordinateConverter`] before
/// every evaluation, so frozen degrees of freedom always sit at their reference values.
/// Gradients handed back through [`Potential::energy_and_gradient`] are projected onto
/// the mobile degrees of freedom and have length `ndof_mobile()`.
#[derive(Debug, Clone)]
pub struct ReducedSpacePotential<P> {
    potential: P,
    converter: CoordinateConverter,
}

impl<P: Potential> ReducedSpacePotential<P> {
    pub fn new(potential: P, converter: CoordinateConverter) -> Self {
        Self {
            potential,
            converter,
        }
    }

    pub fn from_frozen_dof<I>(
        potential: P,
        reference_coords: &[f64],
        frozen_dof: I,
    ) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = usize>,
    {
        let converter = CoordinateConverter::new(reference_coords, frozen_dof)?;
        Ok(Self::new(potential, converter))
    }

    pub fn converter(&self) -> &CoordinateConverter {
        &self.converter
    }

    pub fn inner(&self) -> &P {
        &self.potential
    }

    pub fn into_inner(self) -> P {
        self.potential
    }

    pub fn ndof(&self) -> usize {
        self.converter.ndof()
    }

    pub fn ndof_mobile(&self) -> usize {
        self.converter.ndof_mobile()
    }

    pub fn ndof_frozen(&self) -> usize {
        self.converter.ndof_frozen()
    }

    /// Evaluates at `reduced` and returns the unprojected gradient of length `ndof()`.
    ///
    /// Entries at frozen dofs hold whatever the underlying potential computed there.
    #[instrument(level = "trace", skip_all, fields(ndof = self.ndof()))]
    pub fn energy_and_full_gradient(
        &self,
        reduced: &[f64],
    ) -> Result<(f64, Vec<f64>), ReducedPotentialError<P::Error>> {
        let full = self.converter.expand(reduced)?;
        let mut full_gradient = vec![0.0; self.ndof()];
        let energy = self
            .potential
            .energy_and_gradient(&full, &mut full_gradient)
            .map_err(ReducedPotentialError::Potential)?;
        Ok((energy, full_gradient))
    }
}

impl<P: Potential> Potential for ReducedSpacePotential<P> {
    type Error = ReducedPotentialError<P::Error>;

    #[instrument(level = "trace", skip_all, fields(ndof_mobile = self.ndof_mobile()))]
    fn energy(&self, reduced: &[f64]) -> Result<f64, Self::Error> {
        let full = self.converter.expand(reduced)?;
        self.potential
            .energy(&full)
            .map_err(ReducedPotentialError::Potential)
    }

    #[instrument(level = "trace", skip_all, fields(ndof_mobile = self.ndof_mobile()))]
    fn energy_and_gradient(
        &self,
        reduced: &[f64],
        gradient: &mut [f64],
    ) -> Result<f64, Self::Error> {
        ConversionError::check_len(Space::Gradient, self.ndof_mobile(), gradient.len())?;
        let (energy, full_gradient) = self.energy_and_full_gradient(reduced)?;
        self.converter.reduce_into(&full_gradient, gradient)?;
        Ok(energy)
    }
}
