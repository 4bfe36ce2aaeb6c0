use super::error::{ConversionError, Space};
use super::partition::DofPartition;

/// Converts between full coordinates (every degree of freedom) and reduced coordinates
/// (mobile degrees of freedom only).
///
/// Frozen degrees of freedom always read back as their value in the reference
/// configuration captured at construction, whatever the caller passed in.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateConverter {
    reference: Vec<f64>,
    partition: DofPartition,
}

impl CoordinateConverter {
    pub fn new<I>(reference_coords: &[f64], frozen_dof: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = usize>,
    {
        let partition = DofPartition::new(reference_coords.len(), frozen_dof)?;
        Ok(Self {
            reference: reference_coords.to_vec(),
            partition,
        })
    }

    /// Freezes whole atoms of `dim` coordinates each instead of individual dofs.
    pub fn from_frozen_atoms<I>(
        reference_coords: &[f64],
        frozen_atoms: I,
        dim: usize,
    ) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = usize>,
    {
        let partition = DofPartition::from_atoms(reference_coords.len(), frozen_atoms, dim)?;
        Ok(Self {
            reference: reference_coords.to_vec(),
            partition,
        })
    }

    #[inline]
    pub fn ndof(&self) -> usize {
        self.partition.ndof()
    }

    #[inline]
    pub fn ndof_frozen(&self) -> usize {
        self.partition.ndof_frozen()
    }

    #[inline]
    pub fn ndof_mobile(&self) -> usize {
        self.partition.ndof_mobile()
    }

    pub fn frozen_dof(&self) -> &[usize] {
        self.partition.frozen()
    }

    pub fn mobile_dof(&self) -> &[usize] {
        self.partition.mobile()
    }

    pub fn reference_coords(&self) -> &[f64] {
        &self.reference
    }

    pub fn partition(&self) -> &DofPartition {
        &self.partition
    }

    pub fn is_frozen(&self, dof: usize) -> bool {
        self.partition.is_frozen(dof)
    }

    /// The reference configuration seen from the reduced space, the usual starting
    /// point for a reduced-space optimizer.
    pub fn reduced_reference(&self) -> Vec<f64> {
        self.mobile_dof().iter().map(|&dof| self.reference[dof]).collect()
    }

    /// Drops the frozen entries of `full`, keeping mobile entries in ascending dof order.
    pub fn reduce(&self, full: &[f64]) -> Result<Vec<f64>, ConversionError> {
        let mut reduced = vec![0.0; self.ndof_mobile()];
        self.reduce_into(full, &mut reduced)?;
        Ok(reduced)
    }

    pub fn reduce_into(&self, full: &[f64], reduced: &mut [f64]) -> Result<(), ConversionError> {
        ConversionError::check_len(Space::Full, self.ndof(), full.len())?;
        ConversionError::check_len(Space::Reduced, self.ndof_mobile(), reduced.len())?;

        for (out, &dof) in reduced.iter_mut().zip(self.mobile_dof()) {
            *out = full[dof];
        }
        Ok(())
    }

    /// Rebuilds full coordinates from the reference configuration with every mobile
    /// entry replaced by the matching entry of `reduced`.
    pub fn expand(&self, reduced: &[f64]) -> Result<Vec<f64>, ConversionError> {
        ConversionError::check_len(Space::Reduced, self.ndof_mobile(), reduced.len())?;
        let mut full = self.reference.clone();
        self.scatter(reduced, &mut full);
        Ok(full)
    }

    pub fn expand_into(&self, reduced: &[f64], full: &mut [f64]) -> Result<(), ConversionError> {
        ConversionError::check_len(Space::Reduced, self.ndof_mobile(), reduced.len())?;
        ConversionError::check_len(Space::Full, self.ndof(), full.len())?;

        full.copy_from_slice(&self.reference);
        self.scatter(reduced, full);
        Ok(())
    }

    fn scatter(&self, reduced: &[f64], full: &mut [f64]) {
        for (&value, &dof) in reduced.iter().zip(self.mobile_dof()) {
            full[dof] = value;
        }
    }
}
