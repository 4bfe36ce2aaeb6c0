use super::error::ConversionError;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Split of the index range `0..ndof` into frozen and mobile degrees of freedom.
///
/// Both index lists are sorted ascending, free of duplicates, and together cover
/// `0..ndof` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DofPartition {
    ndof: usize,
    frozen: Vec<usize>,
    mobile: Vec<usize>,
}

impl DofPartition {
    /// Builds the partition from an arbitrary collection of frozen indices.
    ///
    /// Duplicates are collapsed and order is irrelevant. Any index `>= ndof` fails with
    /// [`ConversionError::InvalidIndex`].
    pub fn new<I>(ndof: usize, frozen_dof: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = usize>,
    {
        let frozen: Vec<usize> = frozen_dof
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if let Some(&max) = frozen.last() {
            if max >= ndof {
                return Err(ConversionError::InvalidIndex { index: max, ndof });
            }
        }

        let mobile: Vec<usize> = (0..ndof)
            .filter(|i| frozen.binary_search(i).is_err())
            .collect();

        debug!(
            ndof,
            frozen = frozen.len(),
            mobile = mobile.len(),
            "Built degree-of-freedom partition."
        );
        if ndof > 0 && mobile.is_empty() {
            warn!("Every degree of freedom is frozen; the reduced space is empty.");
        }

        Ok(Self {
            ndof,
            frozen,
            mobile,
        })
    }

    /// Builds the partition by freezing whole atoms of `dim` coordinates each.
    ///
    /// Atom `a` owns dofs `dim * a .. dim * a + dim`.
    pub fn from_atoms<I>(ndof: usize, frozen_atoms: I, dim: usize) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = usize>,
    {
        if dim == 0 || ndof % dim != 0 {
            return Err(ConversionError::InvalidDimension { ndof, dim });
        }
        let natoms = ndof / dim;

        let mut frozen_dof = Vec::new();
        for atom in frozen_atoms {
            if atom >= natoms {
                return Err(ConversionError::InvalidIndex {
                    index: atom.saturating_mul(dim),
                    ndof,
                });
            }
            frozen_dof.extend(atom * dim..atom * dim + dim);
        }
        Self::new(ndof, frozen_dof)
    }

    pub fn ndof(&self) -> usize {
        self.ndof
    }

    pub fn ndof_frozen(&self) -> usize {
        self.frozen.len()
    }

    pub fn ndof_mobile(&self) -> usize {
        self.mobile.len()
    }

    pub fn frozen(&self) -> &[usize] {
        &self.frozen
    }

    pub fn mobile(&self) -> &[usize] {
        &self.mobile
    }

    pub fn is_frozen(&self, dof: usize) -> bool {
        self.frozen.binary_search(&dof).is_ok()
    }
}
