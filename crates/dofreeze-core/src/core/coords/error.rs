use std::fmt;
use thiserror::Error;

/// The coordinate space a vector was expected to live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    Full,
    Reduced,
    Gradient,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Full => write!(f, "full"),
            Space::Reduced => write!(f, "reduced"),
            Space::Gradient => write!(f, "gradient"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Frozen degree of freedom {index} is out of range for a system with {ndof} degrees of freedom")]
    InvalidIndex { index: usize, ndof: usize },

    #[error("Cannot group {ndof} degrees of freedom into atoms of dimension {dim}")]
    InvalidDimension { ndof: usize, dim: usize },

    #[error("Expected a {space} vector of length {expected}, found length {found}")]
    SizeMismatch {
        space: Space,
        expected: usize,
        found: usize,
    },
}

impl ConversionError {
    pub(crate) fn check_len(space: Space, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::SizeMismatch {
                space,
                expected,
                found,
            })
        }
    }
}
