//! # Coordinate Conversion
//!
//! Maps between the full coordinate space of a system and the reduced space that
//! contains only its mobile degrees of freedom.
//!
//! - [`partition`] - Splits `0..ndof` into sorted frozen and mobile index lists
//! - [`converter`] - Holds the reference configuration and converts vectors both ways
//!
//! ```ignore
//! use dofreeze::core::coords::CoordinateConverter;
//!
//! let converter = CoordinateConverter::new(&[1.0, 2.0, 3.0, 4.0, 5.0], [1, 3])?;
//! assert_eq!(converter.reduce(&[1.0, 2.0, 3.0, 4.0, 5.0])?, vec![1.0, 3.0, 5.0]);
//! assert_eq!(converter.expand(&[10.0, 30.0, 50.0])?, vec![10.0, 2.0, 30.0, 4.0, 50.0]);
//! ```

pub mod converter;
pub mod error;
pub mod partition;

pub use converter::CoordinateConverter;
pub use error::{ConversionError, Space};
pub use partition::DofPartition;
