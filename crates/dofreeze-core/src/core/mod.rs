//! # Core Module
//!
//! Stateless building blocks: the coordinate conversion between full and reduced
//! spaces, and the potential abstraction that evaluates energies over either space.
//!
//! - **Coordinate Conversion** ([`coords`]) - Frozen/mobile partition and the bidirectional converter
//! - **Energy Evaluation** ([`potential`]) - The `Potential` trait, the reduced-space decorator,
//!   and concrete full-space potentials

pub mod coords;
pub mod potential;
