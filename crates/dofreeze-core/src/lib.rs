//! # dofreeze
//!
//! Frozen degrees of freedom for energy evaluation: a reversible mapping between the
//! full coordinate space of a physical system and the reduced space of its mobile
//! degrees of freedom, plus a decorator that lets any full-space potential be driven
//! from reduced coordinates.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The frozen/mobile partition, the `CoordinateConverter`,
//!   the `Potential` trait, and the `ReducedSpacePotential` decorator.
//!
//! - **[`engine`]: Plumbing.** Freeze configuration (builder and TOML files), parallel
//!   batch evaluation, and the engine error type.
//!
//! - **[`workflows`]: The Public API.** One call from a potential and a configuration
//!   to a ready reduced-space potential.
//!
//! Frozen degrees of freedom always read back as their reference value. Gradients
//! returned in reduced space have one entry per mobile degree of freedom.

pub mod core;
pub mod engine;
pub mod workflows;
