use crate::core::potential::{Potential, ReducedSpacePotential};
use crate::engine::config::FreezeConfig;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{info, instrument};

/// Wraps `potential` so it is driven by the mobile degrees of freedom named in `config`.
#[instrument(level = "info", skip_all, name = "freeze_workflow")]
pub fn freeze<P: Potential>(
    potential: P,
    config: &FreezeConfig,
) -> Result<ReducedSpacePotential<P>, EngineError> {
    let converter = config.converter()?;
    info!(
        ndof = converter.ndof(),
        frozen = converter.ndof_frozen(),
        mobile = converter.ndof_mobile(),
        "Reduced-space potential ready."
    );
    Ok(ReducedSpacePotential::new(potential, converter))
}

pub fn freeze_from_file<P: Potential>(
    potential: P,
    path: &Path,
) -> Result<ReducedSpacePotential<P>, EngineError> {
    let config = FreezeConfig::load(path)?;
    freeze(potential, &config)
}
