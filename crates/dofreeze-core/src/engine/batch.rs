use crate::core::potential::Potential;
use rayon::prelude::*;
use tracing::instrument;

/// Evaluates the energy of every configuration in parallel.
///
/// Results come back in input order. When several configurations fail, the error of
/// the earliest one is returned.
#[instrument(level = "debug", skip_all, fields(configurations = configurations.len()))]
pub fn evaluate_energies<P, C>(potential: &P, configurations: &[C]) -> Result<Vec<f64>, P::Error>
where
    P: Potential + Sync,
    C: AsRef<[f64]> + Sync,
{
    let results: Vec<Result<f64, P::Error>> = configurations
        .par_iter()
        .map(|coords| potential.energy(coords.as_ref()))
        .collect();
    results.into_iter().collect()
}

/// Parallel counterpart of [`Potential::energy_gradient`] over many configurations.
#[instrument(level = "debug", skip_all, fields(configurations = configurations.len()))]
pub fn evaluate_energies_and_gradients<P, C>(
    potential: &P,
    configurations: &[C],
) -> Result<Vec<(f64, Vec<f64>)>, P::Error>
where
    P: Potential + Sync,
    C: AsRef<[f64]> + Sync,
{
    let results: Vec<Result<(f64, Vec<f64>), P::Error>> = configurations
        .par_iter()
        .map(|coords| potential.energy_gradient(coords.as_ref()))
        .collect();
    results.into_iter().collect()
}
