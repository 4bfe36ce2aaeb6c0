const MIN_DISTANCE: f64 = 1e-6;
const CLASH_ENERGY: f64 = 1e10;

#[inline]
pub fn lennard_jones_12_6(dist: f64, r_min: f64, well_depth: f64) -> f64 {
    if dist < MIN_DISTANCE {
        return CLASH_ENERGY;
    }
    let rho = r_min / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    well_depth * (rho12 - 2.0 * rho6)
}

/// Returns `(E, dE/dr)` for the 12-6 potential written in its `r_min` form.
#[inline]
pub fn lennard_jones_12_6_with_derivative(dist: f64, r_min: f64, well_depth: f64) -> (f64, f64) {
    if dist < MIN_DISTANCE {
        return (CLASH_ENERGY, 0.0);
    }
    let rho = r_min / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    let energy = well_depth * (rho12 - 2.0 * rho6);
    let derivative = 12.0 * well_depth * (rho6 - rho12) / dist;
    (energy, derivative)
}

#[inline]
pub fn harmonic(displacement: f64, k: f64) -> f64 {
    0.5 * k * displacement * displacement
}

#[inline]
pub fn harmonic_derivative(displacement: f64, k: f64) -> f64 {
    k * displacement
}
