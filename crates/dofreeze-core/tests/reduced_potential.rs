//! End-to-end behavior of `ReducedSpacePotential` over real full-space potentials.

use dofreeze::core::coords::{ConversionError, Space};
use dofreeze::core::potential::{
    Harmonic, LennardJonesCluster, Potential, ReducedPotentialError, ReducedSpacePotential,
};
use dofreeze::engine::config::FreezeConfig;
use dofreeze::workflows::freeze;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-5;

fn assert_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < TOLERANCE, "{x} vs {y}");
    }
}

/// A slightly distorted 2x2x1 grid of LJ atoms.
fn tetramer() -> Vec<f64> {
    vec![
        0.0, 0.0, 0.0, //
        1.12, 0.05, 0.0, //
        0.02, 1.15, 0.1, //
        1.1, 1.1, -0.08,
    ]
}

#[test]
fn reduced_gradient_is_derivative_in_reduced_space_not_full_gradient() {
    let reference = tetramer();
    let potential = ReducedSpacePotential::from_frozen_dof(
        LennardJonesCluster::default(),
        &reference,
        [0, 1, 2, 4],
    )
    .unwrap();
    let reduced = potential.converter().reduced_reference();

    let (energy, gradient) = potential.energy_gradient(&reduced).unwrap();
    let (full_energy, full_gradient) = potential.energy_and_full_gradient(&reduced).unwrap();
    let numeric = potential.numerical_gradient(&reduced, 1e-6).unwrap();

    assert_eq!(energy, full_energy);
    assert_eq!(gradient.len(), potential.ndof_mobile());
    assert_eq!(full_gradient.len(), potential.ndof());
    assert_close(&gradient, &numeric);

    let frozen_force: f64 = potential
        .converter()
        .frozen_dof()
        .iter()
        .map(|&dof| full_gradient[dof].abs())
        .sum();
    assert!(frozen_force > 0.0);

    let projected = potential.converter().reduce(&full_gradient).unwrap();
    assert_eq!(projected, gradient);
}

#[test]
fn reduced_energy_equals_full_energy_at_expanded_point() {
    let reference = tetramer();
    let lj = LennardJonesCluster::default();
    let potential = ReducedSpacePotential::from_frozen_dof(lj, &reference, 3..6).unwrap();
    let reduced: Vec<f64> = potential
        .converter()
        .reduced_reference()
        .iter()
        .map(|x| x + 0.03)
        .collect();

    let full = potential.converter().expand(&reduced).unwrap();
    assert_eq!(potential.energy(&reduced).unwrap(), lj.energy(&full).unwrap());
}

#[test]
fn boxed_dynamic_potential_can_be_wrapped() {
    let dynamic: Box<dyn Potential<Error = ConversionError>> =
        Box::new(Harmonic::new(vec![0.0; 3], 2.0));
    let potential = ReducedSpacePotential::from_frozen_dof(dynamic, &[1.0, 1.0, 1.0], [1]).unwrap();
    let mut gradient = [0.0; 2];
    let energy = potential
        .energy_and_gradient(&[2.0, 0.0], &mut gradient)
        .unwrap();
    assert_eq!(energy, 5.0);
    assert_eq!(gradient, [4.0, 0.0]);
}

#[test]
fn inner_size_errors_surface_as_potential_errors() {
    // The converter's reference has 4 dofs while the harmonic potential expects 3.
    let potential =
        ReducedSpacePotential::from_frozen_dof(Harmonic::new(vec![0.0; 3], 1.0), &[0.0; 4], [0])
            .unwrap();
    let err = potential.energy(&[0.0; 3]).unwrap_err();
    assert!(matches!(
        err,
        ReducedPotentialError::Potential(ConversionError::SizeMismatch {
            space: Space::Full,
            expected: 3,
            found: 4,
        })
    ));
}

#[test]
fn configured_workflow_matches_direct_construction() {
    let config = FreezeConfig::from_toml_str(
        r#"
        reference_coords = [0.0, 0.0, 0.0, 1.12, 0.05, 0.0, 0.02, 1.15, 0.1, 1.1, 1.1, -0.08]
        frozen_atoms = [0, 2]
        "#,
    )
    .unwrap();
    let configured = freeze(LennardJonesCluster::default(), &config).unwrap();
    let direct = ReducedSpacePotential::from_frozen_dof(
        LennardJonesCluster::default(),
        &tetramer(),
        [0, 1, 2, 6, 7, 8],
    )
    .unwrap();

    let reduced = direct.converter().reduced_reference();
    assert_eq!(configured.converter(), direct.converter());
    assert_eq!(
        configured.energy_gradient(&reduced).unwrap(),
        direct.energy_gradient(&reduced).unwrap()
    );
}

proptest! {
    #[test]
    fn harmonic_reduced_gradient_is_mobile_slice_of_full_gradient(
        origin in prop::collection::vec(-5.0..5.0f64, 8),
        frozen in prop::collection::vec(0usize..8, 0..8),
        shift in -2.0..2.0f64,
    ) {
        let potential = ReducedSpacePotential::from_frozen_dof(
            Harmonic::new(origin.clone(), 1.5),
            &vec![0.0; 8],
            frozen,
        )
        .unwrap();
        let reduced = vec![shift; potential.ndof_mobile()];

        let (_, gradient) = potential.energy_gradient(&reduced).unwrap();
        let (_, full_gradient) = potential.energy_and_full_gradient(&reduced).unwrap();

        prop_assert_eq!(gradient.len(), potential.ndof_mobile());
        for (g, &dof) in gradient.iter().zip(potential.converter().mobile_dof()) {
            prop_assert_eq!(*g, full_gradient[dof]);
            prop_assert_eq!(*g, 1.5 * (shift - origin[dof]));
        }
    }
}
