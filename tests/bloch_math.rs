use quantaboard::engine::{bloch, compute_state, Circuit, QubitState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

const TOL: f64 = 1e-6;

#[test]
fn angle_round_trip_over_random_pairs() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..50 {
        let theta = rng.gen_range(0.0..PI);
        let phi = rng.gen_range(-PI..PI);
        let b = bloch(&QubitState::from_angles(theta, phi));
        assert!((b.theta - theta).abs() < TOL, "theta {theta} → {}", b.theta);
        // phi is meaningless at the poles; everywhere else it must survive
        if theta > 1e-3 {
            assert!((b.phi - phi).abs() < TOL, "phi {phi} → {}", b.phi);
        }
    }
}

#[test]
fn radius_is_one_for_normalized_states() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    for _ in 0..50 {
        let theta = rng.gen_range(0.0..PI);
        let phi = rng.gen_range(-PI..PI);
        let b = bloch(&QubitState::from_angles(theta, phi));
        let r = (b.x * b.x + b.y * b.y + b.z * b.z).sqrt();
        assert!((r - 1.0).abs() < TOL, "r = {r}");
    }
}

#[test]
fn equator_state_has_zero_z() {
    let b = bloch(&QubitState::from_angles(PI / 2.0, 0.0));
    assert!((b.x - 1.0).abs() < TOL);
    assert!(b.y.abs() < TOL);
    assert!(b.z.abs() < TOL);
}

#[test]
fn marginal_of_bell_state_sits_at_sphere_center_axis() {
    let mut c = Circuit::new(2, 4);
    c.place(0, 0, "H").unwrap();
    c.place(0, 1, "CNOT").unwrap();
    let psi = compute_state(&c).unwrap();
    assert_eq!(psi.qubit_marginal(0).map(|(p0, p1)| ((p0 * 2.0).round(), (p1 * 2.0).round())).unwrap(), (1.0, 1.0));

    // the phase-free reduction puts the widget on the equator
    let q = QubitState::from_marginal(&psi, 0).unwrap();
    let b = bloch(&q);
    assert!(b.z.abs() < TOL);
}
