use insta::assert_snapshot;
use quantaboard::commands::bell;
use quantaboard::engine::{compute_state, Circuit};

#[test]
fn ground_state_table() {
    let c = Circuit::new(2, 4);
    let psi = compute_state(&c).unwrap();
    assert_snapshot!(psi.to_string(), @r###"
    +1.0000+0.0000i |00⟩  p=1.0000
    +0.0000+0.0000i |01⟩  p=0.0000
    +0.0000+0.0000i |10⟩  p=0.0000
    +0.0000+0.0000i |11⟩  p=0.0000
    "###);
}

#[test]
fn bell_state_table() {
    let psi = compute_state(&bell::circuit().unwrap()).unwrap();
    assert_snapshot!(psi.to_string(), @r###"
    +0.7071+0.0000i |00⟩  p=0.5000
    +0.0000+0.0000i |01⟩  p=0.0000
    +0.0000+0.0000i |10⟩  p=0.0000
    +0.7071+0.0000i |11⟩  p=0.5000
    "###);
}
