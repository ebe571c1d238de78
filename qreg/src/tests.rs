//! Testes integrados para qreg

use crate::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

const TOL: f64 = 1e-9;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_ground_state_construction() {
    let reg = QubitRegister::new(3, 2).unwrap();

    assert_eq!(reg.dim(), 8);
    assert!((reg.amplitudes()[0].re - 1.0).abs() < TOL);
    for amp in &reg.amplitudes()[1..] {
        assert!(amp.norm_sqr() < TOL);
    }
    assert_eq!(reg.cbits(), &[0, 0]);
}

#[test]
fn test_invalid_dimension() {
    assert!(matches!(
        QubitRegister::new(0, 0),
        Err(RegisterError::InvalidDimension(0))
    ));
}

#[test]
fn test_qubit_index_out_of_range() {
    let mut reg = QubitRegister::new(2, 0).unwrap();

    assert!(matches!(
        reg.apply(Gate::X, 2),
        Err(RegisterError::QubitIndexOutOfRange { index: 2, .. })
    ));
    assert!(matches!(
        reg.measure(2, None, &mut seeded(0)),
        Err(RegisterError::QubitIndexOutOfRange { index: 2, .. })
    ));
    assert!(matches!(
        reg.probability_of_one(5),
        Err(RegisterError::QubitIndexOutOfRange { index: 5, .. })
    ));
}

#[test]
fn test_classical_bit_out_of_range_leaves_state_intact() {
    let mut reg = QubitRegister::new(1, 1).unwrap();
    reg.x(0).unwrap();

    let result = reg.measure(0, Some(3), &mut seeded(0));
    assert!(matches!(
        result,
        Err(RegisterError::ClassicalBitIndexOutOfRange { index: 3, .. })
    ));

    // validação antes de qualquer escrita: amplitudes intactas
    assert!((reg.amplitudes()[1].re - 1.0).abs() < TOL);
    assert_eq!(reg.cbits(), &[0]);
}

#[test]
fn test_invalid_gate_arguments() {
    let mut reg = QubitRegister::new(2, 0).unwrap();

    assert!(matches!(
        reg.cx(1, 1),
        Err(RegisterError::InvalidGateArguments {
            control: 1,
            target: 1
        })
    ));
    assert!(matches!(
        reg.cx(0, 7),
        Err(RegisterError::InvalidGateArguments { .. })
    ));
    assert!(matches!(
        reg.swap(0, 0),
        Err(RegisterError::InvalidGateArguments { .. })
    ));
}

#[test]
fn test_endianness_x_on_qubit_zero() {
    // qubit 0 é o bit menos significativo do índice base
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.x(0).unwrap();

    assert!((reg.amplitudes()[1].re - 1.0).abs() < TOL);
    assert_eq!(reg.state_data().basis_label(1), "01");
    assert_eq!(reg.state_data().basis_label(2), "10");
}

#[test]
fn test_x_twice_is_identity() {
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.x(1).unwrap().x(1).unwrap();

    assert!((reg.amplitudes()[0].re - 1.0).abs() < TOL);
    assert!(reg.amplitudes()[2].norm_sqr() < TOL);
}

#[test]
fn test_h_twice_is_identity() {
    let mut reg = QubitRegister::new(1, 0).unwrap();
    reg.h(0).unwrap().h(0).unwrap();

    assert!((reg.amplitudes()[0].re - 1.0).abs() < TOL);
    assert!(reg.amplitudes()[1].norm_sqr() < TOL);
}

#[test]
fn test_y_gate_phase() {
    let mut reg = QubitRegister::new(1, 0).unwrap();
    reg.y(0).unwrap();

    // Y|0⟩ = i|1⟩
    assert!(reg.amplitudes()[1].re.abs() < TOL);
    assert!((reg.amplitudes()[1].im - 1.0).abs() < TOL);
}

#[test]
fn test_z_and_s_phases() {
    let mut reg = QubitRegister::new(1, 0).unwrap();
    reg.x(0).unwrap().z(0).unwrap();
    // Z|1⟩ = -|1⟩
    assert!((reg.amplitudes()[1].re + 1.0).abs() < TOL);

    let mut reg = QubitRegister::new(1, 0).unwrap();
    reg.x(0).unwrap().s(0).unwrap();
    // S|1⟩ = i|1⟩
    assert!((reg.amplitudes()[1].im - 1.0).abs() < TOL);
}

#[test]
fn test_normalization_after_gate_chain() {
    let mut reg = QubitRegister::new(3, 0).unwrap();
    reg.h(0)
        .unwrap()
        .h(1)
        .unwrap()
        .h(2)
        .unwrap()
        .t(0)
        .unwrap()
        .s(1)
        .unwrap()
        .rx(0.7, 2)
        .unwrap()
        .cx(0, 1)
        .unwrap()
        .cz(1, 2)
        .unwrap()
        .ry(1.1, 0)
        .unwrap()
        .rz(-0.4, 1)
        .unwrap()
        .swap(0, 2)
        .unwrap()
        .p(PI / 7.0, 1)
        .unwrap();

    assert!((reg.total_probability() - 1.0).abs() < TOL);
    assert!(reg.is_normalized());
}

#[test]
fn test_cnot_truth_table() {
    // controle = qubit 0 (LSB), alvo = qubit 1
    let cases = [(0usize, 0usize), (1, 3), (2, 2), (3, 1)];

    for (input, expected) in cases {
        let mut reg = QubitRegister::new(2, 0).unwrap();
        if input & 1 != 0 {
            reg.x(0).unwrap();
        }
        if input & 2 != 0 {
            reg.x(1).unwrap();
        }

        reg.cx(0, 1).unwrap();

        assert!(
            (reg.amplitudes()[expected].re - 1.0).abs() < TOL,
            "entrada {input} deveria mapear para {expected}"
        );
    }
}

#[test]
fn test_controlled_gate_leaves_control_zero_untouched() {
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.cx(0, 1).unwrap();

    assert!((reg.amplitudes()[0].re - 1.0).abs() < TOL);
}

#[test]
fn test_swap_moves_amplitude() {
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.x(0).unwrap().swap(0, 1).unwrap();

    assert!((reg.amplitudes()[2].re - 1.0).abs() < TOL);
    assert!(reg.amplitudes()[1].norm_sqr() < TOL);
}

#[test]
fn test_ground_state_always_measures_zero() {
    for seed in 0..50 {
        let mut reg = QubitRegister::new(2, 1).unwrap();
        let outcome = reg.measure(0, Some(0), &mut seeded(seed)).unwrap();

        assert_eq!(outcome, 0);
        assert_eq!(reg.cbits(), &[0]);
    }
}

#[test]
fn test_measurement_records_classical_bit() {
    let mut reg = QubitRegister::new(1, 2).unwrap();
    reg.x(0).unwrap();

    let outcome = reg.measure(0, Some(1), &mut seeded(0)).unwrap();

    assert_eq!(outcome, 1);
    assert_eq!(reg.cbits(), &[0, 1]);
}

#[test]
fn test_measurement_collapses_and_renormalizes() {
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.h(0).unwrap().h(1).unwrap();

    let outcome = reg.measure(0, None, &mut seeded(7)).unwrap();

    assert!((reg.total_probability() - 1.0).abs() < TOL);
    let p1 = reg.probability_of_one(0).unwrap();
    assert!((p1 - f64::from(outcome)).abs() < TOL);
}

#[test]
fn test_idempotent_remeasurement() {
    let mut reg = QubitRegister::new(1, 0).unwrap();
    reg.h(0).unwrap();

    let first = reg.measure(0, None, &mut seeded(1)).unwrap();

    // sem portas intermediárias, o resultado repete para qualquer rng
    for seed in 0..10 {
        let again = reg.measure(0, None, &mut seeded(seed)).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_superposition_statistics() {
    // Ry(π/3)|0⟩ = (0.866, 0.5) → P(1) = 0.25
    let mut rng = seeded(42);
    let mut ones = 0u32;

    for _ in 0..1000 {
        let mut reg = QubitRegister::new(1, 0).unwrap();
        reg.ry(PI / 3.0, 0).unwrap();
        ones += u32::from(reg.measure(0, None, &mut rng).unwrap());
    }

    // binomial(1000, 0.25): desvio padrão ≈ 13.7
    assert!((ones as i32 - 250).abs() < 50, "ones = {ones}");
}

#[test]
fn test_equal_superposition_statistics() {
    let mut rng = seeded(1234);
    let mut ones = 0u32;

    for _ in 0..1000 {
        let mut reg = QubitRegister::new(1, 0).unwrap();
        reg.h(0).unwrap();
        ones += u32::from(reg.measure(0, None, &mut rng).unwrap());
    }

    // binomial(1000, 0.5): desvio padrão ≈ 15.8
    assert!((ones as i32 - 500).abs() < 60, "ones = {ones}");
}

#[test]
fn test_bell_state_correlation() {
    for seed in 0..20 {
        let mut rng = seeded(seed);
        let mut reg = QubitRegister::new(2, 2).unwrap();
        reg.h(0).unwrap().cx(0, 1).unwrap();

        let b0 = reg.measure(0, Some(0), &mut rng).unwrap();
        let b1 = reg.measure(1, Some(1), &mut rng).unwrap();

        assert_eq!(b0, b1);
        assert_eq!(reg.cbits(), &[b0, b1]);
    }
}

#[test]
fn test_degenerate_guard_respects_epsilon() {
    let config = RegisterConfig {
        epsilon: 0.6,
        ..RegisterConfig::default()
    };
    let mut reg = QubitRegister::with_config(1, 0, config).unwrap();
    reg.h(0).unwrap();

    // p de qualquer resultado é ≈ 0.5 ≤ epsilon
    assert!(matches!(
        reg.measure(0, None, &mut seeded(0)),
        Err(RegisterError::DegenerateMeasurement(_))
    ));
}

#[test]
fn test_render_is_deterministic_listing() {
    let reg = QubitRegister::new(1, 1).unwrap();

    let expected = "Quantum state (1 qubits):\n\
                    |0⟩: 1.0000+0.0000i\n\
                    |1⟩: 0.0000+0.0000i\n\
                    \nClassical register: [0]";
    assert_eq!(reg.render(), expected);
}

#[test]
fn test_render_does_not_mutate() {
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.h(0).unwrap();

    let before = reg.amplitudes().to_vec();
    let _ = reg.render();

    assert_eq!(reg.amplitudes(), &before[..]);
}

#[test]
fn test_render_orders_by_basis_index() {
    let mut reg = QubitRegister::new(2, 0).unwrap();
    reg.x(0).unwrap();

    let text = reg.render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "|00⟩: 0.0000+0.0000i");
    assert_eq!(lines[2], "|01⟩: 1.0000+0.0000i");
    assert_eq!(lines[3], "|10⟩: 0.0000+0.0000i");
    assert_eq!(lines[4], "|11⟩: 0.0000+0.0000i");
}

#[test]
fn test_reset_restores_ground_state() {
    let mut reg = QubitRegister::new(2, 1).unwrap();
    reg.h(0).unwrap().cx(0, 1).unwrap();
    reg.measure(0, Some(0), &mut seeded(3)).unwrap();

    reg.reset();

    assert!((reg.amplitudes()[0].re - 1.0).abs() < TOL);
    assert_eq!(reg.cbits(), &[0]);
    assert!(reg.is_normalized());
}

#[test]
fn test_gates_do_not_renormalize() {
    let mut reg = QubitRegister::new(1, 0).unwrap();
    reg.rx(0.3, 0).unwrap();

    // amplitudes são exatamente as entradas da matriz aplicadas a |0⟩
    assert!((reg.amplitudes()[0].re - (0.15f64).cos()).abs() < TOL);
    assert!((reg.amplitudes()[1].im + (0.15f64).sin()).abs() < TOL);
}
