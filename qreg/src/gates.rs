//! # Quantum Gates — Portas do registrador
//!
//! Implementa as portas unitárias suportadas pelo registrador.
//!
//! ## Gates implementadas
//!
//! - **Single-qubit**: I, H (Hadamard), X, Y, Z (Pauli), S, T
//! - **Rotation**: Rx, Ry, Rz e P (fase genérica)
//! - **Two-qubit**: CX, CZ e SWAP, construídas pelo registrador a partir
//!   das matrizes single-qubit

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz identidade
    pub fn identity() -> Self {
        Self {
            elements: [
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            ],
        }
    }

    /// Aplica gate a um par de amplitudes [alpha, beta]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [
                [a * e + b * g, a * f + b * h],
                [c * e + d * g, c * f + d * h],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [
                [a.conj(), c.conj()],
                [b.conj(), d.conj()],
            ],
        }
    }

    /// Verifica se é unitária (M·M† = I)
    pub fn is_unitary(&self) -> bool {
        let product = self.mul(&self.dagger());

        let [[a, b], [c, d]] = product.elements;
        (a.re - 1.0).abs() < 1e-10
            && a.im.abs() < 1e-10
            && b.norm_sqr() < 1e-10
            && c.norm_sqr() < 1e-10
            && (d.re - 1.0).abs() < 1e-10
            && d.im.abs() < 1e-10
    }
}

/// Porta unitária suportada
///
/// Conjunto fechado de variantes, cada uma com matriz fixa ou
/// parametrizada por ângulo, resolvido em tempo de compilação.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Identidade
    I,
    /// Pauli-X (NOT quântico)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard: cria superposição
    H,
    /// S (√Z)
    S,
    /// T (π/8)
    T,
    /// Rotação em X
    Rx(f64),
    /// Rotação em Y
    Ry(f64),
    /// Rotação em Z
    Rz(f64),
    /// Fase genérica
    P(f64),
}

impl Gate {
    /// Nome da porta
    pub fn name(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::T => "T",
            Self::Rx(_) => "Rx",
            Self::Ry(_) => "Ry",
            Self::Rz(_) => "Rz",
            Self::P(_) => "P",
        }
    }

    /// Matriz da porta
    pub fn matrix(&self) -> Matrix2x2 {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);

        match *self {
            Self::I => Matrix2x2::identity(),
            Self::X => Matrix2x2 {
                elements: [[zero, one], [one, zero]],
            },
            Self::Y => Matrix2x2 {
                elements: [
                    [zero, Complex64::new(0.0, -1.0)],
                    [Complex64::new(0.0, 1.0), zero],
                ],
            },
            Self::Z => Matrix2x2 {
                elements: [[one, zero], [zero, Complex64::new(-1.0, 0.0)]],
            },
            Self::H => {
                let h = FRAC_1_SQRT_2;
                Matrix2x2 {
                    elements: [
                        [Complex64::new(h, 0.0), Complex64::new(h, 0.0)],
                        [Complex64::new(h, 0.0), Complex64::new(-h, 0.0)],
                    ],
                }
            }
            Self::S => Matrix2x2 {
                elements: [[one, zero], [zero, Complex64::new(0.0, 1.0)]],
            },
            Self::T => Matrix2x2 {
                elements: [[one, zero], [zero, Complex64::from_polar(1.0, PI / 4.0)]],
            },
            Self::Rx(theta) => {
                let c = (theta / 2.0).cos();
                let s = (theta / 2.0).sin();
                Matrix2x2 {
                    elements: [
                        [Complex64::new(c, 0.0), Complex64::new(0.0, -s)],
                        [Complex64::new(0.0, -s), Complex64::new(c, 0.0)],
                    ],
                }
            }
            Self::Ry(theta) => {
                let c = (theta / 2.0).cos();
                let s = (theta / 2.0).sin();
                Matrix2x2 {
                    elements: [
                        [Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
                        [Complex64::new(s, 0.0), Complex64::new(c, 0.0)],
                    ],
                }
            }
            Self::Rz(theta) => {
                let half = theta / 2.0;
                Matrix2x2 {
                    elements: [
                        [Complex64::from_polar(1.0, -half), zero],
                        [zero, Complex64::from_polar(1.0, half)],
                    ],
                }
            }
            Self::P(phi) => Matrix2x2 {
                elements: [[one, zero], [zero, Complex64::from_polar(1.0, phi)]],
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Testes
// =============================================================================
