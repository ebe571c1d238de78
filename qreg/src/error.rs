//! Tipos de erro para qreg

use thiserror::Error;

/// Resultado customizado para operações do registrador
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Erros que podem ocorrer em operações do registrador
#[derive(Debug, Clone, Error)]
pub enum RegisterError {
    #[error("Invalid register dimension: {0} qubits")]
    InvalidDimension(usize),

    #[error("Qubit index out of range: {index} (register has {n_qubits} qubits)")]
    QubitIndexOutOfRange { index: usize, n_qubits: usize },

    #[error("Classical bit index out of range: {index} (register has {n_bits} bits)")]
    ClassicalBitIndexOutOfRange { index: usize, n_bits: usize },

    #[error("Invalid gate arguments: control {control}, target {target}")]
    InvalidGateArguments { control: usize, target: usize },

    #[error("Degenerate measurement: outcome probability {0} is numerically zero")]
    DegenerateMeasurement(f64),
}
