//! Estado interno do registrador

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Dados do registrador quântico
///
/// Convenção de indexação: o qubit 0 é o bit menos significativo do
/// índice base. Os rótulos são renderizados com o bit mais significativo
/// à esquerda, portanto o qubit 0 aparece como o caractere mais à direita.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterState {
    /// Amplitudes complexas, uma por estado base
    pub amplitudes: Vec<Complex64>,
    /// Bits clássicos gravados por medições
    pub cbits: Vec<u8>,
}

impl RegisterState {
    /// Cria o estado fundamental |0…0⟩ com `dim` amplitudes
    pub fn ground(dim: usize, n_bits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            cbits: vec![0; n_bits],
        }
    }

    /// Dimensão do espaço de estados (2^n)
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Número de qubits
    pub fn n_qubits(&self) -> usize {
        self.amplitudes.len().trailing_zeros() as usize
    }

    /// Número de bits clássicos
    pub fn n_bits(&self) -> usize {
        self.cbits.len()
    }

    /// Testa o bit `qubit` do índice base `index`
    pub fn bit(index: usize, qubit: usize) -> bool {
        (index >> qubit) & 1 == 1
    }

    /// Probabilidade total: Σ|aᵢ|²
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probabilidade marginal de medir 1 no qubit `qubit`
    pub fn probability_of_one(&self, qubit: usize) -> f64 {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| Self::bit(*i, qubit))
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Verifica a normalização dentro da tolerância
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.total_probability() - 1.0).abs() < epsilon
    }

    /// Rótulo do estado base `index` (MSB à esquerda)
    pub fn basis_label(&self, index: usize) -> String {
        (0..self.n_qubits())
            .rev()
            .map(|q| if Self::bit(index, q) { '1' } else { '0' })
            .collect()
    }

    /// Restaura |0…0⟩ e limpa os bits clássicos
    pub fn reset(&mut self) {
        for amp in self.amplitudes.iter_mut() {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
        self.cbits.fill(0);
    }
}
