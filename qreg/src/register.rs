//! Registrador de qubits: construção, portas e medição

use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RegisterError, RegisterResult};
use crate::gates::Gate;
use crate::state::RegisterState;

/// Configuração do registrador
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Threshold numérico para probabilidade zero (guarda de divisão)
    pub epsilon: f64,
    /// Tolerância da verificação de normalização
    pub norm_epsilon: f64,
    /// Casas decimais na renderização das amplitudes
    pub render_precision: usize,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-12,
            norm_epsilon: 1e-9,
            render_precision: 4,
        }
    }
}

/// Registrador de n qubits com bits clássicos de medição
///
/// O estado começa em |0…0⟩. Portas mutam o vetor de amplitudes in-place
/// sem renormalizar; apenas a medição renormaliza, após o colapso.
#[derive(Debug, Clone)]
pub struct QubitRegister {
    n_qubits: usize,
    state: RegisterState,
    config: RegisterConfig,
}

impl QubitRegister {
    /// Cria registrador em |0…0⟩
    pub fn new(n_qubits: usize, n_bits: usize) -> RegisterResult<Self> {
        Self::with_config(n_qubits, n_bits, RegisterConfig::default())
    }

    /// Cria registrador com configuração customizada
    pub fn with_config(
        n_qubits: usize,
        n_bits: usize,
        config: RegisterConfig,
    ) -> RegisterResult<Self> {
        // 2^n precisa caber no espaço de índices
        if n_qubits < 1 || n_qubits >= usize::BITS as usize {
            return Err(RegisterError::InvalidDimension(n_qubits));
        }

        Ok(Self {
            n_qubits,
            state: RegisterState::ground(1usize << n_qubits, n_bits),
            config,
        })
    }

    fn check_qubit(&self, index: usize) -> RegisterResult<()> {
        if index >= self.n_qubits {
            return Err(RegisterError::QubitIndexOutOfRange {
                index,
                n_qubits: self.n_qubits,
            });
        }
        Ok(())
    }

    fn check_cbit(&self, index: usize) -> RegisterResult<()> {
        if index >= self.state.n_bits() {
            return Err(RegisterError::ClassicalBitIndexOutOfRange {
                index,
                n_bits: self.state.n_bits(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Portas
    // =========================================================================

    /// Aplica uma porta single-qubit ao qubit `target`
    ///
    /// Atualiza cada par de índices base que difere apenas no bit `target`,
    /// usando os valores pré-atualização. Equivale ao produto tensorial
    /// I ⊗ … ⊗ U ⊗ … ⊗ I sem materializar a matriz 2^n × 2^n.
    pub fn apply(&mut self, gate: Gate, target: usize) -> RegisterResult<()> {
        self.check_qubit(target)?;

        let m = gate.matrix();
        let mask = 1usize << target;

        for i0 in 0..self.state.dim() {
            if i0 & mask != 0 {
                continue;
            }
            let i1 = i0 | mask;
            let [a0, a1] = m.apply([self.state.amplitudes[i0], self.state.amplitudes[i1]]);
            self.state.amplitudes[i0] = a0;
            self.state.amplitudes[i1] = a1;
        }
        Ok(())
    }

    /// Aplica uma porta controlada com controle `control` e alvo `target`
    ///
    /// A transformação atua apenas no subconjunto de índices com o bit
    /// `control` em 1; amplitudes com controle em 0 ficam intocadas.
    pub fn apply_controlled(
        &mut self,
        gate: Gate,
        control: usize,
        target: usize,
    ) -> RegisterResult<()> {
        if control == target || control >= self.n_qubits || target >= self.n_qubits {
            return Err(RegisterError::InvalidGateArguments { control, target });
        }

        let m = gate.matrix();
        let tmask = 1usize << target;
        let cmask = 1usize << control;

        for i0 in 0..self.state.dim() {
            if i0 & tmask != 0 || i0 & cmask == 0 {
                continue;
            }
            let i1 = i0 | tmask;
            let [a0, a1] = m.apply([self.state.amplitudes[i0], self.state.amplitudes[i1]]);
            self.state.amplitudes[i0] = a0;
            self.state.amplitudes[i1] = a1;
        }
        Ok(())
    }

    /// Identidade no qubit `target`
    pub fn i(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::I, target)?;
        Ok(self)
    }

    /// Porta X (NOT) no qubit `target`
    pub fn x(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::X, target)?;
        Ok(self)
    }

    /// Porta Y no qubit `target`
    pub fn y(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::Y, target)?;
        Ok(self)
    }

    /// Porta Z no qubit `target`
    pub fn z(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::Z, target)?;
        Ok(self)
    }

    /// Porta Hadamard no qubit `target`
    pub fn h(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::H, target)?;
        Ok(self)
    }

    /// Porta S no qubit `target`
    pub fn s(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::S, target)?;
        Ok(self)
    }

    /// Porta T no qubit `target`
    pub fn t(&mut self, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::T, target)?;
        Ok(self)
    }

    /// Rotação em X de ângulo `theta` (radianos)
    pub fn rx(&mut self, theta: f64, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::Rx(theta), target)?;
        Ok(self)
    }

    /// Rotação em Y de ângulo `theta` (radianos)
    pub fn ry(&mut self, theta: f64, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::Ry(theta), target)?;
        Ok(self)
    }

    /// Rotação em Z de ângulo `theta` (radianos)
    pub fn rz(&mut self, theta: f64, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::Rz(theta), target)?;
        Ok(self)
    }

    /// Fase genérica de ângulo `phi` (radianos)
    pub fn p(&mut self, phi: f64, target: usize) -> RegisterResult<&mut Self> {
        self.apply(Gate::P(phi), target)?;
        Ok(self)
    }

    /// CNOT com controle `control` e alvo `target`
    pub fn cx(&mut self, control: usize, target: usize) -> RegisterResult<&mut Self> {
        self.apply_controlled(Gate::X, control, target)?;
        Ok(self)
    }

    /// CZ com controle `control` e alvo `target`
    pub fn cz(&mut self, control: usize, target: usize) -> RegisterResult<&mut Self> {
        self.apply_controlled(Gate::Z, control, target)?;
        Ok(self)
    }

    /// SWAP entre os qubits `a` e `b`
    pub fn swap(&mut self, a: usize, b: usize) -> RegisterResult<&mut Self> {
        if a == b || a >= self.n_qubits || b >= self.n_qubits {
            return Err(RegisterError::InvalidGateArguments {
                control: a,
                target: b,
            });
        }

        let amask = 1usize << a;
        let bmask = 1usize << b;

        // cada par visitado uma vez: bit a em 1, bit b em 0
        for i in 0..self.state.dim() {
            if i & amask == 0 || i & bmask != 0 {
                continue;
            }
            let j = (i & !amask) | bmask;
            self.state.amplitudes.swap(i, j);
        }
        Ok(self)
    }

    // =========================================================================
    // Medição
    // =========================================================================

    /// Medição projetiva do qubit `qubit` na base computacional
    ///
    /// O resultado é sorteado com P(1) = p1 usando o `rng` injetado; as
    /// amplitudes inconsistentes com o resultado são zeradas e as restantes
    /// reescaladas por 1/√p. Com `cbit` fornecido, o resultado é gravado no
    /// registrador clássico. Toda validação ocorre antes de qualquer escrita.
    ///
    /// Medir novamente o mesmo qubit, sem portas intermediárias, repete o
    /// resultado de forma determinística: o estado colapsou.
    pub fn measure<R: Rng>(
        &mut self,
        qubit: usize,
        cbit: Option<usize>,
        rng: &mut R,
    ) -> RegisterResult<u8> {
        self.check_qubit(qubit)?;
        if let Some(c) = cbit {
            self.check_cbit(c)?;
        }

        let p1 = self.state.probability_of_one(qubit);
        let outcome: u8 = if rng.gen_range(0.0..1.0) < p1 { 1 } else { 0 };

        let p_outcome = if outcome == 1 { p1 } else { 1.0 - p1 };
        if p_outcome <= self.config.epsilon {
            return Err(RegisterError::DegenerateMeasurement(p_outcome));
        }

        let mask = 1usize << qubit;
        let scale = 1.0 / p_outcome.sqrt();
        for (i, amp) in self.state.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) == (outcome == 1) {
                *amp *= scale;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }

        if let Some(c) = cbit {
            self.state.cbits[c] = outcome;
        }
        Ok(outcome)
    }

    // =========================================================================
    // Inspeção
    // =========================================================================

    /// Número de qubits
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Número de bits clássicos
    pub fn n_bits(&self) -> usize {
        self.state.n_bits()
    }

    /// Dimensão do espaço de estados (2^n)
    pub fn dim(&self) -> usize {
        self.state.dim()
    }

    /// Amplitudes atuais
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.state.amplitudes
    }

    /// Registrador clássico
    pub fn cbits(&self) -> &[u8] {
        &self.state.cbits
    }

    /// Dados do estado
    pub fn state_data(&self) -> &RegisterState {
        &self.state
    }

    /// Probabilidade marginal de medir 1 no qubit `qubit`
    pub fn probability_of_one(&self, qubit: usize) -> RegisterResult<f64> {
        self.check_qubit(qubit)?;
        Ok(self.state.probability_of_one(qubit))
    }

    /// Probabilidade total: Σ|aᵢ|²
    pub fn total_probability(&self) -> f64 {
        self.state.total_probability()
    }

    /// Verifica a normalização dentro da tolerância configurada
    pub fn is_normalized(&self) -> bool {
        self.state.is_normalized(self.config.norm_epsilon)
    }

    /// Restaura |0…0⟩ e limpa os bits clássicos
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Listagem determinística das amplitudes, por índice base crescente
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.config.render_precision;

        writeln!(f, "Quantum state ({} qubits):", self.n_qubits)?;
        for (i, amp) in self.state.amplitudes.iter().enumerate() {
            writeln!(
                f,
                "|{}⟩: {:.prec$}{:+.prec$}i",
                self.state.basis_label(i),
                amp.re,
                amp.im,
                prec = prec
            )?;
        }

        if self.state.n_bits() > 0 {
            write!(f, "\nClassical register: {:?}", self.state.cbits)?;
        }
        Ok(())
    }
}
