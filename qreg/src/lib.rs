//! # ⚛️ qreg — State-Vector Qubit Register
//!
//! Simula um registrador de qubits por vetor de estado: preparação em
//! |0…0⟩, portas unitárias single-qubit e controladas, e medição projetiva
//! com registro dos resultados em bits clássicos.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2^n):**
//! - Atualiza 2^(n-1) pares de amplitudes que diferem apenas no bit alvo
//! - Nunca materializa a matriz 2^n × 2^n
//!
//! **Measurement — O(2^n):**
//! - Soma marginal de probabilidades + colapso e renormalização in-place
//!
//! **Scalability:**
//! - Registradores pequenos (n ≤ 10): ✓ Excellent
//! - Registradores médios (10 < n ≤ 20): △ Good
//! - Registradores grandes (n > 24): Monitor memory (16 bytes × 2^n)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QubitRegister                          │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Amplitudes (2^n) + Classical Bits        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Application (pares no bit alvo)     │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement + Collapse                   │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! A fonte de aleatoriedade da medição é injetada pelo chamador
//! (`rand::Rng`), permitindo execuções determinísticas com seed fixa.
//!
//! ## Exemplo
//!
//! ```
//! use qreg::QubitRegister;
//!
//! let mut reg = QubitRegister::new(2, 2)?;
//! reg.h(0)?.cx(0, 1)?;
//!
//! let mut rng = rand::thread_rng();
//! let b0 = reg.measure(0, Some(0), &mut rng)?;
//! let b1 = reg.measure(1, Some(1), &mut rng)?;
//! assert_eq!(b0, b1); // estado de Bell: resultados correlacionados
//! # Ok::<(), qreg::RegisterError>(())
//! ```

pub mod error;
pub mod gates;
pub mod register;
pub mod state;

pub use error::{RegisterError, RegisterResult};
pub use gates::{Gate, Matrix2x2};
pub use register::{QubitRegister, RegisterConfig};
pub use state::RegisterState;

#[cfg(test)]
mod tests;
