//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`tremie_seal`] - Required tremie seal thickness from water depth

pub mod tremie_seal;

// Re-export commonly used types
pub use tremie_seal::{SealPlan, SealQuantities, TremieSealForm, TremieSealInput, TremieSealResult};
