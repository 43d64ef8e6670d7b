//! # tremie_core - Tremie Seal Calculation Engine
//!
//! `tremie_core` computes the concrete thickness a tremie seal needs so that its
//! self-weight balances the hydrostatic uplift at the bottom of a cofferdam:
//!
//! ```text
//! t = (γw × h × SF) / γc
//! ```
//!
//! All inputs and outputs are JSON-serializable so the same results can feed the
//! GUI, the CLI, or any other consumer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use tremie_core::calculations::tremie_seal::compute;
//!
//! let result = compute(10.0, 1.5).unwrap();
//! assert_eq!(result.water_pressure_psf, 624.0);
//! assert_eq!(result.thickness_ft, 6.3);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("thickness_ft"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The tremie seal calculation and its form wrapper
//! - [`equations`] - Formula metadata for reports and documentation
//! - [`materials`] - Fixed unit weights of water and concrete
//! - [`precision`] - Display and construction rounding rules
//! - [`report`] - Step-by-step calculation report
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod precision;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::tremie_seal::{compute, TremieSealForm, TremieSealInput, TremieSealResult};
pub use errors::{CalcError, CalcResult};
pub use report::CalculationReport;
