//! # Materials
//!
//! Unit weights used by the tremie seal check. Both values are fixed; the
//! calculator does not model other fluids or concrete mixes.
//!
//! | Material | Symbol | Unit weight |
//! |----------|--------|-------------|
//! | Fresh water | γw | 62.4 pcf |
//! | Normal-weight concrete | γc | 150 pcf |
//!
//! ## Example
//!
//! ```rust
//! use tremie_core::materials::{SealMaterial, CONCRETE_DENSITY};
//!
//! assert_eq!(SealMaterial::Concrete.unit_weight(), CONCRETE_DENSITY);
//! assert_eq!(SealMaterial::Water.label(), "Water density (62.4 pcf)");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::Pcf;

/// Unit weight of water (pcf)
pub const WATER_DENSITY: Pcf = Pcf(62.4);

/// Unit weight of normal-weight concrete (pcf)
pub const CONCRETE_DENSITY: Pcf = Pcf(150.0);

/// The two materials that meet at the bottom of a tremie seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SealMaterial {
    /// Water column above the seal, pushing up
    Water,
    /// Seal concrete, weighing down
    Concrete,
}

impl SealMaterial {
    /// Fixed unit weight
    pub fn unit_weight(&self) -> Pcf {
        match self {
            SealMaterial::Water => WATER_DENSITY,
            SealMaterial::Concrete => CONCRETE_DENSITY,
        }
    }

    /// Greek symbol used in the formula
    pub fn symbol(&self) -> &'static str {
        match self {
            SealMaterial::Water => "γw",
            SealMaterial::Concrete => "γc",
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SealMaterial::Water => "Water",
            SealMaterial::Concrete => "Concrete",
        }
    }

    /// Label with unit weight, e.g. "Concrete density (150 pcf)"
    pub fn label(&self) -> String {
        format!("{} density ({} pcf)", self.display_name(), self.unit_weight().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_weights() {
        assert_eq!(SealMaterial::Water.unit_weight().0, 62.4);
        assert_eq!(SealMaterial::Concrete.unit_weight().0, 150.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SealMaterial::Water.label(), "Water density (62.4 pcf)");
        assert_eq!(SealMaterial::Concrete.label(), "Concrete density (150 pcf)");
    }

    #[test]
    fn test_concrete_heavier_than_water() {
        // A seal can only balance uplift if concrete outweighs water
        assert!(CONCRETE_DENSITY > WATER_DENSITY);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SealMaterial::Concrete).unwrap();
        assert_eq!(json, "\"Concrete\"");
    }
}
