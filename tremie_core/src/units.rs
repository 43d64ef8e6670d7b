//! # Unit Types
//!
//! Type-safe wrappers for the handful of US customary units a tremie seal
//! check touches. They are plain f64 newtypes, so JSON stays clean (just
//! numbers) and there is no runtime overhead.
//!
//! ## Units
//!
//! - Length: feet (ft)
//! - Pressure: pounds per square foot (psf)
//! - Unit weight: pounds per cubic foot (pcf)
//! - Plan area: square feet (ft²)
//! - Volume: cubic feet (ft³)
//! - Weight: pounds (lb)
//!
//! Only dimensional products are provided (pcf × ft = psf, psf ÷ pcf = ft, ...).
//! There are no conversions to other unit systems.
//!
//! ## Example
//!
//! ```rust
//! use tremie_core::units::{Feet, Pcf, Psf};
//!
//! let depth = Feet(10.0);
//! let pressure: Psf = depth * Pcf(62.4);
//! let back: Feet = pressure / Pcf(62.4);
//! assert!((back.0 - 10.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Geometry
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

// ============================================================================
// Pressure, Unit Weight, Weight
// ============================================================================

/// Pressure in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Unit weight in pounds per cubic foot (pcf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcf(pub f64);

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

// ============================================================================
// Dimensional Products
// ============================================================================

// Operand order is preserved in each impl so that `a * b` evaluates exactly
// as the f64 expression `a.0 * b.0`.

/// Column of fluid: h × γ = p
impl Mul<Pcf> for Feet {
    type Output = Psf;
    fn mul(self, rhs: Pcf) -> Psf {
        Psf(self.0 * rhs.0)
    }
}

/// Self-weight of a layer: γ × t = p
impl Mul<Feet> for Pcf {
    type Output = Psf;
    fn mul(self, rhs: Feet) -> Psf {
        Psf(self.0 * rhs.0)
    }
}

/// Thickness that balances a pressure: p / γ = t
impl Div<Pcf> for Psf {
    type Output = Feet;
    fn div(self, rhs: Pcf) -> Feet {
        Feet(self.0 / rhs.0)
    }
}

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

impl Mul<Feet> for SqFt {
    type Output = CuFt;
    fn mul(self, rhs: Feet) -> CuFt {
        CuFt(self.0 * rhs.0)
    }
}

impl Mul<Pcf> for CuFt {
    type Output = Pounds;
    fn mul(self, rhs: Pcf) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(SqFt);
impl_arithmetic!(CuFt);
impl_arithmetic!(Psf);
impl_arithmetic!(Pcf);
impl_arithmetic!(Pounds);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrostatic_pressure() {
        let p = Feet(10.0) * Pcf(62.4);
        assert!((p.0 - 624.0).abs() < 1e-9);
    }

    #[test]
    fn test_thickness_from_pressure() {
        let t = Psf(936.0) / Pcf(150.0);
        assert!((t.0 - 6.24).abs() < 1e-12);
    }

    #[test]
    fn test_products_match_raw_f64() {
        // Wrapping must not change the floating-point result
        let depth = 17.3;
        assert_eq!((Feet(depth) * Pcf(62.4)).0, depth * 62.4);
        assert_eq!((Pcf(150.0) * Feet(depth)).0, 150.0 * depth);
    }

    #[test]
    fn test_volume_and_weight() {
        let area = Feet(20.0) * Feet(30.0);
        assert_eq!(area, SqFt(600.0));
        let volume = area * Feet(2.5);
        assert_eq!(volume, CuFt(1500.0));
        let weight = volume * Pcf(150.0);
        assert_eq!(weight, Pounds(225_000.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Psf(10.0);
        let b = Psf(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
