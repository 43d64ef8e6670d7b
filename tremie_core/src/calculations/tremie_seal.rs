//! # Tremie Seal Thickness
//!
//! Sizes the concrete seal poured underwater at the bottom of a cofferdam.
//! Once the cofferdam is dewatered, the water outside pushes up on the seal
//! with the hydrostatic pressure at tremie level. The seal must weigh at least
//! that much (times a factor of safety) per square foot:
//!
//! ```text
//! t = (γw × h × SF) / γc
//! ```
//!
//! ## Assumptions
//!
//! - Simplified "feel" approach: pressure balance only
//! - Skin friction and bond to piles or sheeting are neglected
//! - γw = 62.4 pcf, γc = 150 pcf
//! - Inputs are not range-checked: zero and negative values pass straight
//!   through the arithmetic
//!
//! ## Example
//!
//! ```rust
//! use tremie_core::calculations::tremie_seal::{calculate, TremieSealInput};
//!
//! let input = TremieSealInput::new(20.0, 2.0);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.pressure_with_sf_psf, 2496.0);
//! assert_eq!(result.final_thickness_ft, 16.64);
//! assert_eq!(result.thickness_ft, 16.7);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{CONCRETE_DENSITY, WATER_DENSITY};
use crate::precision::{ceil_to_tenth, round_to_hundredth};
use crate::units::{Feet, Psf};

/// Safety factor applied when the user does not enter one
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.5;

/// Largest difference between seal weight and factored pressure that still
/// counts as balanced once both are rounded to 2 decimals (psf)
pub const VERIFICATION_TOLERANCE_PSF: f64 = 0.01;

// ============================================================================
// Input
// ============================================================================

/// Input parameters for a tremie seal.
///
/// ## JSON Example
///
/// ```json
/// {
///   "depth_ft": 10.0,
///   "safety_factor": 1.5,
///   "plan": { "length_ft": 20.0, "width_ft": 30.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TremieSealInput {
    /// Water depth at tremie level (ft)
    pub depth_ft: f64,

    /// Factor of safety on water pressure (dimensionless)
    pub safety_factor: f64,

    /// Optional cofferdam plan dimensions for quantity takeoff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<SealPlan>,
}

impl TremieSealInput {
    /// Create an input without plan dimensions.
    pub fn new(depth_ft: f64, safety_factor: f64) -> Self {
        TremieSealInput {
            depth_ft,
            safety_factor,
            plan: None,
        }
    }

    /// Attach plan dimensions.
    pub fn with_plan(mut self, length_ft: f64, width_ft: f64) -> Self {
        self.plan = Some(SealPlan { length_ft, width_ft });
        self
    }

    /// Validate input parameters.
    ///
    /// Only values that are not real numbers are rejected. Zero and negative
    /// depths or safety factors are accepted as-is.
    pub fn validate(&self) -> CalcResult<()> {
        require_real("depth_ft", self.depth_ft)?;
        require_real("safety_factor", self.safety_factor)?;
        if let Some(plan) = &self.plan {
            require_real("length_ft", plan.length_ft)?;
            require_real("width_ft", plan.width_ft)?;
        }
        Ok(())
    }
}

/// Rectangular plan dimensions of the seal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SealPlan {
    /// Inside length of the cofferdam (ft)
    pub length_ft: f64,

    /// Inside width of the cofferdam (ft)
    pub width_ft: f64,
}

fn require_real(field: &str, value: f64) -> CalcResult<()> {
    if value.is_nan() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Not a number"));
    }
    if value.is_infinite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

// ============================================================================
// Result
// ============================================================================

/// Results from a tremie seal calculation.
///
/// The four step quantities are rounded to 2 decimals for display.
/// `thickness_ft` is the construction figure: the unrounded thickness rounded
/// up to the next 0.1 ft.
///
/// ## JSON Example
///
/// ```json
/// {
///   "water_pressure_psf": 624.0,
///   "pressure_with_sf_psf": 936.0,
///   "final_thickness_ft": 6.24,
///   "concrete_weight_psf": 936.0,
///   "thickness_ft": 6.3,
///   "unrounded_thickness_ft": 6.24
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TremieSealResult {
    /// Water pressure at tremie level γw·h (psf)
    pub water_pressure_psf: f64,

    /// Water pressure times safety factor (psf)
    pub pressure_with_sf_psf: f64,

    /// Required thickness to 2 decimals (ft)
    pub final_thickness_ft: f64,

    /// Concrete weight per square foot at the required thickness (psf)
    pub concrete_weight_psf: f64,

    /// Required thickness rounded up to the nearest 0.1 ft
    pub thickness_ft: f64,

    /// Required thickness before any rounding (ft)
    pub unrounded_thickness_ft: f64,

    /// Plan quantities, present when plan dimensions were given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal: Option<SealQuantities>,
}

impl TremieSealResult {
    /// Difference between seal weight and factored pressure (psf).
    pub fn verification_delta_psf(&self) -> f64 {
        self.concrete_weight_psf - self.pressure_with_sf_psf
    }

    /// Check that the concrete weight balances the factored pressure.
    pub fn is_balanced(&self) -> bool {
        // Small slack for the binary representation of the rounded values
        self.verification_delta_psf().abs() <= VERIFICATION_TOLERANCE_PSF + 1e-9
    }
}

/// Concrete quantities for a seal of known plan size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SealQuantities {
    /// Plan area (ft²)
    pub area_sqft: f64,

    /// Concrete volume at the rounded-up thickness (ft³)
    pub volume_cuft: f64,

    /// Total seal weight (lb)
    pub concrete_weight_lb: f64,
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculate the required tremie seal thickness.
///
/// # Arguments
///
/// * `input` - Water depth, safety factor, optional plan
///
/// # Returns
///
/// * `Ok(TremieSealResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - If any value is not a real number, or the
///   result overflows past the f64 range
pub fn calculate(input: &TremieSealInput) -> CalcResult<TremieSealResult> {
    input.validate()?;

    // Order matters: rounded output must match the reference figures exactly
    let water_pressure: Psf = Feet(input.depth_ft) * WATER_DENSITY;
    let pressure_with_sf = water_pressure * input.safety_factor;
    let required_thickness: Feet = pressure_with_sf / CONCRETE_DENSITY;
    let concrete_weight: Psf = CONCRETE_DENSITY * required_thickness;

    // Ceiling is taken on the unrounded thickness, not the 2-decimal figure
    let thickness_ft = ceil_to_tenth(required_thickness.0);

    let seal = match &input.plan {
        Some(plan) => Some(seal_quantities(plan, Feet(thickness_ft))?),
        None => None,
    };

    let water_pressure_psf = round_to_hundredth(water_pressure.0);
    if !water_pressure_psf.is_finite() {
        return Err(not_finite("depth_ft", input.depth_ft));
    }

    let result = TremieSealResult {
        water_pressure_psf,
        pressure_with_sf_psf: round_to_hundredth(pressure_with_sf.0),
        final_thickness_ft: round_to_hundredth(required_thickness.0),
        concrete_weight_psf: round_to_hundredth(concrete_weight.0),
        thickness_ft,
        unrounded_thickness_ft: required_thickness.0,
        seal,
    };

    let core_values = [
        result.pressure_with_sf_psf,
        result.final_thickness_ft,
        result.concrete_weight_psf,
        result.thickness_ft,
        result.unrounded_thickness_ft,
    ];
    if core_values.iter().any(|v| !v.is_finite()) {
        return Err(not_finite("safety_factor", input.safety_factor));
    }

    Ok(result)
}

/// Overflow past f64 range; such a result would serialize as `null`.
fn not_finite(field: &str, value: f64) -> CalcError {
    CalcError::invalid_input(field, value.to_string(), "Result is not finite")
}

/// Calculate from a depth and safety factor.
///
/// ```rust
/// use tremie_core::calculations::tremie_seal::compute;
///
/// let result = compute(10.0, 1.5).unwrap();
/// assert_eq!(result.final_thickness_ft, 6.24);
/// assert!(compute(f64::NAN, 1.5).is_err());
/// ```
pub fn compute(depth_ft: f64, safety_factor: f64) -> CalcResult<TremieSealResult> {
    calculate(&TremieSealInput::new(depth_ft, safety_factor))
}

fn seal_quantities(plan: &SealPlan, thickness: Feet) -> CalcResult<SealQuantities> {
    let area = Feet(plan.length_ft) * Feet(plan.width_ft);
    let volume = area * thickness;
    let weight = volume * CONCRETE_DENSITY;

    let quantities = SealQuantities {
        area_sqft: round_to_hundredth(area.0),
        volume_cuft: round_to_hundredth(volume.0),
        concrete_weight_lb: round_to_hundredth(weight.0),
    };
    // An overflowing thickness is reported against the safety factor by the caller
    if thickness.0.is_finite()
        && !(quantities.area_sqft.is_finite()
            && quantities.volume_cuft.is_finite()
            && quantities.concrete_weight_lb.is_finite())
    {
        return Err(not_finite("length_ft", plan.length_ft));
    }
    Ok(quantities)
}

// ============================================================================
// Form
// ============================================================================

/// Raw text of the calculator form fields.
///
/// Front-ends keep whatever the user typed here and only turn it into numbers
/// when asked to calculate. Depth starts empty and the safety factor starts at
/// `"1.5"`; the plan fields are optional and start empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TremieSealForm {
    /// Water depth text (ft)
    pub depth: String,
    /// Safety factor text
    pub safety_factor: String,
    /// Seal length text (ft), optional
    #[serde(default)]
    pub length: String,
    /// Seal width text (ft), optional
    #[serde(default)]
    pub width: String,
}

impl Default for TremieSealForm {
    fn default() -> Self {
        TremieSealForm {
            depth: String::new(),
            safety_factor: DEFAULT_SAFETY_FACTOR.to_string(),
            length: String::new(),
            width: String::new(),
        }
    }
}

impl TremieSealForm {
    /// Create a form with depth and safety factor text.
    pub fn new(depth: impl Into<String>, safety_factor: impl Into<String>) -> Self {
        TremieSealForm {
            depth: depth.into(),
            safety_factor: safety_factor.into(),
            ..Default::default()
        }
    }

    /// Set the plan dimension text.
    pub fn with_plan(mut self, length: impl Into<String>, width: impl Into<String>) -> Self {
        self.length = length.into();
        self.width = width.into();
        self
    }

    /// Parse the form text into a calculation input.
    ///
    /// Depth and safety factor are required. Plan dimensions are used only
    /// when at least one of them is filled in, and then both are required.
    pub fn parse(&self) -> CalcResult<TremieSealInput> {
        let depth_ft = parse_field("depth_ft", &self.depth)?;
        let safety_factor = parse_field("safety_factor", &self.safety_factor)?;

        let plan = if self.length.trim().is_empty() && self.width.trim().is_empty() {
            None
        } else {
            Some(SealPlan {
                length_ft: parse_field("length_ft", &self.length)?,
                width_ft: parse_field("width_ft", &self.width)?,
            })
        };

        let input = TremieSealInput {
            depth_ft,
            safety_factor,
            plan,
        };
        input.validate()?;
        Ok(input)
    }

    /// Parse the form and run the calculation.
    pub fn compute(&self) -> CalcResult<TremieSealResult> {
        calculate(&self.parse()?)
    }
}

fn parse_field(field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field, text, "Value is empty"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_input(field, text, "Not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case_10ft() {
        let result = compute(10.0, 1.5).unwrap();
        assert_eq!(result.water_pressure_psf, 624.0);
        assert_eq!(result.pressure_with_sf_psf, 936.0);
        assert_eq!(result.final_thickness_ft, 6.24);
        assert_eq!(result.concrete_weight_psf, 936.0);
        assert_eq!(result.thickness_ft, 6.3);
        assert!(result.seal.is_none());
    }

    #[test]
    fn test_zero_depth() {
        let result = compute(0.0, 1.5).unwrap();
        assert_eq!(result.water_pressure_psf, 0.0);
        assert_eq!(result.pressure_with_sf_psf, 0.0);
        assert_eq!(result.final_thickness_ft, 0.0);
        assert_eq!(result.concrete_weight_psf, 0.0);
        assert_eq!(result.thickness_ft, 0.0);
    }

    #[test]
    fn test_reference_case_20ft() {
        let result = compute(20.0, 2.0).unwrap();
        assert_eq!(result.water_pressure_psf, 1248.0);
        assert_eq!(result.pressure_with_sf_psf, 2496.0);
        assert_eq!(result.final_thickness_ft, 16.64);
        assert_eq!(result.concrete_weight_psf, 2496.0);
        assert_eq!(result.thickness_ft, 16.7);
    }

    #[test]
    fn test_ceiling_uses_unrounded_thickness() {
        // 12 ft at SF 1.5: t = 7.488 ft, shown as 7.49, placed as 7.5
        let result = compute(12.0, 1.5).unwrap();
        assert_eq!(result.final_thickness_ft, 7.49);
        assert_eq!(result.thickness_ft, 7.5);
        assert!((result.unrounded_thickness_ft - 7.488).abs() < 1e-9);
    }

    #[test]
    fn test_weight_balances_pressure() {
        for step in 0..=400 {
            let depth = step as f64 * 0.5;
            for sf in [1.0, 1.1, 1.25, 1.5, 2.0, 3.0] {
                let result = compute(depth, sf).unwrap();
                assert!(
                    result.is_balanced(),
                    "depth {} sf {}: {} vs {}",
                    depth,
                    sf,
                    result.concrete_weight_psf,
                    result.pressure_with_sf_psf
                );
            }
        }
    }

    #[test]
    fn test_thickness_rounds_up_by_less_than_a_tenth() {
        for step in 0..=400 {
            let depth = step as f64 * 0.5;
            for sf in [1.0, 1.1, 1.25, 1.5, 2.0, 3.0] {
                let result = compute(depth, sf).unwrap();
                let raw = result.unrounded_thickness_ft;
                assert!(result.thickness_ft >= raw - 1e-9);
                assert!(result.thickness_ft - raw < 0.1 + 1e-9);
            }
        }
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let result = compute(-10.0, 1.5).unwrap();
        assert_eq!(result.water_pressure_psf, -624.0);
        assert_eq!(result.pressure_with_sf_psf, -936.0);
        assert_eq!(result.final_thickness_ft, -6.24);
        assert_eq!(result.thickness_ft, -6.2);
    }

    #[test]
    fn test_nan_is_invalid() {
        let err = compute(f64::NAN, 1.5).unwrap_err();
        assert_eq!(err.field(), "depth_ft");

        let err = compute(10.0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), "safety_factor");
    }

    #[test]
    fn test_infinite_is_invalid() {
        assert!(compute(f64::INFINITY, 1.5).is_err());
    }

    #[test]
    fn test_overflowing_depth_is_invalid() {
        // 1e308 × 62.4 exceeds f64::MAX
        let err = compute(1e308, 2.0).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("depth_ft", 1e308_f64.to_string(), "Result is not finite")
        );
    }

    #[test]
    fn test_overflowing_safety_factor_is_invalid() {
        let err = compute(1e300, 1e10).unwrap_err();
        assert_eq!(err.field(), "safety_factor");
    }

    #[test]
    fn test_overflowing_plan_is_invalid() {
        let input = TremieSealInput::new(10.0, 1.5).with_plan(1e200, 1e200);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), "length_ft");
    }

    #[test]
    fn test_large_finite_result_roundtrips() {
        let result = compute(1e300, 1.0).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
        let roundtrip: TremieSealResult = serde_json::from_str(&json).unwrap();
        let rel = (roundtrip.thickness_ft - result.thickness_ft).abs() / result.thickness_ft;
        assert!(rel < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let a = compute(17.3, 1.35).unwrap();
        let b = compute(17.3, 1.35).unwrap();
        assert_eq!(a.water_pressure_psf.to_bits(), b.water_pressure_psf.to_bits());
        assert_eq!(a.pressure_with_sf_psf.to_bits(), b.pressure_with_sf_psf.to_bits());
        assert_eq!(a.final_thickness_ft.to_bits(), b.final_thickness_ft.to_bits());
        assert_eq!(a.concrete_weight_psf.to_bits(), b.concrete_weight_psf.to_bits());
        assert_eq!(a.thickness_ft.to_bits(), b.thickness_ft.to_bits());
    }

    #[test]
    fn test_seal_quantities() {
        let input = TremieSealInput::new(10.0, 1.5).with_plan(20.0, 30.0);
        let result = calculate(&input).unwrap();
        let seal = result.seal.unwrap();
        assert_eq!(seal.area_sqft, 600.0);
        // Volume uses the 6.3 ft construction thickness
        assert!((seal.volume_cuft - 3780.0).abs() < 0.01);
        assert!((seal.concrete_weight_lb - 567_000.0).abs() < 0.01);
    }

    #[test]
    fn test_form_defaults() {
        let form = TremieSealForm::default();
        assert_eq!(form.depth, "");
        assert_eq!(form.safety_factor, "1.5");
        assert!(form.length.is_empty() && form.width.is_empty());
    }

    #[test]
    fn test_form_compute() {
        let result = TremieSealForm::new(" 10 ", "1.5").compute().unwrap();
        assert_eq!(result.thickness_ft, 6.3);
    }

    #[test]
    fn test_form_empty_depth_is_invalid() {
        let err = TremieSealForm::default().compute().unwrap_err();
        assert_eq!(err.field(), "depth_ft");
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_form_text_depth_is_invalid() {
        let err = TremieSealForm::new("deep", "1.5").parse().unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("depth_ft", "deep", "Not a number")
        );
    }

    #[test]
    fn test_form_nan_text_is_invalid() {
        assert!(TremieSealForm::new("NaN", "1.5").parse().is_err());
        assert!(TremieSealForm::new("10", "nan").parse().is_err());
    }

    #[test]
    fn test_form_plan_requires_both_dimensions() {
        let err = TremieSealForm::new("10", "1.5")
            .with_plan("20", "")
            .parse()
            .unwrap_err();
        assert_eq!(err.field(), "width_ft");

        let input = TremieSealForm::new("10", "1.5")
            .with_plan("20", "30")
            .parse()
            .unwrap();
        assert_eq!(input.plan, Some(SealPlan { length_ft: 20.0, width_ft: 30.0 }));
    }

    #[test]
    fn test_serialization() {
        let result = compute(10.0, 1.5).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"thickness_ft\": 6.3"));
        assert!(!json.contains("seal"));

        let roundtrip: TremieSealResult = serde_json::from_str(&json).unwrap();
        let rel = (roundtrip.thickness_ft - result.thickness_ft).abs() / result.thickness_ft;
        assert!(rel < 1e-12);
    }

    #[test]
    fn test_input_json_without_plan() {
        let input: TremieSealInput =
            serde_json::from_str(r#"{ "depth_ft": 20.0, "safety_factor": 2.0 }"#).unwrap();
        assert_eq!(input, TremieSealInput::new(20.0, 2.0));
    }
}
