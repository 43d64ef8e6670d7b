//! # Calculation Report
//!
//! Turns a tremie seal result into the text a reviewer reads: the formula
//! with its variables, numbered step lines that echo what the user typed,
//! the final construction thickness, and the standing notes.
//!
//! Front-ends only lay this out; they never format numbers themselves.
//!
//! ## Example
//!
//! ```rust
//! use tremie_core::calculations::tremie_seal::TremieSealForm;
//! use tremie_core::report::CalculationReport;
//!
//! let form = TremieSealForm::new("10", "1.5");
//! let result = form.compute().unwrap();
//! let report = CalculationReport::new(&form, &result);
//!
//! assert_eq!(report.steps[0].lines[0], "10 × 62.4 = 624 psf");
//! assert_eq!(report.final_result, "Required Tremie Seal Thickness: 6.3 ft");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::tremie_seal::{TremieSealForm, TremieSealResult};
use crate::equations::Equation;
use crate::materials::{CONCRETE_DENSITY, WATER_DENSITY};
use crate::precision::format_number;

/// Report heading
pub const REPORT_TITLE: &str = "Tremie Seal Thickness Calculator";

/// One-line description shown under the heading
pub const REPORT_SUMMARY: &str = "Calculate required tremie seal thickness based on balancing water \
     pressure with concrete weight, using the simplified \"feel\" approach with safety factor.";

/// Explains the final rounding
pub const ROUNDING_NOTE: &str = "Result rounded up to nearest 0.1 ft for construction purposes";

/// Standing notes printed with every report
pub const NOTES: [&str; 5] = [
    "Uses simplified \"feel\" approach focusing on pressure balance",
    "Water pressure calculated at tremie level",
    "Safety factor applied to water pressure",
    "Results are rounded up to nearest 0.1 ft",
    "This is a theoretical calculation; actual designs may vary",
];

/// Formula block: the governing equation and a "Where:" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaSection {
    /// e.g. "t = (γw × h × SF) / γc"
    pub expression: String,
    /// e.g. "h = Water depth (10 ft)"
    pub variables: Vec<String>,
}

/// One numbered calculation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// 1-based step number
    pub number: usize,
    /// e.g. "Water Pressure at Depth"
    pub heading: String,
    /// Arithmetic lines, e.g. "10 × 62.4 = 624 psf"
    pub lines: Vec<String>,
}

/// Complete, display-ready calculation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Report heading
    pub title: String,
    /// Governing equation and its variables
    pub formula: FormulaSection,
    /// Numbered calculation steps
    pub steps: Vec<CalculationStep>,
    /// e.g. "Required Tremie Seal Thickness: 6.3 ft"
    pub final_result: String,
    /// Explains the rounding of the final result
    pub rounding_note: String,
    /// Standing notes on the method
    pub notes: Vec<String>,
}

impl CalculationReport {
    /// Build the report for a computed result.
    ///
    /// `form` supplies the text echoed in the formula and step lines, so it
    /// should be the form the result was computed from.
    pub fn new(form: &TremieSealForm, result: &TremieSealResult) -> Self {
        let depth = form.depth.trim();
        let safety_factor = form.safety_factor.trim();

        CalculationReport {
            title: REPORT_TITLE.to_string(),
            formula: formula_section(depth, safety_factor),
            steps: calculation_steps(form, result),
            final_result: format!(
                "Required Tremie Seal Thickness: {} ft",
                format_number(result.thickness_ft)
            ),
            rounding_note: ROUNDING_NOTE.to_string(),
            notes: NOTES.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Render the report as plain text for a terminal.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push_str("\n\n");

        out.push_str("Formula Used:\n");
        out.push_str(&format!("  {}\n", self.formula.expression));
        out.push_str("  Where:\n");
        for var in &self.formula.variables {
            out.push_str(&format!("    {}\n", var));
        }
        out.push('\n');

        out.push_str("Step-by-Step Calculations:\n");
        for step in &self.steps {
            out.push_str(&format!("  {}. {}:\n", step.number, step.heading));
            for line in &step.lines {
                out.push_str(&format!("     {}\n", line));
            }
        }
        out.push('\n');

        out.push_str("Final Result:\n");
        out.push_str(&format!("  {}\n", self.final_result));
        out.push_str(&format!("  {}\n", self.rounding_note));
        out.push('\n');

        out.push_str("Notes:\n");
        for note in &self.notes {
            out.push_str(&format!("  - {}\n", note));
        }

        out
    }
}

fn formula_section(depth: &str, safety_factor: &str) -> FormulaSection {
    let meta = Equation::RequiredThickness.metadata();

    let variables = meta
        .variables
        .iter()
        .map(|var| match var.symbol {
            "h" => format!("{} = {} ({} {})", var.symbol, var.description, depth, var.units),
            "SF" => format!("{} = {} ({})", var.symbol, var.description, safety_factor),
            _ => format!("{} = {}", var.symbol, var.description),
        })
        .collect();

    FormulaSection {
        expression: meta.formula_plain.to_string(),
        variables,
    }
}

fn calculation_steps(form: &TremieSealForm, result: &TremieSealResult) -> Vec<CalculationStep> {
    let gamma_w = format_number(WATER_DENSITY.0);
    let gamma_c = format_number(CONCRETE_DENSITY.0);
    let water_pressure = format_number(result.water_pressure_psf);
    let pressure_with_sf = format_number(result.pressure_with_sf_psf);
    let final_thickness = format_number(result.final_thickness_ft);
    let concrete_weight = format_number(result.concrete_weight_psf);

    let mut steps = vec![
        step(
            1,
            Equation::HydrostaticPressure,
            format!("{} × {} = {} psf", form.depth.trim(), gamma_w, water_pressure),
        ),
        step(
            2,
            Equation::FactoredPressure,
            format!(
                "{} × {} = {} psf",
                water_pressure,
                form.safety_factor.trim(),
                pressure_with_sf
            ),
        ),
        step(
            3,
            Equation::RequiredThickness,
            format!("{} ÷ {} = {} ft", pressure_with_sf, gamma_c, final_thickness),
        ),
        step(
            4,
            Equation::WeightVerification,
            format!("{} × {} = {} psf", gamma_c, final_thickness, concrete_weight),
        ),
    ];

    if let Some(seal) = &result.seal {
        let area = format_number(seal.area_sqft);
        let volume = format_number(seal.volume_cuft);
        steps.push(CalculationStep {
            number: 5,
            heading: "Seal Quantities".to_string(),
            lines: vec![
                format!("{} × {} = {} ft²", form.length.trim(), form.width.trim(), area),
                format!("{} × {} = {} ft³", area, format_number(result.thickness_ft), volume),
                format!(
                    "{} × {} = {} lb",
                    volume,
                    gamma_c,
                    format_number(seal.concrete_weight_lb)
                ),
            ],
        });
    }

    steps
}

fn step(number: usize, equation: Equation, line: String) -> CalculationStep {
    CalculationStep {
        number,
        heading: equation.metadata().name.to_string(),
        lines: vec![line],
    }
}
