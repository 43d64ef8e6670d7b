//! # Equation Registry
//!
//! Every formula used by the tremie seal calculation, with its variables and
//! units. The registry drives the "Where:" list in reports and the equation
//! reference printed by `tremie_cli --equations`.
//!
//! ## Usage
//!
//! ```rust
//! use tremie_core::equations::Equation;
//!
//! let meta = Equation::RequiredThickness.metadata();
//! assert_eq!(meta.formula_plain, "t = (γw × h × SF) / γc");
//! assert_eq!(meta.variables.len(), 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::SealMaterial;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Hydrostatic uplift on the seal
    Pressure,
    /// Seal thickness from pressure balance
    Thickness,
    /// Check that the seal weight matches the factored uplift
    Verification,
    /// Plan quantities for ordering concrete
    Quantities,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Pressure => "Pressure",
            EquationCategory::Thickness => "Thickness",
            EquationCategory::Verification => "Verification",
            EquationCategory::Quantities => "Seal Quantities",
        }
    }

    /// Sort order in the reference (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Pressure => 1,
            EquationCategory::Thickness => 2,
            EquationCategory::Verification => 3,
            EquationCategory::Quantities => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Symbol (e.g., "h", "γw")
    pub symbol: &'static str,
    /// Description
    pub description: String,
    /// Units (e.g., "ft", "psf"); empty for dimensionless
    pub units: &'static str,
}

impl Variable {
    pub fn new(symbol: &'static str, description: impl Into<String>, units: &'static str) -> Self {
        Self {
            symbol,
            description: description.into(),
            units,
        }
    }

    fn material(material: SealMaterial) -> Self {
        Self::new(material.symbol(), material.label(), "pcf")
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the tremie seal calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// p = γw × h
    HydrostaticPressure,
    /// p_SF = p × SF
    FactoredPressure,
    /// t = (γw × h × SF) / γc
    RequiredThickness,
    /// w_c = γc × t
    WeightVerification,
    /// A = L × B
    SealArea,
    /// V = A × t_r
    SealVolume,
    /// W = V × γc
    SealWeight,
}

/// All equations in reference order.
pub const ALL_EQUATIONS: [Equation; 7] = [
    Equation::HydrostaticPressure,
    Equation::FactoredPressure,
    Equation::RequiredThickness,
    Equation::WeightVerification,
    Equation::SealArea,
    Equation::SealVolume,
    Equation::SealWeight,
];

impl Equation {
    /// Full metadata for this equation.
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::HydrostaticPressure => EquationMetadata {
                name: "Water Pressure at Depth",
                description: "Hydrostatic uplift acting on the underside of the seal.",
                formula_plain: "p = γw × h",
                variables: vec![
                    Variable::new("p", "Water pressure", "psf"),
                    Variable::material(SealMaterial::Water),
                    Variable::new("h", "Water depth at tremie level", "ft"),
                ],
                assumptions: vec!["Water pressure calculated at tremie level"],
                category: EquationCategory::Pressure,
            },
            Equation::FactoredPressure => EquationMetadata {
                name: "Water Pressure with Safety Factor",
                description: "Uplift the seal must resist, including the factor of safety.",
                formula_plain: "p_SF = p × SF",
                variables: vec![
                    Variable::new("p_SF", "Factored water pressure", "psf"),
                    Variable::new("p", "Water pressure", "psf"),
                    Variable::new("SF", "Safety Factor", ""),
                ],
                assumptions: vec!["Safety factor applied to water pressure"],
                category: EquationCategory::Pressure,
            },
            Equation::RequiredThickness => EquationMetadata {
                name: "Required Thickness",
                description: "Concrete thickness whose self-weight balances the factored uplift.",
                formula_plain: "t = (γw × h × SF) / γc",
                variables: vec![
                    Variable::new("t", "Tremie thickness", "ft"),
                    Variable::material(SealMaterial::Water),
                    Variable::new("h", "Water depth", "ft"),
                    Variable::new("SF", "Safety Factor", ""),
                    Variable::material(SealMaterial::Concrete),
                ],
                assumptions: vec![
                    "Uses simplified \"feel\" approach focusing on pressure balance",
                    "Skin friction and cofferdam bond are neglected",
                ],
                category: EquationCategory::Thickness,
            },
            Equation::WeightVerification => EquationMetadata {
                name: "Concrete Weight Verification",
                description: "Seal self-weight per unit area; equals the factored pressure.",
                formula_plain: "w_c = γc × t",
                variables: vec![
                    Variable::new("w_c", "Concrete weight per unit area", "psf"),
                    Variable::material(SealMaterial::Concrete),
                    Variable::new("t", "Tremie thickness (unrounded)", "ft"),
                ],
                assumptions: vec![],
                category: EquationCategory::Verification,
            },
            Equation::SealArea => EquationMetadata {
                name: "Seal Plan Area",
                description: "Plan area of a rectangular cofferdam.",
                formula_plain: "A = L × B",
                variables: vec![
                    Variable::new("A", "Seal plan area", "ft²"),
                    Variable::new("L", "Seal length", "ft"),
                    Variable::new("B", "Seal width", "ft"),
                ],
                assumptions: vec!["Rectangular plan"],
                category: EquationCategory::Quantities,
            },
            Equation::SealVolume => EquationMetadata {
                name: "Seal Concrete Volume",
                description: "Concrete volume at the construction thickness.",
                formula_plain: "V = A × t_r",
                variables: vec![
                    Variable::new("V", "Seal volume", "ft³"),
                    Variable::new("A", "Seal plan area", "ft²"),
                    Variable::new("t_r", "Thickness rounded up to 0.1 ft", "ft"),
                ],
                assumptions: vec!["No allowance for waste or overbreak"],
                category: EquationCategory::Quantities,
            },
            Equation::SealWeight => EquationMetadata {
                name: "Seal Concrete Weight",
                description: "Total weight of the placed seal.",
                formula_plain: "W = V × γc",
                variables: vec![
                    Variable::new("W", "Seal weight", "lb"),
                    Variable::new("V", "Seal volume", "ft³"),
                    Variable::material(SealMaterial::Concrete),
                ],
                assumptions: vec![],
                category: EquationCategory::Quantities,
            },
        }
    }

    /// Equations in a category, in reference order.
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }

    /// All categories that have equations, sorted.
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = Vec::new();
        for eq in ALL_EQUATIONS {
            let category = eq.metadata().category;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

/// Render the equation reference as markdown.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str("# Tremie Seal Equations Reference\n\n");
    output.push_str("All formulas used by the tremie seal calculator, in calculation order.\n\n");

    for category in Equation::all_categories() {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in Equation::in_category(category) {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    let units = if var.units.is_empty() { "-" } else { var.units };
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, units));
                }
                output.push('\n');
            }

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_has_variables() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.variables.is_empty(), "{} has no variables", meta.name);
            assert!(!meta.formula_plain.is_empty());
        }
    }

    #[test]
    fn test_required_thickness_variables() {
        let meta = Equation::RequiredThickness.metadata();
        let symbols: Vec<_> = meta.variables.iter().map(|v| v.symbol).collect();
        assert_eq!(symbols, vec!["t", "γw", "h", "SF", "γc"]);
        assert_eq!(meta.variables[1].description, "Water density (62.4 pcf)");
        assert_eq!(meta.variables[4].description, "Concrete density (150 pcf)");
    }

    #[test]
    fn test_categories_sorted() {
        let categories = Equation::all_categories();
        assert_eq!(
            categories,
            vec![
                EquationCategory::Pressure,
                EquationCategory::Thickness,
                EquationCategory::Verification,
                EquationCategory::Quantities,
            ]
        );
        assert_eq!(Equation::in_category(EquationCategory::Quantities).len(), 3);
    }

    #[test]
    fn test_markdown_contains_all_equations() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().name));
        }
        assert!(markdown.contains("| SF | Safety Factor | - |"));
    }
}
