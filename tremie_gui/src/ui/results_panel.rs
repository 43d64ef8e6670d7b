//! Results Panel (Right)
//!
//! Shows the report from the last successful calculation:
//! - Formula with its variables
//! - Step-by-step calculations
//! - Final rounded-up thickness
//!
//! The standing notes are always shown at the bottom.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use tremie_core::report::{CalculationReport, NOTES};

use crate::Message;

/// Render the results panel
pub fn view_results_panel(report: Option<&CalculationReport>) -> Element<'_, Message> {
    let content: Column<'_, Message> = match report {
        Some(report) => view_report(report),
        None => column![
            text("Enter a water depth and press Calculate.").size(12).color([0.5, 0.5, 0.5]),
        ],
    };

    let content = content.push(Space::new().height(15)).push(view_notes());

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(60))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_report(report: &CalculationReport) -> Column<'_, Message> {
    let mut formula = column![
        text("Formula Used:").size(14),
        Space::new().height(4),
        text(report.formula.expression.as_str()).size(13),
        text("Where:").size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);
    for variable in &report.formula.variables {
        formula = formula.push(text(format!("  {}", variable)).size(10).color([0.5, 0.5, 0.5]));
    }

    let mut steps = column![text("Step-by-Step Calculations:").size(14), Space::new().height(4)].spacing(4);
    for step in &report.steps {
        steps = steps.push(text(format!("{}. {}:", step.number, step.heading)).size(11));
        for line in &step.lines {
            steps = steps.push(text(format!("    {}", line)).size(11));
        }
    }

    let final_result = column![
        text("Final Result:").size(14),
        Space::new().height(4),
        text(report.final_result.as_str()).size(14).color([0.2, 0.6, 0.2]),
        text(report.rounding_note.as_str()).size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);

    column![
        formula,
        Space::new().height(12),
        steps,
        Space::new().height(12),
        final_result,
    ]
}

fn view_notes() -> Element<'static, Message> {
    let mut notes = column![text("Notes:").size(11).color([0.5, 0.5, 0.5])].spacing(2);
    for note in NOTES {
        notes = notes.push(text(format!("• {}", note)).size(10).color([0.5, 0.5, 0.5]));
    }
    notes.into()
}
