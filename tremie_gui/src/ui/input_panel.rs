//! Input Panel (Left)
//!
//! Text fields for the calculator form. Values are kept as typed; nothing is
//! parsed until Calculate is pressed. Enter in any field also calculates.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use tremie_core::calculations::tremie_seal::TremieSealForm;

use crate::Message;

/// Render the input panel
pub fn view_input_panel(form: &TremieSealForm) -> Element<'_, Message> {
    let panel = column![
        text("Inputs").size(14),
        Space::new().height(8),
        labeled_input(
            "Water Depth (ft):",
            "Enter water depth",
            &form.depth,
            Message::DepthChanged,
        ),
        labeled_input(
            "Factor of Safety:",
            "Enter safety factor",
            &form.safety_factor,
            Message::SafetyFactorChanged,
        ),
        Space::new().height(12),
        text("Seal Plan (optional)").size(12),
        labeled_input("Length (ft):", "", &form.length, Message::LengthChanged),
        labeled_input("Width (ft):", "", &form.width, Message::WidthChanged),
        text("Fill both to get concrete quantities.").size(10).color([0.5, 0.5, 0.5]),
        Space::new().height(12),
        button(text("Calculate Thickness").size(12))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 12]))
            .style(button::primary)
            .width(Length::Fill),
    ]
    .spacing(6);

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(40))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(120.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
