//! Toolbar component
//!
//! Application title, one-line summary, and the light/dark theme toggle.

use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use tremie_core::report::{REPORT_SUMMARY, REPORT_TITLE};

use crate::Message;

/// Render the application header
pub fn view_header(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let title_row = row![
        text(REPORT_TITLE).size(24),
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    column![
        title_row,
        text(REPORT_SUMMARY).size(12).color([0.5, 0.5, 0.5]),
    ]
    .spacing(4)
    .into()
}
