//! # Tremie Seal GUI Application
//!
//! Form-based interface for the tremie seal thickness calculator.
//! Built with Iced for native desktops and the browser (WASM).
//!
//! The form keeps the raw text of every field. Pressing Calculate (or Enter in
//! any field) parses the text and, on success, replaces the displayed report.
//! Invalid input leaves the previous report on screen and reports the problem
//! in the status bar.

mod ui;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Size, Theme};

use tremie_core::calculations::tremie_seal::TremieSealForm;
use tremie_core::precision::format_number;
use tremie_core::report::{CalculationReport, REPORT_TITLE};

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(980.0, 760.0))
        .run()
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    /// Raw text of the form fields
    pub form: TremieSealForm,
    /// Report from the last successful calculation
    pub report: Option<CalculationReport>,
    /// Status bar message
    pub status: String,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    DepthChanged(String),
    SafetyFactorChanged(String),
    LengthChanged(String),
    WidthChanged(String),
    Calculate,
    ToggleDarkMode,
}

impl App {
    fn new() -> Self {
        App {
            form: TremieSealForm::default(),
            report: None,
            status: "Ready".to_string(),
            dark_mode: false,
        }
    }

    fn title(&self) -> String {
        REPORT_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::DepthChanged(value) => self.form.depth = value,
            Message::SafetyFactorChanged(value) => self.form.safety_factor = value,
            Message::LengthChanged(value) => self.form.length = value,
            Message::WidthChanged(value) => self.form.width = value,
            Message::Calculate => self.calculate(),
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
    }

    fn calculate(&mut self) {
        match self.form.compute() {
            Ok(result) => {
                self.status = format!(
                    "Required thickness {} ft",
                    format_number(result.thickness_ft)
                );
                self.report = Some(CalculationReport::new(&self.form, &result));
            }
            Err(e) => {
                // Previous report stays on screen
                self.status = e.to_string();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(&self.form),
            ui::results_panel::view_results_panel(self.report.as_ref()),
        ]
        .spacing(10)
        .height(Length::Fill);

        let content = column![
            ui::toolbar::view_header(self.dark_mode),
            rule::horizontal(1),
            panels,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(8)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(depth: &str, safety_factor: &str) -> App {
        let mut app = App::new();
        app.update(Message::DepthChanged(depth.to_string()));
        app.update(Message::SafetyFactorChanged(safety_factor.to_string()));
        app
    }

    #[test]
    fn test_defaults() {
        let app = App::new();
        assert_eq!(app.form.depth, "");
        assert_eq!(app.form.safety_factor, "1.5");
        assert!(app.report.is_none());
    }

    #[test]
    fn test_calculate_shows_report() {
        let mut app = app_with("10", "1.5");
        app.update(Message::Calculate);
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.final_result, "Required Tremie Seal Thickness: 6.3 ft");
        assert_eq!(app.status, "Required thickness 6.3 ft");
    }

    #[test]
    fn test_invalid_input_keeps_previous_report() {
        let mut app = app_with("10", "1.5");
        app.update(Message::Calculate);
        let before = app.report.clone();

        app.update(Message::DepthChanged("ten".to_string()));
        app.update(Message::Calculate);

        assert_eq!(app.report, before);
        assert!(app.status.contains("depth_ft"));
    }

    #[test]
    fn test_invalid_input_without_previous_report() {
        let mut app = App::new();
        app.update(Message::Calculate);
        assert!(app.report.is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = App::new();
        assert_eq!(app.theme(), Theme::Light);
        app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }
}
