//! UI module for the tremie seal GUI
//!
//! # Panel Structure
//! - `toolbar` - Title bar with the theme toggle
//! - `input_panel` - Left panel: depth, safety factor, optional seal plan
//! - `results_panel` - Right panel: formula, steps, final thickness, notes
//! - `status_bar` - Bottom status messages

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
