//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Success notices, e.g. a removed project
pub const LIME: Color = Color::Rgb(50, 205, 50);
/// Informational notices
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Validation and repository failures
pub const CRIMSON: Color = Color::Rgb(220, 20, 60);
/// Section headers and separators
pub const DIM_GRAY: Color = Color::Rgb(110, 110, 110);
/// Border of the focused pane
pub const FOCUS_BLUE: Color = Color::Rgb(95, 135, 255);
