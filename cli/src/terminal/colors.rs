//! Color palette for terminal output.

use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const AMOUNT: Color = Color::BrightYellow;
pub const TAX: Color = Color::BrightMagenta;
