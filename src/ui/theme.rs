use crossterm::style::Color;

/// Design tokens for Roadie CLI output.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";

    // Command identifiers (used in headers).
    pub const TEST: &str = "🧪";
    pub const CLEAN: &str = "🧹";
    pub const STAMP: &str = "🏷";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";

    pub const TEST: &str = "[TEST]";
    pub const CLEAN: &str = "[CLEAN]";
    pub const STAMP: &str = "[STAMP]";
}
