/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Status color:
/// overtime → green
/// remaining → yellow
pub fn color_for_status(overtime: bool) -> &'static str {
    if overtime { GREEN } else { YELLOW }
}
