//! ANSI color helper utilities for terminal output.

use crate::models::{Action, FieldStatus};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Correct field → green, incorrect → red, unknown → grey.
pub fn color_for_status(status: Option<FieldStatus>) -> &'static str {
    match status {
        Some(FieldStatus::Correct) => GREEN,
        Some(FieldStatus::Incorrect) => RED,
        None => GREY,
    }
}

/// Open shifts stand out in yellow.
pub fn color_for_action(action: Option<Action>) -> &'static str {
    match action {
        Some(Action::ClockIn) => YELLOW,
        Some(Action::ClockedInOut) => CYAN,
        None => GREY,
    }
}

/// Greys out empty cells ("--" or blank).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
