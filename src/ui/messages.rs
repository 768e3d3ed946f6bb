//! User-facing status lines: a coloured icon followed by the message.
//! Errors go to stderr, everything else to stdout.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// `NO_COLOR` disables the ANSI styling.
fn styled(style: Style, icon: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        icon.to_string()
    } else {
        style.paint(icon).to_string()
    }
}

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", styled(colour.bold(), icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}
