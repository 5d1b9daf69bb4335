use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::Reset,
            ThemeColor::Second => Color::DarkGrey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

/// # colored println
///
/// Print a line in theme color, then reset the color.
///
/// Output errors are ignored, a broken console never fails a download.
pub fn colored_println<W: Write>(out: &mut W, color: ThemeColor, msg: &str) {
    let _ = execute!(
        out,
        SetForegroundColor(color.into()),
        Print(msg),
        ResetColor,
        Print("\n"),
    );
}
