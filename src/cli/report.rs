//! Report formatting and printing utilities.
//!
//! Separate from the lookup logic so langkey can be used as a library.

use std::{
    fmt::Display,
    io::{self, Write},
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print an error to stderr in `error: message` form.
pub fn print_error(err: &dyn Display) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Print an error to a custom writer.
pub fn print_error_to<W: Write>(err: &dyn Display, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
}

/// Print a success line prefixed with the success mark.
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print `(key, type)` rows with the type column aligned.
pub fn print_keys(rows: &[(String, &'static str)]) {
    print_keys_to(rows, &mut io::stdout().lock());
}

/// Print key rows to a custom writer.
///
/// Alignment uses display width so wide characters in keys line up.
pub fn print_keys_to<W: Write>(rows: &[(String, &'static str)], writer: &mut W) {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);

    for (key, type_name) in rows {
        let padding = " ".repeat(key_width - key.width());
        let _ = writeln!(writer, "{}{}  {}", key, padding, type_name.dimmed());
    }
}
