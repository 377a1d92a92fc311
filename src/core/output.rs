//! Output formatting for messages printed outside the terminal UI.
//!
//! Everything here goes to stderr: stdout is never used while the alternate
//! screen is active, and fatal diagnostics must not mix with program output.

use colored::*;

/// Formats an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
pub fn format_error(message: &str) -> String {
    format!("{} {}", "✕ Error:".red(), message.white())
}

/// Prints an error message to stderr with consistent styling
pub fn print_error(message: &str) {
    eprintln!("\n{}\n", format_error(message));
}

/// Prints an internal defect report, asking the user to file a bug
pub fn print_defect(message: &str) {
    eprintln!(
        "\n{}\n{}\n",
        format_error(message),
        "This is a bug in git-iadd, please report it.".bright_black()
    );
}
