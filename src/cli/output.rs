//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::application::services::VisibleRow;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print one tree row indented by its level
pub fn row(row: &VisibleRow, indent: usize) {
    println!("{}", format_row(row, indent));
}

/// Plain text of a tree row: marker, icon, label and id.
///
/// `▾` expanded, `▸` collapsed, blank for leaves.
pub fn format_row(row: &VisibleRow, indent: usize) -> String {
    let marker = match (row.has_children, row.expanded) {
        (true, true) => "▾",
        (true, false) => "▸",
        (false, _) => " ",
    };
    let pad = " ".repeat(row.level * indent);
    let id = row
        .id
        .as_deref()
        .map(|id| format!(" {}", format!("#{id}").dimmed()))
        .unwrap_or_default();
    format!(
        "{}{} {} {}{}",
        pad,
        marker,
        format!("[{}]", row.icon).dimmed(),
        row.label,
        id
    )
}
