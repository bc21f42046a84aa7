use console::style;
use std::fmt::Display;

/// Green bold: accepted edits, successful pushes
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: article titles, section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: guardrail and policy warnings
pub fn warn<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold: refusals and errors
pub fn failure<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Cyan bold: edit numbers and type tags
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan underlined: article URLs
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Colour one line of a unified diff by its leading marker.
pub fn diff_line(line: &str) -> String {
    if line.starts_with("---") || line.starts_with("+++") {
        style(line).bold().to_string()
    } else if line.starts_with("@@") {
        style(line).cyan().to_string()
    } else if line.starts_with('-') {
        style(line).red().to_string()
    } else if line.starts_with('+') {
        style(line).green().to_string()
    } else {
        line.to_string()
    }
}
