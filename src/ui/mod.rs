//! Terminal styling shared by the CLI commands.

pub mod style;
