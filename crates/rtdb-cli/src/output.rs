//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use rtdb_core::UserRecord;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a user document as labeled fields.
pub fn user(record: &UserRecord) {
    let missing = "(none)".dimmed().to_string();
    field(
        "First name",
        record.first_name.as_deref().unwrap_or(&missing),
    );
    field("Last name", record.last_name.as_deref().unwrap_or(&missing));
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
