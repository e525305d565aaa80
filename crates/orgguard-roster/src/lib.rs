//! Roster adapters: read and parse employee CSV files.
//!
//! This crate is allowed to do filesystem IO. Parsing itself works on strings so callers
//! (and tests) can feed rosters from anywhere.

#![forbid(unsafe_code)]

mod error;
mod parse;

use camino::Utf8Path;
use orgguard_domain::Employee;
use tracing::debug;

pub use error::RosterError;
pub use parse::{EXPECTED_HEADER, parse_roster};

/// Read a roster file and parse it.
pub fn load_roster(path: &Utf8Path) -> Result<Vec<Employee>, RosterError> {
    let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_owned(),
        source,
    })?;
    let employees = parse_roster(&text)?;
    debug!(path = %path, employees = employees.len(), "loaded roster");
    Ok(employees)
}
