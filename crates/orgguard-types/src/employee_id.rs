use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of an employee as it appears in the roster.
///
/// Identifiers are opaque: `"0123"` and `"123"` are different employees.
/// Surrounding whitespace is trimmed on construction so roster columns compare cleanly.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EmployeeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        EmployeeId::new(value)
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        EmployeeId::new(value)
    }
}
