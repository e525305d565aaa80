//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_ORG_SALARY_BAND: &str = "org.salary_band";
pub const CHECK_ORG_REPORTING_DEPTH: &str = "org.reporting_depth";

// Codes: org.salary_band
pub const CODE_MANAGER_UNDERPAID: &str = "manager_underpaid";
pub const CODE_MANAGER_OVERPAID: &str = "manager_overpaid";

// Codes: org.reporting_depth
pub const CODE_REPORTING_LINE_TOO_LONG: &str = "reporting_line_too_long";
pub const CODE_REPORTING_CYCLE: &str = "reporting_cycle";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
