//! Stable DTOs and IDs used across the orgguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - the employee identifier newtype
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod employee_id;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use employee_id::EmployeeId;
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Finding, FindingKind, Magnitude, OrgguardData, OrgguardReport, ReportEnvelope,
    SCHEMA_REPORT_V1, Severity, SeverityCounts, Subject, ToolMeta, Verdict,
};
