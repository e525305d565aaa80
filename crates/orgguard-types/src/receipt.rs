use crate::{EmployeeId, ids};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for orgguard reports.
pub const SCHEMA_REPORT_V1: &str = "orgguard.report.v1";

/// Severity is intentionally small: it maps cleanly to exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// The kinds of policy violation orgguard can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FindingKind {
    ManagerUnderpaid,
    ManagerOverpaid,
    ReportingLineTooLong,
    ReportingCycle,
}

impl FindingKind {
    pub const ALL: [FindingKind; 4] = [
        FindingKind::ManagerUnderpaid,
        FindingKind::ManagerOverpaid,
        FindingKind::ReportingLineTooLong,
        FindingKind::ReportingCycle,
    ];

    pub fn check_id(self) -> &'static str {
        match self {
            FindingKind::ManagerUnderpaid | FindingKind::ManagerOverpaid => {
                ids::CHECK_ORG_SALARY_BAND
            }
            FindingKind::ReportingLineTooLong | FindingKind::ReportingCycle => {
                ids::CHECK_ORG_REPORTING_DEPTH
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FindingKind::ManagerUnderpaid => ids::CODE_MANAGER_UNDERPAID,
            FindingKind::ManagerOverpaid => ids::CODE_MANAGER_OVERPAID,
            FindingKind::ReportingLineTooLong => ids::CODE_REPORTING_LINE_TOO_LONG,
            FindingKind::ReportingCycle => ids::CODE_REPORTING_CYCLE,
        }
    }

    pub fn from_code(code: &str) -> Option<FindingKind> {
        FindingKind::ALL.into_iter().find(|k| k.code() == code)
    }
}

/// The employee a finding is about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Subject {
    pub id: EmployeeId,
    pub name: String,
}

/// Kind-specific size of a violation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Magnitude {
    /// Salary difference needed to get back inside the band.
    PayDelta(f64),
    /// Number of managers in a reporting chain (or members of a cycle).
    Depth(u32),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<Magnitude>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending: a hash of
    /// `check_id + code + subject id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

impl Finding {
    /// The policy kind of this finding, if it came from a policy check.
    pub fn kind(&self) -> Option<FindingKind> {
        FindingKind::from_code(&self.code).filter(|k| k.check_id() == self.check_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Orgguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct OrgguardData {
    pub profile: String,

    pub employees_scanned: u32,
    /// Managers whose own record was found and whose band was checked.
    pub managers_evaluated: u32,
    /// Manager ids with direct reports but no record of their own.
    pub managers_skipped: u32,
    pub max_reporting_depth: u32,

    /// Identifiers that appeared more than once in the roster (last record wins).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_ids: Vec<EmployeeId>,

    /// Check ids that were enabled and evaluated. Empty when evaluation never started.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks_run: Vec<String>,

    pub counts: SeverityCounts,
    pub findings_total: u32,
    pub findings_emitted: u32,

    /// Findings per code before truncation; codes with no findings are absent.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub code_totals: BTreeMap<String, u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// A generic report envelope.
///
/// Keeping this generic allows tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = OrgguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type OrgguardReport = ReportEnvelope<OrgguardData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_code() {
        for kind in FindingKind::ALL {
            assert_eq!(FindingKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(FindingKind::from_code("runtime_error"), None);
    }

    #[test]
    fn magnitude_serializes_with_unit_tag() {
        let json = serde_json::to_value(Magnitude::Depth(5)).expect("serialize");
        assert_eq!(json, serde_json::json!({"unit": "depth", "value": 5}));

        let json = serde_json::to_value(Magnitude::PayDelta(12.5)).expect("serialize");
        assert_eq!(json, serde_json::json!({"unit": "pay_delta", "value": 12.5}));
    }

    #[test]
    fn finding_kind_requires_matching_check_id() {
        let finding = Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_ORG_SALARY_BAND.to_string(),
            code: ids::CODE_REPORTING_CYCLE.to_string(),
            message: "mismatched".to_string(),
            subject: None,
            magnitude: None,
            help: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        assert_eq!(finding.kind(), None);
    }

    #[test]
    fn severity_counts_tally_each_level() {
        let mk = |severity| Finding {
            severity,
            check_id: ids::CHECK_ORG_SALARY_BAND.to_string(),
            code: ids::CODE_MANAGER_UNDERPAID.to_string(),
            message: String::new(),
            subject: None,
            magnitude: None,
            help: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let counts = SeverityCounts::from_findings(&[
            mk(Severity::Error),
            mk(Severity::Warning),
            mk(Severity::Warning),
        ]);
        assert_eq!(counts.error, 1);
        assert_eq!(counts.warning, 2);
        assert_eq!(counts.info, 0);
    }

    #[test]
    fn data_without_run_details_still_parses() {
        let json = serde_json::json!({
            "profile": "strict",
            "employees_scanned": 0,
            "managers_evaluated": 0,
            "managers_skipped": 0,
            "max_reporting_depth": 4,
            "counts": {"info": 0, "warning": 0, "error": 0},
            "findings_total": 0,
            "findings_emitted": 0
        });
        let data: OrgguardData = serde_json::from_value(json).expect("deserialize");
        assert!(data.checks_run.is_empty());
        assert!(data.code_totals.is_empty());
    }
}
