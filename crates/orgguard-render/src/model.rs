use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSubject {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderableMagnitude {
    /// Salary change needed to get back into the band.
    PayDelta(f64),
    /// Number of managers (or cycle members).
    Depth(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub subject: Option<RenderableSubject>,
    pub magnitude: Option<RenderableMagnitude>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub employees_scanned: u32,
    pub max_reporting_depth: u32,
    pub findings_emitted: u32,
    pub findings_total: u32,
    pub truncated_reason: Option<String>,
    /// Check ids that were evaluated; empty when evaluation never started.
    pub checks_run: Vec<String>,
    /// Findings per code before truncation.
    pub code_totals: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

impl RenderableVerdictStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            RenderableVerdictStatus::Pass => "PASS",
            RenderableVerdictStatus::Warn => "WARN",
            RenderableVerdictStatus::Fail => "FAIL",
        }
    }
}

impl RenderableSeverity {
    pub(crate) fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        }
    }
}
