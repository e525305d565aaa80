use anyhow::Context;
use orgguard_render::{
    RenderableData, RenderableFinding, RenderableMagnitude, RenderableReport, RenderableSeverity,
    RenderableSubject, RenderableVerdictStatus,
};
use orgguard_types::{
    Finding, Magnitude, OrgguardData, OrgguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    SeverityCounts, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "orgguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<OrgguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse orgguard v1 report")
}

pub fn serialize_report(report: &OrgguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize v1 report")
}

pub fn to_renderable(report: &OrgguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            employees_scanned: report.data.employees_scanned,
            max_reporting_depth: report.data.max_reporting_depth,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
            checks_run: report.data.checks_run.clone(),
            code_totals: report.data.code_totals.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        subject: f.subject.as_ref().map(|s| RenderableSubject {
            id: s.id.as_str().to_string(),
            name: s.name.clone(),
        }),
        magnitude: f.magnitude.map(|m| match m {
            Magnitude::PayDelta(delta) => RenderableMagnitude::PayDelta(delta),
            Magnitude::Depth(depth) => RenderableMagnitude::Depth(depth),
        }),
        help: f.help.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding, written when a run
/// cannot complete.
pub fn runtime_error_report(message: &str) -> OrgguardReport {
    let now = OffsetDateTime::now_utc();
    let findings = vec![Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: message.to_string(),
        subject: None,
        magnitude: None,
        help: Some("Fix the tool error and re-run orgguard.".to_string()),
        fingerprint: None,
        data: serde_json::Value::Null,
    }];

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        data: OrgguardData {
            profile: "unknown".to_string(),
            counts: SeverityCounts::from_findings(&findings),
            findings_total: 1,
            findings_emitted: 1,
            ..OrgguardData::default()
        },
        findings,
    }
}
