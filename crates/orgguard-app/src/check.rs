//! The `check` use case: load a roster, evaluate policy, and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use orgguard_domain::{HierarchyIndex, PolicyEvaluator};
use orgguard_settings::{OrgguardConfigV1, Overrides, ResolvedConfig};
use orgguard_types::{OrgguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Verdict};
use time::OffsetDateTime;
use tracing::debug;

use crate::report::tool_meta;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Roster CSV to evaluate.
    pub roster_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: OrgguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, load the roster, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        OrgguardConfigV1::default()
    } else {
        orgguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = orgguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    debug!(
        profile = %resolved.effective.profile,
        max_depth = resolved.effective.max_reporting_depth,
        "resolved config"
    );

    let employees = orgguard_roster::load_roster(input.roster_path)
        .with_context(|| format!("load roster {}", input.roster_path))?;
    let index = HierarchyIndex::build(employees);

    let domain_report = PolicyEvaluator::new(resolved.effective.clone()).evaluate(&index);
    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
