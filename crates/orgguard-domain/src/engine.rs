use crate::checks;
use crate::hierarchy::HierarchyIndex;
use crate::policy::{FailOn, PolicyConfig};
use crate::report::DomainReport;
use orgguard_types::{Finding, OrgguardData, Severity, SeverityCounts, Verdict};
use std::collections::BTreeMap;
use tracing::info;

/// Runs the organization policies against an index, configured once up front.
#[derive(Clone, Debug, Default)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
}

impl PolicyEvaluator {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Salary band findings only, in report order.
    pub fn check_salary_bands(&self, index: &HierarchyIndex) -> Vec<Finding> {
        let mut findings = Vec::new();
        checks::salary_band::run(index, &self.config, &mut findings);
        findings.sort_by(compare_findings);
        findings
    }

    /// Reporting depth (and cycle) findings only, in report order.
    pub fn check_reporting_depth(&self, index: &HierarchyIndex) -> Vec<Finding> {
        let mut findings = Vec::new();
        checks::reporting_depth::run(index, &self.config, &mut findings);
        findings.sort_by(compare_findings);
        findings
    }

    pub fn evaluate(&self, index: &HierarchyIndex) -> DomainReport {
        let cfg = &self.config;
        let mut findings: Vec<Finding> = Vec::new();

        checks::run_all(index, cfg, &mut findings);

        // Deterministic ordering before truncation.
        findings.sort_by(compare_findings);

        let total = findings.len() as u32;
        let mut code_totals: BTreeMap<String, u32> = BTreeMap::new();
        for f in &findings {
            *code_totals.entry(f.code.clone()).or_default() += 1;
        }

        let mut emitted = findings;
        let mut truncated_reason: Option<String> = None;
        if emitted.len() > cfg.max_findings {
            emitted.truncate(cfg.max_findings);
            truncated_reason = Some(format!(
                "findings truncated to max_findings={}",
                cfg.max_findings
            ));
        }

        let verdict = compute_verdict(&emitted, cfg.fail_on);
        let managers_total = index.managers().count() as u32;
        let managers_evaluated = index
            .managers()
            .filter(|id| index.get(id).is_some())
            .count() as u32;

        let data = OrgguardData {
            profile: cfg.profile.clone(),
            employees_scanned: index.len() as u32,
            managers_evaluated,
            managers_skipped: managers_total - managers_evaluated,
            max_reporting_depth: cfg.max_reporting_depth,
            duplicate_ids: index.duplicate_ids().to_vec(),
            checks_run: checks::enabled_checks(cfg)
                .map(str::to_string)
                .collect(),
            counts: SeverityCounts::from_findings(&emitted),
            findings_total: total,
            findings_emitted: emitted.len() as u32,
            code_totals,
            truncated_reason,
        };

        info!(
            employees = data.employees_scanned,
            findings = data.findings_total,
            verdict = ?verdict,
            "policy evaluation finished"
        );

        DomainReport {
            verdict,
            findings: emitted,
            data,
        }
    }
}

/// Evaluate with a one-off evaluator.
pub fn evaluate(index: &HierarchyIndex, cfg: &PolicyConfig) -> DomainReport {
    PolicyEvaluator::new(cfg.clone()).evaluate(index)
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

pub(crate) fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) check_id
    // 3) code
    // 4) subject id (missing last)
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let subject_key = |f: &Finding| {
        f.subject
            .as_ref()
            .map(|s| (0, s.id.as_str().to_string()))
            .unwrap_or((1, String::new()))
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(subject_key(a).cmp(&subject_key(b)))
        .then(a.message.cmp(&b.message))
}
