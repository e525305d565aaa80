use crate::{RenderableData, RenderableFinding, RenderableMagnitude, RenderableReport};
use orgguard_types::{FindingKind, ids};

/// One block of the report: every finding of a single code.
pub(crate) struct Section<'a> {
    pub title: &'static str,
    pub findings: Vec<&'a RenderableFinding>,
    /// Printed after the items, or alone when there are none.
    pub note: Option<String>,
}

const KINDS: [(FindingKind, &str); 4] = [
    (
        FindingKind::ManagerUnderpaid,
        "Managers earning less than they should",
    ),
    (
        FindingKind::ManagerOverpaid,
        "Managers earning more than they should",
    ),
    (
        FindingKind::ReportingLineTooLong,
        "Employees with too long a reporting line",
    ),
    (FindingKind::ReportingCycle, "Reporting cycles"),
];

/// Split findings into the fixed kind sections, in report order, plus anything else
/// (runtime errors, codes from newer tool versions).
///
/// A report where no check ran (the roster never loaded) has no kind sections.
pub(crate) fn group(report: &RenderableReport) -> (Vec<Section<'_>>, Vec<&RenderableFinding>) {
    let sections = if report.data.checks_run.is_empty() {
        Vec::new()
    } else {
        KINDS
            .iter()
            .map(|&(kind, title)| {
                let findings: Vec<&RenderableFinding> = report
                    .findings
                    .iter()
                    .filter(|f| f.code == kind.code())
                    .collect();
                Section {
                    title,
                    note: section_note(&report.data, kind, findings.len()),
                    findings,
                }
            })
            .collect()
    };

    let other = report
        .findings
        .iter()
        .filter(|f| KINDS.iter().all(|(kind, _)| f.code != kind.code()))
        .collect();

    (sections, other)
}

/// The absence line is only printed when the check ran and found nothing, even
/// before truncation.
fn section_note(data: &RenderableData, kind: FindingKind, shown: usize) -> Option<String> {
    if !data.checks_run.iter().any(|c| c == kind.check_id()) {
        return Some(format!("Not evaluated: {} is disabled.", kind.check_id()));
    }

    let total = data
        .code_totals
        .get(kind.code())
        .map_or(0, |&n| n as usize)
        .max(shown);
    if total == 0 {
        if data.code_totals.is_empty() && data.findings_emitted < data.findings_total {
            return Some("Unknown: findings truncated before this section.".to_string());
        }
        return Some(absence_line(kind.code(), data.max_reporting_depth));
    }

    match total - shown {
        0 => None,
        hidden if shown == 0 => Some(format!("{hidden} not shown (findings truncated).")),
        hidden => Some(format!("{hidden} more not shown (findings truncated).")),
    }
}

fn absence_line(code: &str, max_depth: u32) -> String {
    match code {
        ids::CODE_MANAGER_UNDERPAID => "No managers earn less than they should.".to_string(),
        ids::CODE_MANAGER_OVERPAID => "No managers earn more than they should.".to_string(),
        ids::CODE_REPORTING_LINE_TOO_LONG => format!(
            "No employees have more than {max_depth} managers between them and the CEO."
        ),
        _ => "No reporting cycles detected.".to_string(),
    }
}

/// One-line description of a finding, with amounts to two decimals.
///
/// Falls back to the finding message when the subject or magnitude is missing.
pub(crate) fn describe(finding: &RenderableFinding, max_depth: u32) -> String {
    let (Some(subject), Some(magnitude)) = (&finding.subject, finding.magnitude) else {
        return finding.message.clone();
    };
    let who = format!("{} ({})", subject.name, subject.id);

    match (finding.code.as_str(), magnitude) {
        (ids::CODE_MANAGER_UNDERPAID, RenderableMagnitude::PayDelta(delta)) => {
            format!("{who} earns {delta:.2} less than they should")
        }
        (ids::CODE_MANAGER_OVERPAID, RenderableMagnitude::PayDelta(delta)) => {
            format!("{who} earns {delta:.2} more than they should")
        }
        (ids::CODE_REPORTING_LINE_TOO_LONG, RenderableMagnitude::Depth(depth)) => format!(
            "{who} has {depth} managers between them and the CEO, {} too many",
            depth.saturating_sub(max_depth)
        ),
        _ => finding.message.clone(),
    }
}
