use crate::RenderableReport;
use crate::sections::{describe, group};

/// Plain-text report for terminals.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    let max_depth = report.data.max_reporting_depth;

    out.push_str(&format!("orgguard: {}\n", report.verdict.label()));
    out.push_str(&format!(
        "Profile: {} | Employees scanned: {} | Findings: {} (emitted) / {} (total)\n",
        report.data.profile,
        report.data.employees_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));
    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("Note: {}\n", r));
    }

    let (sections, other) = group(report);
    for section in &sections {
        out.push_str(&format!("\n{}:\n", section.title));
        for f in &section.findings {
            out.push_str(&format!(
                "  [{}] {}\n",
                f.severity.label(),
                describe(f, max_depth)
            ));
        }
        if let Some(note) = &section.note {
            out.push_str(&format!("  {}\n", note));
        }
    }

    if !other.is_empty() {
        out.push_str("\nOther findings:\n");
        for f in other {
            out.push_str(&format!(
                "  [{}] {}: {}\n",
                f.severity.label(),
                f.code,
                f.message
            ));
        }
    }

    out
}
