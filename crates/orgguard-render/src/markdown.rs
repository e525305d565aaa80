use crate::RenderableReport;
use crate::sections::{describe, group};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();
    let max_depth = report.data.max_reporting_depth;

    out.push_str("# Orgguard report\n\n");
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Employees scanned: {}\n- Findings: {} (emitted) / {} (total)\n\n",
        report.verdict.label(),
        report.data.profile,
        report.data.employees_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    let (sections, other) = group(report);
    for section in &sections {
        out.push_str(&format!("## {}\n\n", section.title));
        for f in &section.findings {
            out.push_str(&format!(
                "- [{}] {}\n",
                f.severity.label(),
                describe(f, max_depth)
            ));
            if let Some(help) = &f.help {
                out.push_str(&format!("  - help: {}\n", help));
            }
        }
        if !section.findings.is_empty() {
            out.push('\n');
        }
        if let Some(note) = &section.note {
            out.push_str(&format!("{}\n\n", note));
        }
    }

    if !other.is_empty() {
        out.push_str("## Other findings\n\n");
        for f in other {
            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                f.severity.label(),
                f.check_id.as_deref().unwrap_or(""),
                f.code,
                f.message
            ));
        }
        out.push('\n');
    }

    out
}
