//! The `explain` use case: look up check/code documentation.

use orgguard_types::explain::{self, Explanation};
use orgguard_types::{FindingKind, ids};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check_ids and codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a check_id or code.
///
/// Identifiers are matched after trimming and lowercasing, so `Manager_Underpaid`
/// finds `manager_underpaid`.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let key = identifier.trim().to_ascii_lowercase();
    match explain::lookup_explanation(&key) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();
    let underline = "=".repeat(exp.title.len());

    out.push_str(&format!("{}\n{}\n\n", exp.title, underline));
    out.push_str(&format!("{}\n\n", exp.description));
    out.push_str(&format!("Remediation\n-----------\n{}\n\n", exp.remediation));
    out.push_str("Examples\n--------\n\n");
    out.push_str(&format!(
        "Before (violation):\n```csv\n{}\n```\n\n",
        exp.examples.before
    ));
    out.push_str(&format!(
        "After (fixed):\n```csv\n{}\n```\n",
        exp.examples.after
    ));

    out
}

/// Format the "not found" error message for terminal display.
///
/// Codes are listed with the check that emits them.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Unknown check_id or code: {}\n\n", identifier));

    out.push_str("Available check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out.push_str("\nAvailable codes:\n");
    for code in codes {
        match emitting_check(code) {
            Some(check) => out.push_str(&format!("  - {} ({})\n", code, check)),
            None => out.push_str(&format!("  - {}\n", code)),
        }
    }

    out
}

fn emitting_check(code: &str) -> Option<&'static str> {
    FindingKind::from_code(code)
        .map(FindingKind::check_id)
        .or_else(|| (code == ids::CODE_RUNTIME_ERROR).then_some(ids::CHECK_TOOL_RUNTIME))
}
