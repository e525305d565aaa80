use crate::fingerprint::fingerprint_for_subject;
use crate::model::Employee;
use globset::{Glob, GlobSet, GlobSetBuilder};
use orgguard_types::{Finding, FindingKind, Magnitude, Severity, Subject};
use serde_json::Value;
use tracing::warn;

/// Compile the allowlist globs of a check.
///
/// Patterns are validated in `orgguard-settings`; an invalid one that slips through is
/// logged and ignored rather than failing the run.
pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => warn!(pattern = %pattern, error = %err, "ignoring invalid allow pattern"),
        }
    }
    match builder.build() {
        Ok(set) => Some(set),
        Err(err) => {
            warn!(error = %err, "ignoring allowlist that failed to compile");
            None
        }
    }
}

pub fn is_allowed(allow: Option<&GlobSet>, employee: &Employee) -> bool {
    allow
        .map(|set| set.is_match(employee.id.as_str()))
        .unwrap_or(false)
}

pub fn subject_of(employee: &Employee) -> Subject {
    Subject {
        id: employee.id.clone(),
        name: employee.display_name(),
    }
}

pub fn policy_finding(
    kind: FindingKind,
    severity: Severity,
    subject: &Employee,
    magnitude: Magnitude,
    message: String,
    help: &str,
    data: Value,
) -> Finding {
    Finding {
        severity,
        check_id: kind.check_id().to_string(),
        code: kind.code().to_string(),
        message,
        subject: Some(subject_of(subject)),
        magnitude: Some(magnitude),
        help: Some(help.to_string()),
        fingerprint: Some(fingerprint_for_subject(
            kind.check_id(),
            kind.code(),
            &subject.id,
        )),
        data,
    }
}
