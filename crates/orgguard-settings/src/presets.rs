use orgguard_domain::policy::{
    CheckPolicy, DEFAULT_MAX_FINDINGS, DEFAULT_MAX_REPORTING_DEPTH, FailOn, PolicyConfig,
    SalaryBand,
};
use orgguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Unknown names fall back to `strict`.
pub fn preset(profile: &str) -> PolicyConfig {
    match profile {
        "advisory" => advisory_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> PolicyConfig {
    PolicyConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: DEFAULT_MAX_FINDINGS,
        salary_band: SalaryBand::default(),
        max_reporting_depth: DEFAULT_MAX_REPORTING_DEPTH,
        checks: default_checks(Severity::Error),
    }
}

// Findings are reported but only an explicit `fail_on = "warning"` fails the run.
fn advisory_profile() -> PolicyConfig {
    PolicyConfig {
        profile: "advisory".to_string(),
        fail_on: FailOn::Error,
        max_findings: DEFAULT_MAX_FINDINGS,
        salary_band: SalaryBand::default(),
        max_reporting_depth: DEFAULT_MAX_REPORTING_DEPTH,
        checks: default_checks(Severity::Warning),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();

    m.insert(
        ids::CHECK_ORG_SALARY_BAND.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        ids::CHECK_ORG_REPORTING_DEPTH.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_matches_domain_default() {
        assert_eq!(preset("strict"), PolicyConfig::default());
    }

    #[test]
    fn unknown_profile_falls_back_to_strict() {
        assert_eq!(preset("lenient").profile, "strict");
    }

    #[test]
    fn advisory_downgrades_every_check_to_warning() {
        let cfg = preset("advisory");
        assert_eq!(cfg.fail_on, FailOn::Error);
        assert!(
            cfg.checks
                .values()
                .all(|p| p.enabled && p.severity == Severity::Warning)
        );
    }
}
