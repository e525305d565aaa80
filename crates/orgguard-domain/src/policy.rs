use orgguard_types::{Severity, ids};
use std::collections::BTreeMap;

pub const DEFAULT_MIN_SALARY_MULTIPLIER: f64 = 1.20;
pub const DEFAULT_MAX_SALARY_MULTIPLIER: f64 = 1.50;
pub const DEFAULT_MAX_REPORTING_DEPTH: u32 = 4;
pub const DEFAULT_MAX_FINDINGS: usize = 200;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidMultiplier { name: &'static str, value: f64 },

    #[error("min_multiplier ({min}) must not exceed max_multiplier ({max})")]
    InvertedBand { min: f64, max: f64 },
}

/// Acceptable manager pay relative to the average pay of their direct reports.
///
/// Construction guarantees `0 < min_multiplier <= max_multiplier`, so a salary can
/// never be both below and above the band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalaryBand {
    min_multiplier: f64,
    max_multiplier: f64,
}

impl SalaryBand {
    pub fn new(min_multiplier: f64, max_multiplier: f64) -> Result<Self, PolicyError> {
        for (name, value) in [
            ("min_multiplier", min_multiplier),
            ("max_multiplier", max_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PolicyError::InvalidMultiplier { name, value });
            }
        }
        if min_multiplier > max_multiplier {
            return Err(PolicyError::InvertedBand {
                min: min_multiplier,
                max: max_multiplier,
            });
        }
        Ok(Self {
            min_multiplier,
            max_multiplier,
        })
    }

    pub fn min_multiplier(&self) -> f64 {
        self.min_multiplier
    }

    pub fn max_multiplier(&self) -> f64 {
        self.max_multiplier
    }

    /// `(min_expected, max_expected)` for a given average direct-report salary.
    pub fn bounds(&self, average_salary: f64) -> (f64, f64) {
        (
            average_salary * self.min_multiplier,
            average_salary * self.max_multiplier,
        )
    }
}

impl Default for SalaryBand {
    /// 20% to 50% above the direct reports' average.
    fn default() -> Self {
        Self {
            min_multiplier: DEFAULT_MIN_SALARY_MULTIPLIER,
            max_multiplier: DEFAULT_MAX_SALARY_MULTIPLIER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
    /// Glob patterns over employee ids exempt from the check.
    pub allow: Vec<String>,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
            allow: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
            allow: Vec::new(),
        }
    }
}

/// Everything the evaluator needs; built by `orgguard-settings` or by hand in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub salary_band: SalaryBand,
    /// Reporting lines with more managers than this are flagged.
    pub max_reporting_depth: u32,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl PolicyConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}

impl Default for PolicyConfig {
    /// The `strict` profile: both checks enabled at error severity.
    fn default() -> Self {
        let mut checks = BTreeMap::new();
        checks.insert(
            ids::CHECK_ORG_SALARY_BAND.to_string(),
            CheckPolicy::enabled(Severity::Error),
        );
        checks.insert(
            ids::CHECK_ORG_REPORTING_DEPTH.to_string(),
            CheckPolicy::enabled(Severity::Error),
        );

        Self {
            profile: "strict".to_string(),
            fail_on: FailOn::Error,
            max_findings: DEFAULT_MAX_FINDINGS,
            salary_band: SalaryBand::default(),
            max_reporting_depth: DEFAULT_MAX_REPORTING_DEPTH,
            checks,
        }
    }
}
