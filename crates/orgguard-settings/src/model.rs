use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `orgguard.toml` schema v1.
///
/// Every field is optional; anything left out comes from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrgguardConfigV1 {
    /// Optional schema string for tooling (`orgguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default) or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the run: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_band: Option<SalaryBandConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_depth: Option<ReportingDepthConfig>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Multipliers applied to the average salary of a manager's direct reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SalaryBandConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_multiplier: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_multiplier: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportingDepthConfig {
    /// Most managers allowed between an employee and the CEO.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Glob patterns over employee ids exempt from the check.
    #[serde(default)]
    pub allow: Vec<String>,
}
