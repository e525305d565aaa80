use crate::{model::OrgguardConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use orgguard_domain::policy::{FailOn, PolicyConfig, SalaryBand};
use orgguard_types::{Severity, explain};

/// Values supplied on the command line; each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
    pub max_depth: Option<u32>,
    pub min_multiplier: Option<f64>,
    pub max_multiplier: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: PolicyConfig,
}

pub fn resolve_config(
    cfg: OrgguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // salary band
    let band_cfg = cfg.salary_band.clone().unwrap_or_default();
    let min = overrides
        .min_multiplier
        .or(band_cfg.min_multiplier)
        .unwrap_or(effective.salary_band.min_multiplier());
    let max = overrides
        .max_multiplier
        .or(band_cfg.max_multiplier)
        .unwrap_or(effective.salary_band.max_multiplier());
    effective.salary_band = SalaryBand::new(min, max).context("invalid [salary_band]")?;

    // reporting depth
    if let Some(depth) = overrides
        .max_depth
        .or(cfg.reporting_depth.as_ref().and_then(|d| d.max_depth))
    {
        effective.max_reporting_depth = depth;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let Some(entry) = effective.checks.get_mut(check_id) else {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (expected one of: {})",
                explain::all_check_ids().join(", ")
            );
        };

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
