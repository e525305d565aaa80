//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, OrgguardConfigV1, ReportingDepthConfig, SalaryBandConfig};
pub use presets::preset;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `orgguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<OrgguardConfigV1> {
    let cfg: OrgguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the policy used by the engine (profile + file values + overrides).
pub fn resolve_config(
    cfg: OrgguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
