use crate::hierarchy::HierarchyIndex;
use crate::policy::PolicyConfig;
use orgguard_types::{Finding, ids};

pub mod reporting_depth;
pub mod salary_band;
mod utils;


pub fn run_all(index: &HierarchyIndex, cfg: &PolicyConfig, out: &mut Vec<Finding>) {
    salary_band::run(index, cfg, out);
    reporting_depth::run(index, cfg, out);
}

/// Check ids enabled in `cfg`, in evaluation order.
pub fn enabled_checks(cfg: &PolicyConfig) -> impl Iterator<Item = &'static str> + use<'_> {
    [ids::CHECK_ORG_SALARY_BAND, ids::CHECK_ORG_REPORTING_DEPTH]
        .into_iter()
        .filter(|id| cfg.check_policy(id).is_some())
}
