use crate::checks::utils::{build_allowlist, is_allowed, policy_finding};
use crate::hierarchy::{HierarchyError, HierarchyIndex};
use crate::policy::PolicyConfig;
use orgguard_types::{EmployeeId, Finding, FindingKind, Magnitude, ids};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::warn;

pub fn run(index: &HierarchyIndex, cfg: &PolicyConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_ORG_REPORTING_DEPTH) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    let max_depth = cfg.max_reporting_depth;

    // Keyed by the smallest member so each cycle is reported once.
    let mut cycles: BTreeMap<EmployeeId, Vec<EmployeeId>> = BTreeMap::new();

    for employee in index.employees() {
        let chain = match index.reporting_chain(employee.manager_id.as_ref()) {
            Ok(chain) => chain,
            Err(HierarchyError::Cycle { members }) => {
                if let Some(first) = members.first() {
                    cycles.entry(first.clone()).or_insert(members);
                }
                continue;
            }
        };

        let depth = u32::try_from(chain.len()).unwrap_or(u32::MAX);
        if depth <= max_depth || is_allowed(allow.as_ref(), employee) {
            continue;
        }

        let managers: Vec<&str> = chain.iter().map(|m| m.id.as_str()).collect();
        out.push(policy_finding(
            FindingKind::ReportingLineTooLong,
            policy.severity,
            employee,
            Magnitude::Depth(depth),
            format!(
                "employee {} ({}) has {} managers between them and the CEO (max {})",
                employee.display_name(),
                employee.id,
                depth,
                max_depth
            ),
            "Move the employee, or a manager above them, closer to the top of the organization.",
            json!({
                "depth": depth,
                "max_depth": max_depth,
                "excess": depth - max_depth,
                "managers": managers,
            }),
        ));
    }

    for (first, members) in cycles {
        let Some(subject) = index.get(&first) else {
            continue;
        };
        if is_allowed(allow.as_ref(), subject) {
            continue;
        }
        let length = u32::try_from(members.len()).unwrap_or(u32::MAX);
        let member_ids: Vec<&str> = members.iter().map(EmployeeId::as_str).collect();
        warn!(members = ?member_ids, "reporting cycle detected");

        out.push(policy_finding(
            FindingKind::ReportingCycle,
            policy.severity,
            subject,
            Magnitude::Depth(length),
            format!(
                "reporting cycle through {} employees: {}",
                length,
                member_ids.join(" -> ")
            ),
            "Fix the managerId of a cycle member so the chain ends at the CEO.",
            json!({
                "members": member_ids,
            }),
        ));
    }
}
