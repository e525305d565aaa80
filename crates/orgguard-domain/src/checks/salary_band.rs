use crate::checks::utils::{build_allowlist, is_allowed, policy_finding};
use crate::hierarchy::HierarchyIndex;
use crate::policy::PolicyConfig;
use orgguard_types::{EmployeeId, Finding, FindingKind, Magnitude, ids};
use serde_json::json;
use tracing::debug;

pub fn run(index: &HierarchyIndex, cfg: &PolicyConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_ORG_SALARY_BAND) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for manager_id in index.managers() {
        let Some(manager) = index.get(manager_id) else {
            debug!(manager_id = %manager_id, "manager has direct reports but no record; skipping salary band");
            continue;
        };
        if is_allowed(allow.as_ref(), manager) {
            continue;
        }

        let Some((average, reports)) = average_salary(index, manager_id) else {
            continue;
        };
        let (min_expected, max_expected) = cfg.salary_band.bounds(average);

        let (kind, delta, message, help) = if manager.salary < min_expected {
            (
                FindingKind::ManagerUnderpaid,
                min_expected - manager.salary,
                format!(
                    "manager {} ({}) earns less than their salary band allows",
                    manager.display_name(),
                    manager.id
                ),
                "Raise the manager's salary by at least the finding magnitude.",
            )
        } else if manager.salary > max_expected {
            (
                FindingKind::ManagerOverpaid,
                manager.salary - max_expected,
                format!(
                    "manager {} ({}) earns more than their salary band allows",
                    manager.display_name(),
                    manager.id
                ),
                "Lower the manager's salary by at least the finding magnitude, or widen [salary_band].max_multiplier.",
            )
        } else {
            continue;
        };

        out.push(policy_finding(
            kind,
            policy.severity,
            manager,
            Magnitude::PayDelta(delta),
            message,
            help,
            json!({
                "salary": manager.salary,
                "average_direct_report_salary": average,
                "direct_reports": reports,
                "min_expected": min_expected,
                "max_expected": max_expected,
            }),
        ));
    }
}

/// Mean salary of a manager's direct reports and how many there are.
fn average_salary(index: &HierarchyIndex, manager_id: &EmployeeId) -> Option<(f64, usize)> {
    let (total, count) = index
        .direct_reports(manager_id)
        .fold((0.0_f64, 0_usize), |(total, count), e| (total + e.salary, count + 1));
    (count > 0).then(|| (total / count as f64, count))
}
