use crate::model::Employee;
use crate::policy::{CheckPolicy, PolicyConfig};
use orgguard_types::{EmployeeId, Severity};
use std::collections::BTreeMap;

pub fn id(s: &str) -> EmployeeId {
    EmployeeId::new(s)
}

pub fn employee(emp_id: &str, salary: f64, manager: Option<&str>) -> Employee {
    Employee::new(
        emp_id,
        "First",
        format!("Last{emp_id}"),
        salary,
        manager.map(EmployeeId::new),
    )
}

fn named(emp_id: &str, first: &str, last: &str, salary: f64, manager: Option<&str>) -> Employee {
    Employee::new(emp_id, first, last, salary, manager.map(EmployeeId::new))
}

/// The five-person sample organization used throughout the docs.
///
/// 123 (CEO) -> 124, 125; 124 -> 300 -> 305.
pub fn canonical_roster() -> Vec<Employee> {
    vec![
        named("123", "Joe", "Doe", 60000.0, None),
        named("124", "Martin", "Chekov", 45000.0, Some("123")),
        named("125", "Bob", "Ronstad", 47000.0, Some("123")),
        named("300", "Alice", "Hasacat", 50000.0, Some("124")),
        named("305", "Brett", "Hardleaf", 34000.0, Some("300")),
    ]
}

/// A single line `e0 <- e1 <- ... <- e{len}` where `e{k}` is at depth `k`.
///
/// Every manager earns 1.3x their only report, so no salary band findings arise.
pub fn chain_roster(len: usize) -> Vec<Employee> {
    (0..=len)
        .map(|k| {
            let salary = 10_000.0 * 1.3_f64.powi((len - k) as i32);
            let manager = (k > 0).then(|| format!("e{}", k - 1));
            employee(&format!("e{k}"), salary, manager.as_deref())
        })
        .collect()
}

pub fn config_with_check(check_id: &str, severity: Severity) -> PolicyConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    PolicyConfig {
        profile: "test".to_string(),
        checks,
        ..PolicyConfig::default()
    }
}

pub fn config_with_check_allow(check_id: &str, severity: Severity, allow: Vec<&str>) -> PolicyConfig {
    let mut policy = CheckPolicy::enabled(severity);
    policy.allow = allow.into_iter().map(|s| s.to_string()).collect();

    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), policy);

    PolicyConfig {
        profile: "test".to_string(),
        checks,
        ..PolicyConfig::default()
    }
}
