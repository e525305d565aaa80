//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Reporting chain length on acyclic organizations
//! - Salary band arithmetic
//! - Findings ordering determinism

use crate::engine::{compare_findings, evaluate};
use crate::hierarchy::HierarchyIndex;
use crate::model::Employee;
use crate::policy::{CheckPolicy, PolicyConfig, SalaryBand};
use orgguard_types::{EmployeeId, Finding, FindingKind, Magnitude, Severity, Subject, ids};
use proptest::prelude::*;
use proptest::sample::Index;

// ============================================================================
// Strategies
// ============================================================================

/// An acyclic roster: employee `i` reports to some `j < i`, or to nobody.
///
/// Returns the employees alongside the parent table used to build them.
fn arb_forest(max_len: usize) -> impl Strategy<Value = (Vec<Employee>, Vec<Option<usize>>)> {
    prop::collection::vec(
        (any::<Index>(), prop::bool::weighted(0.9), 1_000u32..200_000),
        1..max_len,
    )
    .prop_map(|rows| {
        let parents: Vec<Option<usize>> = rows
            .iter()
            .enumerate()
            .map(|(i, (pick, has_manager, _))| (i > 0 && *has_manager).then(|| pick.index(i)))
            .collect();
        let employees = rows
            .iter()
            .zip(&parents)
            .enumerate()
            .map(|(i, ((_, _, salary), parent))| {
                Employee::new(
                    format!("e{i:03}"),
                    "First",
                    format!("Last{i}"),
                    f64::from(*salary),
                    parent.map(|p| EmployeeId::new(format!("e{p:03}"))),
                )
            })
            .collect();
        (employees, parents)
    })
}

fn arb_band() -> impl Strategy<Value = SalaryBand> {
    (100u32..200, 0u32..100).prop_map(|(min, spread)| {
        let min = f64::from(min) / 100.0;
        let max = min + f64::from(spread) / 100.0;
        SalaryBand::new(min, max).expect("generated band is valid")
    })
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

/// Strategy for creating a Finding (used for ordering tests).
fn arb_finding() -> impl Strategy<Value = Finding> {
    (
        arb_severity(),
        prop::sample::select(FindingKind::ALL.to_vec()),
        "test message [a-z]{1,20}",
        prop::option::of("[0-9]{1,4}"),
    )
        .prop_map(|(severity, kind, message, subject)| Finding {
            severity,
            check_id: kind.check_id().to_string(),
            code: kind.code().to_string(),
            message,
            subject: subject.map(|id| Subject {
                id: EmployeeId::new(id),
                name: "First Last".to_string(),
            }),
            magnitude: None,
            help: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        })
}

fn config_both(severity: Severity) -> PolicyConfig {
    let mut cfg = PolicyConfig::default();
    for check_id in [ids::CHECK_ORG_SALARY_BAND, ids::CHECK_ORG_REPORTING_DEPTH] {
        cfg.checks
            .insert(check_id.to_string(), CheckPolicy::enabled(severity));
    }
    cfg.profile = "test".to_string();
    cfg
}

fn hop_count(parents: &[Option<usize>], start: usize) -> u32 {
    let mut hops = 0;
    let mut current = parents[start];
    while let Some(p) = current {
        hops += 1;
        current = parents[p];
    }
    hops
}

// ============================================================================
// Property tests: Hierarchy
// ============================================================================

proptest! {
    /// On an acyclic roster the chain length is the number of hops to a root.
    #[test]
    fn chain_length_matches_hop_count((employees, parents) in arb_forest(40)) {
        let index = HierarchyIndex::build(employees.clone());

        for (i, employee) in employees.iter().enumerate() {
            let len = index.chain_length(employee.manager_id.as_ref());
            prop_assert_eq!(len, Ok(hop_count(&parents, i)));
        }
    }

    /// Every employee with a manager appears among that manager's direct reports.
    #[test]
    fn direct_reports_partition_non_roots((employees, _) in arb_forest(40)) {
        let index = HierarchyIndex::build(employees.clone());

        let grouped: usize = index.managers().map(|m| index.direct_reports(m).count()).sum();
        let with_manager = employees.iter().filter(|e| !e.is_root()).count();
        prop_assert_eq!(grouped, with_manager);
        prop_assert!(index.managers().all(|m| index.direct_reports(m).count() > 0));
    }
}

// ============================================================================
// Property tests: Checks
// ============================================================================

proptest! {
    /// Salary band findings agree with the band arithmetic, manager by manager.
    #[test]
    fn salary_findings_match_band_arithmetic(
        (employees, _) in arb_forest(30),
        band in arb_band(),
    ) {
        let index = HierarchyIndex::build(employees);
        let mut cfg = config_both(Severity::Error);
        cfg.salary_band = band;
        cfg.max_reporting_depth = u32::MAX;

        let report = evaluate(&index, &cfg);

        for manager_id in index.managers() {
            let manager = index.get(manager_id).expect("forest managers have records");
            let salaries: Vec<f64> = index.direct_reports(manager_id).map(|e| e.salary).collect();
            let average = salaries.iter().sum::<f64>() / salaries.len() as f64;
            let (min, max) = band.bounds(average);

            let found: Vec<&Finding> = report
                .findings
                .iter()
                .filter(|f| f.subject.as_ref().map(|s| &s.id) == Some(manager_id))
                .collect();

            if manager.salary < min {
                prop_assert_eq!(found.len(), 1);
                prop_assert_eq!(found[0].kind(), Some(FindingKind::ManagerUnderpaid));
                prop_assert!(matches!(found[0].magnitude, Some(Magnitude::PayDelta(d)) if d > 0.0));
            } else if manager.salary > max {
                prop_assert_eq!(found.len(), 1);
                prop_assert_eq!(found[0].kind(), Some(FindingKind::ManagerOverpaid));
                prop_assert!(matches!(found[0].magnitude, Some(Magnitude::PayDelta(d)) if d > 0.0));
            } else {
                prop_assert!(found.is_empty());
            }
        }
    }

    /// Only employees deeper than the limit are flagged, and every one of them is.
    #[test]
    fn only_lines_longer_than_max_are_flagged(
        (employees, parents) in arb_forest(40),
        max_depth in 0u32..6,
    ) {
        let index = HierarchyIndex::build(employees.clone());
        let mut cfg = config_both(Severity::Warning);
        cfg.checks.insert(ids::CHECK_ORG_SALARY_BAND.to_string(), CheckPolicy::disabled());
        cfg.max_reporting_depth = max_depth;

        let report = evaluate(&index, &cfg);
        let expected = (0..employees.len())
            .filter(|&i| hop_count(&parents, i) > max_depth)
            .count();

        prop_assert_eq!(report.findings.len(), expected);
        for finding in &report.findings {
            prop_assert_eq!(finding.kind(), Some(FindingKind::ReportingLineTooLong));
            prop_assert!(matches!(finding.magnitude, Some(Magnitude::Depth(d)) if d > max_depth));
        }
    }

    /// Disabling every check yields no findings regardless of the roster.
    #[test]
    fn disabled_checks_emit_nothing((employees, _) in arb_forest(30)) {
        let index = HierarchyIndex::build(employees);
        let mut cfg = PolicyConfig::default();
        for policy in cfg.checks.values_mut() {
            *policy = CheckPolicy::disabled();
        }

        let report = evaluate(&index, &cfg);
        prop_assert!(report.findings.is_empty());
        prop_assert_eq!(report.verdict, orgguard_types::Verdict::Pass);
    }

    /// Evaluating the same roster twice, in any input order, gives the same findings.
    #[test]
    fn evaluation_is_deterministic_and_order_independent(
        (employees, _) in arb_forest(30),
        severity in arb_severity(),
    ) {
        let cfg = config_both(severity);
        let forward = evaluate(&HierarchyIndex::build(employees.clone()), &cfg);
        let again = evaluate(&HierarchyIndex::build(employees.clone()), &cfg);
        let reversed = evaluate(&HierarchyIndex::build(employees.into_iter().rev()), &cfg);

        prop_assert_eq!(&forward, &again);
        prop_assert_eq!(forward.findings, reversed.findings);
    }

    /// Emitted findings never exceed max_findings and the totals stay consistent.
    #[test]
    fn truncation_respects_max_findings(
        (employees, _) in arb_forest(40),
        max_findings in 0usize..5,
    ) {
        let mut cfg = config_both(Severity::Error);
        cfg.max_reporting_depth = 1;
        cfg.max_findings = max_findings;

        let report = evaluate(&HierarchyIndex::build(employees), &cfg);

        prop_assert!(report.findings.len() <= max_findings);
        prop_assert_eq!(report.data.findings_emitted as usize, report.findings.len());
        prop_assert!(report.data.findings_total >= report.data.findings_emitted);
        prop_assert_eq!(
            report.data.truncated_reason.is_some(),
            report.data.findings_total > report.data.findings_emitted
        );
    }
}

// ============================================================================
// Property tests: Findings ordering
// ============================================================================

proptest! {
    /// Sorting is a total order: sorting a shuffled copy gives the same sequence.
    #[test]
    fn finding_order_is_deterministic(
        findings in prop::collection::vec(arb_finding(), 0..20),
    ) {
        let mut sorted = findings.clone();
        sorted.sort_by(compare_findings);

        let mut reversed: Vec<Finding> = findings.into_iter().rev().collect();
        reversed.sort_by(compare_findings);

        prop_assert_eq!(&sorted, &reversed);
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_findings(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }
}
