//! Fuzz target for hierarchy indexing and policy evaluation.
//!
//! Arbitrary manager links (dangling ids, cycles, duplicates) must never
//! panic or hang the evaluator.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_hierarchy
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use orgguard_domain::{Employee, HierarchyIndex, PolicyConfig, PolicyEvaluator, SalaryBand};
use orgguard_types::EmployeeId;

#[derive(Arbitrary, Debug)]
struct Row {
    id: u8,
    manager: Option<u8>,
    salary: u32,
}

#[derive(Arbitrary, Debug)]
struct OrgInput {
    rows: Vec<Row>,
    max_depth: u8,
    min_multiplier: u8,
    spread: u8,
    max_findings: u8,
}

fuzz_target!(|input: OrgInput| {
    if input.rows.len() > 300 {
        return;
    }

    let employees = input.rows.iter().map(|row| {
        Employee::new(
            row.id.to_string(),
            "First",
            "Last",
            f64::from(row.salary),
            row.manager.map(|m| EmployeeId::from(m.to_string())),
        )
    });
    let index = HierarchyIndex::build(employees);

    let min = 0.1 + f64::from(input.min_multiplier) / 50.0;
    let max = min + f64::from(input.spread) / 50.0;
    let Ok(band) = SalaryBand::new(min, max) else {
        return;
    };

    let cfg = PolicyConfig {
        salary_band: band,
        max_reporting_depth: u32::from(input.max_depth),
        max_findings: usize::from(input.max_findings),
        ..PolicyConfig::default()
    };

    let report = PolicyEvaluator::new(cfg).evaluate(&index);
    assert!(report.findings.len() <= usize::from(input.max_findings));
    assert_eq!(report.data.employees_scanned as usize, index.len());
});
