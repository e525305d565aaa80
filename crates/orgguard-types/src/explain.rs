//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after roster examples.
    pub examples: ExamplePair,
}

/// Before and after roster examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Roster rows that would trigger a finding.
    pub before: &'static str,
    /// Roster rows that pass the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_ORG_SALARY_BAND => Some(explain_salary_band()),
        ids::CHECK_ORG_REPORTING_DEPTH => Some(explain_reporting_depth()),

        // Codes
        ids::CODE_MANAGER_UNDERPAID => Some(explain_manager_underpaid()),
        ids::CODE_MANAGER_OVERPAID => Some(explain_manager_overpaid()),
        ids::CODE_REPORTING_LINE_TOO_LONG => Some(explain_reporting_line_too_long()),
        ids::CODE_REPORTING_CYCLE => Some(explain_reporting_cycle()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_ORG_SALARY_BAND, ids::CHECK_ORG_REPORTING_DEPTH]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MANAGER_UNDERPAID,
        ids::CODE_MANAGER_OVERPAID,
        ids::CODE_REPORTING_LINE_TOO_LONG,
        ids::CODE_REPORTING_CYCLE,
    ]
}

// --- Check-level explanations ---

fn explain_salary_band() -> Explanation {
    Explanation {
        title: "Manager Salary Band",
        description: "\
Compares every manager's salary with the average salary of their direct reports.

A manager is expected to earn at least 20% and at most 50% more than that average
(the multipliers are configurable under [salary_band]). Only direct reports count;
a manager's indirect reports do not affect their band.

Managers that appear only as someone's manager id, without a roster row of their
own, cannot be evaluated and are skipped.",
        remediation: "\
Adjust the manager's salary into the band, or revisit the salaries of their
direct reports. The finding magnitude is the smallest change that restores
compliance.

If the band itself does not fit your organization, tune it in orgguard.toml:

    [salary_band]
    min_multiplier = 1.1
    max_multiplier = 1.6",
        examples: ExamplePair {
            before: r#"Id,firstName,lastName,salary,managerId
1,Ada,Boss,50000,
2,Bo,Report,45000,1
3,Cy,Report,47000,1"#,
            after: r#"Id,firstName,lastName,salary,managerId
1,Ada,Boss,60000,
2,Bo,Report,45000,1
3,Cy,Report,47000,1"#,
        },
    }
}

fn explain_reporting_depth() -> Explanation {
    Explanation {
        title: "Reporting Line Depth",
        description: "\
Counts the managers between every employee and the CEO (the employee without a
manager id). Lines with more than four managers are flagged; the limit is set by
[reporting_depth].max_depth.

Manager ids that do not resolve to a roster row end the chain at that point.
Chains that loop back onto themselves are reported as reporting cycles.",
        remediation: "\
Flatten the reporting line: move the employee, or one of the managers above
them, closer to the top of the organization.",
        examples: ExamplePair {
            before: r#"Id,firstName,lastName,salary,managerId
1,Ceo,A,90000,
2,Vp,B,70000,1
3,Dir,C,60000,2
4,Mgr,D,50000,3
5,Lead,E,45000,4
6,Dev,F,40000,5"#,
            after: r#"Id,firstName,lastName,salary,managerId
1,Ceo,A,90000,
2,Vp,B,70000,1
3,Dir,C,60000,2
4,Mgr,D,50000,3
5,Lead,E,45000,4
6,Dev,F,40000,4"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_manager_underpaid() -> Explanation {
    let mut exp = explain_salary_band();
    exp.title = "Manager Earns Less Than The Band";
    exp.description = "\
The manager's salary is below the average salary of their direct reports
multiplied by min_multiplier (1.2 by default). The magnitude is the raise needed
to reach the lower bound.";
    exp
}

fn explain_manager_overpaid() -> Explanation {
    Explanation {
        title: "Manager Earns More Than The Band",
        description: "\
The manager's salary is above the average salary of their direct reports
multiplied by max_multiplier (1.5 by default). The magnitude is the reduction
needed to reach the upper bound.",
        remediation: "\
Lower the manager's salary to the upper bound, raise the direct reports' pay, or
widen the band with [salary_band].max_multiplier.",
        examples: ExamplePair {
            before: r#"Id,firstName,lastName,salary,managerId
1,Ada,Boss,90000,
2,Bo,Report,45000,1
3,Cy,Report,47000,1"#,
            after: r#"Id,firstName,lastName,salary,managerId
1,Ada,Boss,65000,
2,Bo,Report,45000,1
3,Cy,Report,47000,1"#,
        },
    }
}

fn explain_reporting_line_too_long() -> Explanation {
    let mut exp = explain_reporting_depth();
    exp.title = "Reporting Line Too Long";
    exp
}

fn explain_reporting_cycle() -> Explanation {
    Explanation {
        title: "Reporting Cycle",
        description: "\
Following manager ids upward from some employee returned to an employee already
visited, so that part of the organization never reaches the CEO. The reporting
depth of everyone inside or below the cycle is undefined and not checked.",
        remediation: "\
Fix the managerId column of the cycle members so that the chain ends at the CEO.
An employee must never be their own manager, directly or indirectly.",
        examples: ExamplePair {
            before: r#"Id,firstName,lastName,salary,managerId
1,Ceo,A,90000,
2,Ann,B,60000,3
3,Ben,C,60000,2"#,
            after: r#"Id,firstName,lastName,salary,managerId
1,Ceo,A,90000,
2,Ann,B,60000,1
3,Ben,C,60000,2"#,
        },
    }
}
