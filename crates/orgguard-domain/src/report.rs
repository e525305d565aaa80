use orgguard_types::{Finding, OrgguardData, Verdict};

#[derive(Clone, Debug, PartialEq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: OrgguardData,
}
