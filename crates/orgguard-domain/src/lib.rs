//! Pure policy evaluation (no IO).
//!
//! Input: employee records loaded elsewhere, indexed into a [`HierarchyIndex`].
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod hierarchy;
pub mod model;
pub mod policy;
pub mod report;

pub mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{PolicyEvaluator, evaluate};
pub use hierarchy::{HierarchyError, HierarchyIndex};
pub use model::Employee;
pub use policy::{CheckPolicy, FailOn, PolicyConfig, PolicyError, SalaryBand};
