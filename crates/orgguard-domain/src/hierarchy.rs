//! In-memory organization chart.
//!
//! Employees live in an arena (`Vec<Employee>`); lookups and the manager → direct
//! reports grouping hold arena handles, so every record has exactly one owner.

use crate::model::Employee;
use orgguard_types::EmployeeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// Following manager ids returned to an employee already on the chain.
    ///
    /// `members` lists the cycle starting at its smallest id.
    #[error("reporting cycle detected: {}", join_ids(.members))]
    Cycle { members: Vec<EmployeeId> },
}

fn join_ids(ids: &[EmployeeId]) -> String {
    ids.iter()
        .map(EmployeeId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Read-only view over a fixed employee collection.
#[derive(Clone, Debug, Default)]
pub struct HierarchyIndex {
    employees: Vec<Employee>,
    by_id: HashMap<EmployeeId, usize>,
    /// Only ids that manage at least one employee; never holds an empty list.
    direct_reports_of: BTreeMap<EmployeeId, Vec<usize>>,
    duplicate_ids: Vec<EmployeeId>,
}

impl HierarchyIndex {
    /// Index a collection of employees.
    ///
    /// Duplicate ids are a data-quality problem: the later record replaces the earlier
    /// one and the id is kept in [`HierarchyIndex::duplicate_ids`].
    /// Manager ids that do not resolve are kept as-is and treated as absent on lookup.
    pub fn build<I>(employees: I) -> Self
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut arena: Vec<Employee> = Vec::new();
        let mut by_id: HashMap<EmployeeId, usize> = HashMap::new();
        let mut duplicates: BTreeSet<EmployeeId> = BTreeSet::new();

        for employee in employees {
            match by_id.get(&employee.id).copied() {
                Some(slot) => {
                    warn!(employee_id = %employee.id, "duplicate employee id; keeping the last record");
                    duplicates.insert(employee.id.clone());
                    arena[slot] = employee;
                }
                None => {
                    by_id.insert(employee.id.clone(), arena.len());
                    arena.push(employee);
                }
            }
        }

        let mut direct_reports_of: BTreeMap<EmployeeId, Vec<usize>> = BTreeMap::new();
        for (slot, employee) in arena.iter().enumerate() {
            if let Some(manager_id) = &employee.manager_id {
                direct_reports_of
                    .entry(manager_id.clone())
                    .or_default()
                    .push(slot);
            }
        }

        Self {
            employees: arena,
            by_id,
            direct_reports_of,
            duplicate_ids: duplicates.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.by_id.get(id).map(|&slot| &self.employees[slot])
    }

    /// All employees in first-seen order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Ids that have at least one direct report, in ascending order.
    ///
    /// An id listed here may have no record of its own (a dangling manager reference).
    pub fn managers(&self) -> impl Iterator<Item = &EmployeeId> {
        self.direct_reports_of.keys()
    }

    /// Employees whose manager id equals `manager_id`. Empty for non-managers.
    pub fn direct_reports<'a>(
        &'a self,
        manager_id: &EmployeeId,
    ) -> impl Iterator<Item = &'a Employee> + use<'a> {
        self.direct_reports_of
            .get(manager_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&slot| &self.employees[slot])
    }

    pub fn duplicate_ids(&self) -> &[EmployeeId] {
        &self.duplicate_ids
    }

    /// Managers above an employee, nearest first, starting from the employee's
    /// manager id.
    ///
    /// The walk stops at the root (no manager id) or at a manager id that does not
    /// resolve to a record. Revisiting an id fails with [`HierarchyError::Cycle`].
    pub fn reporting_chain(
        &self,
        start: Option<&EmployeeId>,
    ) -> Result<Vec<&Employee>, HierarchyError> {
        let mut chain: Vec<&Employee> = Vec::new();
        let mut visited: HashSet<&EmployeeId> = HashSet::new();
        let mut current = self.resolve_manager(start);

        while let Some(manager) = current {
            if !visited.insert(&manager.id) {
                return Err(cycle_error(&chain, &manager.id));
            }
            chain.push(manager);
            current = self.resolve_manager(manager.manager_id.as_ref());
        }

        Ok(chain)
    }

    /// Number of managers between an employee and the top of their chain.
    ///
    /// `start` is the employee's own manager id, so the root has length 0.
    pub fn chain_length(&self, start: Option<&EmployeeId>) -> Result<u32, HierarchyError> {
        self.reporting_chain(start)
            .map(|chain| u32::try_from(chain.len()).unwrap_or(u32::MAX))
    }

    fn resolve_manager(&self, manager_id: Option<&EmployeeId>) -> Option<&Employee> {
        let manager_id = manager_id?;
        let manager = self.get(manager_id);
        if manager.is_none() {
            debug!(manager_id = %manager_id, "manager id does not resolve; chain ends here");
        }
        manager
    }
}

fn cycle_error(chain: &[&Employee], repeated: &EmployeeId) -> HierarchyError {
    let start = chain
        .iter()
        .position(|e| &e.id == repeated)
        .unwrap_or_default();
    let mut members: Vec<EmployeeId> = chain[start..].iter().map(|e| e.id.clone()).collect();
    if let Some(min_pos) = members
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(pos, _)| pos)
    {
        members.rotate_left(min_pos);
    }
    HierarchyError::Cycle { members }
}
