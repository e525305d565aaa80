use orgguard_types::EmployeeId;

/// One roster row.
///
/// `manager_id` is `None` exactly for the root of the organization (the CEO).
#[derive(Clone, Debug, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    pub fn new(
        id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        manager_id: Option<EmployeeId>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }
}
