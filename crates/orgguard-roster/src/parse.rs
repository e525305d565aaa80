use crate::RosterError;
use orgguard_domain::Employee;
use orgguard_types::EmployeeId;
use tracing::debug;

pub const EXPECTED_HEADER: &str = "Id,firstName,lastName,salary,managerId";

const HEADER_COLUMNS: [&str; 5] = ["id", "firstname", "lastname", "salary", "managerid"];

/// Parse roster CSV text.
///
/// The first non-blank line is the header; column names are compared
/// case-insensitively and the trailing `managerId` column may be omitted. Fields are
/// plain comma-separated values with surrounding whitespace trimmed; quoting is not
/// supported. An empty `managerId` marks the root of the organization.
pub fn parse_roster(text: &str) -> Result<Vec<Employee>, RosterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(RosterError::MissingHeader { line: 1 });
    };
    check_header(header_line, header)?;

    let mut employees = Vec::new();
    for (line_no, line) in lines {
        employees.push(parse_row(line_no, line)?);
    }

    debug!(rows = employees.len(), "parsed roster");
    Ok(employees)
}

fn check_header(line: usize, header: &str) -> Result<(), RosterError> {
    let columns: Vec<String> = header
        .split(',')
        .map(|c| c.trim().to_ascii_lowercase())
        .collect();

    let matches = (4..=5).contains(&columns.len())
        && columns
            .iter()
            .zip(HEADER_COLUMNS)
            .all(|(found, expected)| found == expected);
    if matches {
        Ok(())
    } else {
        Err(RosterError::MissingHeader { line })
    }
}

fn parse_row(line: usize, row: &str) -> Result<Employee, RosterError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if !(4..=5).contains(&fields.len()) {
        return Err(RosterError::WrongColumnCount {
            line,
            found: fields.len(),
        });
    }

    let id = EmployeeId::new(fields[0]);
    if id.is_empty() {
        return Err(RosterError::EmptyId { line });
    }

    let salary = parse_salary(fields[3]).ok_or_else(|| RosterError::InvalidSalary {
        line,
        value: fields[3].to_string(),
    })?;

    let manager_id = fields
        .get(4)
        .map(|m| EmployeeId::new(*m))
        .filter(|m| !m.is_empty());

    Ok(Employee::new(id, fields[1], fields[2], salary, manager_id))
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|salary| salary.is_finite() && *salary >= 0.0)
}
