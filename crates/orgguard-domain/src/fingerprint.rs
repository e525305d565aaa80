use orgguard_types::EmployeeId;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding about one employee.
///
/// Identity fields:
/// - check_id
/// - code
/// - subject employee id
pub fn fingerprint_for_subject(check_id: &str, code: &str, subject: &EmployeeId) -> String {
    let canonical = [check_id, code, subject.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
