use camino::Utf8PathBuf;

/// Why a roster could not be loaded. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("line {line}: expected header `{expected}`", expected = crate::EXPECTED_HEADER)]
    MissingHeader { line: usize },

    #[error("line {line}: expected 4 or 5 columns, found {found}")]
    WrongColumnCount { line: usize, found: usize },

    #[error("line {line}: employee id is empty")]
    EmptyId { line: usize },

    #[error("line {line}: invalid salary `{value}` (expected a non-negative number)")]
    InvalidSalary { line: usize, value: String },

    #[error("failed to read roster {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RosterError {
    /// The offending line, when the error points at one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingHeader { line }
            | Self::WrongColumnCount { line, .. }
            | Self::EmptyId { line }
            | Self::InvalidSalary { line, .. } => Some(*line),
            Self::Io { .. } => None,
        }
    }
}
