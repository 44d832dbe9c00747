// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewboard_domain::DomainError;

/// Errors that can occur while assembling a schedule submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Both range mode and explicit-dates mode were supplied.
    ModeConflict,
    /// Neither range mode nor explicit dates were supplied.
    NoDatesSelected,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ModeConflict => write!(
                f,
                "Range mode and explicit-dates mode were both supplied; select exactly one"
            ),
            Self::NoDatesSelected => {
                write!(f, "No scheduled dates were supplied")
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::ModeConflict | Self::NoDatesSelected => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
