use thiserror::Error;

/// Caller broke an operation's contract.
///
/// Reported before any request is issued and never folded into an
/// [`OperationResult`](crate::OperationResult).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("{operation}: required parameter '{parameter}' is missing")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },
}

impl PreconditionError {
    /// Require a non-blank string argument.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` when `value` is `None` or blank.
    pub fn require<'a>(
        operation: &'static str,
        parameter: &'static str,
        value: Option<&'a str>,
    ) -> Result<&'a str, Self> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(Self::MissingParameter {
                operation,
                parameter,
            }),
        }
    }
}
