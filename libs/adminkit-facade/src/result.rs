/// Outcome of a facade operation.
///
/// Expected failures are values, not panics or raised errors, so callers
/// branch on the variant. A success always carries its data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum OperationResult<T> {
    Success(T),
    /// Display-ready failure message
    Failure(String),
}

impl<T> OperationResult<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            Self::Success(data) => OperationResult::Success(f(data)),
            Self::Failure(message) => OperationResult::Failure(message),
        }
    }

    /// Convert into a `Result` for `?`-style call sites.
    ///
    /// # Errors
    ///
    /// Returns the failure message for [`OperationResult::Failure`].
    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl<T> From<OperationResult<T>> for Result<T, String> {
    fn from(result: OperationResult<T>) -> Self {
        match result {
            OperationResult::Success(data) => Ok(data),
            OperationResult::Failure(message) => Err(message),
        }
    }
}
