//! The (error, result) pair an action reports and the delegate hands back.

/// Result of running a transition action.
///
/// Unlike `Result`, a failed outcome can still carry a result value: whatever
/// the action produced alongside its error is kept and returned to the
/// caller. The delegate forwards outcomes unchanged, so the error type is
/// entirely the processor's choice.
///
/// # Example
///
/// ```rust
/// use stagehand::Outcome;
///
/// let ok: Outcome<&str, String> = Outcome::success("ok");
/// assert!(ok.is_success());
/// assert_eq!(ok.result(), Some(&"ok"));
///
/// let partial = Outcome::failure_with("quota exceeded".to_string(), 3);
/// assert_eq!(partial.error().map(String::as_str), Some("quota exceeded"));
/// assert_eq!(partial.result(), Some(&3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T, E> {
    error: Option<E>,
    result: Option<T>,
}

impl<T, E> Outcome<T, E> {
    /// Success carrying a result.
    pub fn success(result: T) -> Self {
        Self {
            error: None,
            result: Some(result),
        }
    }

    /// Success with nothing to report.
    pub fn empty() -> Self {
        Self {
            error: None,
            result: None,
        }
    }

    /// Failure with no accompanying result.
    pub fn failure(error: E) -> Self {
        Self {
            error: Some(error),
            result: None,
        }
    }

    /// Failure that still produced a result.
    pub fn failure_with(error: E, result: T) -> Self {
        Self {
            error: Some(error),
            result: Some(result),
        }
    }

    pub fn from_parts(error: Option<E>, result: Option<T>) -> Self {
        Self { error, result }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_parts(self) -> (Option<E>, Option<T>) {
        (self.error, self.result)
    }

    /// Convert to a `Result`, dropping any result that accompanied an error.
    ///
    /// Use [`into_parts`](Self::into_parts) when a partial result matters.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result),
        }
    }

    /// Transform the result value, keeping the error as is.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            error: self.error,
            result: self.result.map(f),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_error() {
        let outcome: Outcome<u32, String> = Outcome::success(7);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.into_parts(), (None, Some(7)));
    }

    #[test]
    fn empty_is_success_without_result() {
        let outcome: Outcome<u32, String> = Outcome::empty();
        assert!(outcome.is_success());
        assert_eq!(outcome.result(), None);
    }

    #[test]
    fn failure_keeps_partial_result() {
        let outcome = Outcome::failure_with("boom", 42);
        assert!(outcome.is_failure());
        assert_eq!(outcome.into_parts(), (Some("boom"), Some(42)));
    }

    #[test]
    fn into_result_supports_question_mark() {
        fn run(outcome: Outcome<u32, &'static str>) -> Result<u32, &'static str> {
            Ok(outcome.into_result()?.unwrap_or_default())
        }

        assert_eq!(run(Outcome::success(5)), Ok(5));
        assert_eq!(run(Outcome::empty()), Ok(0));
        assert_eq!(run(Outcome::failure_with("bad", 9)), Err("bad"));
    }

    #[test]
    fn converts_from_result() {
        let ok: Outcome<u8, &str> = Ok(1).into();
        let err: Outcome<u8, &str> = Err("nope").into();

        assert_eq!(ok, Outcome::success(1));
        assert_eq!(err, Outcome::failure("nope"));
    }

    #[test]
    fn map_preserves_error() {
        let outcome = Outcome::failure_with("late", 2).map(|n| n * 10);
        assert_eq!(outcome.into_parts(), (Some("late"), Some(20)));
    }
}
