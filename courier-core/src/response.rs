//! Handler outcome conversion.

use crate::error::BoxError;

/// Trait for converting a handler closure's output into the engine's
/// success/failure outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<T, E>` → delegates to `T` or boxes the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoOutcome`",
    label = "handlers must return `()` or a `Result`",
    note = "Return `Result<(), E>` where `E` converts into `BoxError`."
)]
pub trait IntoOutcome {
    /// Convert the output into success or a boxed error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_success() {
        assert!(().into_outcome().is_ok());
    }

    #[test]
    fn error_is_boxed() {
        let result: Result<(), String> = Err("boom".into());
        let err = result.into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn nested_result_delegates() {
        let result: Result<Result<(), std::io::Error>, String> =
            Ok(Err(std::io::Error::other("inner")));
        assert_eq!(result.into_outcome().unwrap_err().to_string(), "inner");
    }
}
