//! Convenience macros for writing Burrow commands.

/// Returns an `Ok` [`DispatchResult`](crate::types::DispatchResult).
///
/// With no argument the command produces no result (a pure side effect, the
/// last result is left alone); with one argument the argument is converted
/// to a [`Value`](crate::value::Value) and becomes the new last result.
///
/// # Examples
///
/// ```
/// use burrow::burrow_ok;
/// use burrow::types::DispatchResult;
///
/// fn no_result() -> DispatchResult {
///     burrow_ok!()
/// }
///
/// fn some_result() -> DispatchResult {
///     burrow_ok!(42)
/// }
///
/// assert_eq!(no_result(), Ok(None));
/// assert_eq!(some_result(), Ok(Some(burrow::Value::from(42))));
/// ```
#[macro_export]
macro_rules! burrow_ok {
    () => {
        Ok(None)
    };
    ($value:expr) => {
        Ok(Some($crate::value::Value::from($value)))
    };
}

/// Returns an `Err` [`DispatchResult`](crate::types::DispatchResult) of the
/// given [`ErrorKind`](crate::types::ErrorKind), with a formatted message.
///
/// # Examples
///
/// ```
/// use burrow::burrow_err;
/// use burrow::types::{DispatchResult, ErrorKind};
///
/// fn fails() -> DispatchResult {
///     burrow_err!(ErrorKind::Argument, "expected integer but got \"{}\"", "abc")
/// }
///
/// let exception = fails().unwrap_err();
/// assert_eq!(exception.error_kind(), Some(ErrorKind::Argument));
/// assert_eq!(exception.message(), "expected integer but got \"abc\"");
/// ```
#[macro_export]
macro_rules! burrow_err {
    ($kind:expr, $msg:expr) => {
        Err($crate::types::Exception::error($kind, $msg))
    };
    ($kind:expr, $fmt:expr, $($arg:expr),+) => {
        Err($crate::types::Exception::error($kind, format!($fmt, $($arg),+)))
    };
}
