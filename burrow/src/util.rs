//! Utility functions for command implementations.

use crate::types::{ErrorKind, Exception};
use crate::value::Value;
use alloc::string::String;
use core::fmt::Write as _;

/// Checks a command's argument count against the command's signature,
/// producing the standard error message if the count is out of range.
///
/// * `namec` is the number of words at the front of `argv` that name the
///   command (usually 1).
/// * `argv` is the command's argument vector, name included.
/// * `min` and `max` are the minimum and maximum valid lengths of `argv`;
///   a `max` of 0 means there is no maximum.
/// * `argsig` is the argument signature shown in the error message.
///
/// # Example
///
/// ```
/// use burrow::check_args;
/// use burrow::Value;
///
/// let argv = [Value::from("index")];
/// let exception = check_args(1, &argv, 2, 2, "offset").unwrap_err();
///
/// assert_eq!(exception.message(), "wrong # args: should be \"index offset\"");
/// ```
pub fn check_args(
    namec: usize,
    argv: &[Value],
    min: usize,
    max: usize,
    argsig: &str,
) -> Result<(), Exception> {
    assert!(namec >= 1 && argv.len() >= namec);

    if argv.len() >= min && (max == 0 || argv.len() <= max) {
        return Ok(());
    }

    let mut msg = String::new();
    msg.push_str("wrong # args: should be \"");

    for (i, word) in argv[..namec].iter().enumerate() {
        if i > 0 {
            msg.push(' ');
        }
        let _ = write!(msg, "{}", word);
    }

    if !argsig.is_empty() {
        msg.push(' ');
        msg.push_str(argsig);
    }
    msg.push('"');

    Err(Exception::error(ErrorKind::Argument, msg))
}
