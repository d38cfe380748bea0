//! Public types used throughout Burrow.
//!
//! The most important are [`DispatchResult`], the return type of every
//! command, and [`Exception`], which carries both real errors and the
//! terminate signal up through the dispatcher.

use crate::dispatch::Dispatcher;
use crate::session::Session;
use crate::value::Value;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::hash::BuildHasherDefault;
use indexmap::IndexMap;

/// The integer type used by Burrow values.
pub type BurrowInt = i64;

/// The floating-point type used by Burrow values.
pub type BurrowFloat = f64;

/// A growable vector of values, e.g., a command's `argv`.
pub type BurrowList = alloc::vec::Vec<Value>;

/// The hasher used for Burrow's internal maps: FNV, which is faster than
/// SipHash for the short string keys used here.
pub type BurrowHasher = BuildHasherDefault<fnv::FnvHasher>;

/// An insertion-ordered map from string keys to values; the payload of
/// [`Value::Dict`](crate::value::Value) and the session's variable table.
pub type ValueMap = IndexMap<String, Value, BurrowHasher>;

/// The result of dispatching a command: the new last result (`Some`), no
/// result at all (`None`, a pure side effect), or an [`Exception`].
pub type DispatchResult = Result<Option<Value>, Exception>;

/// A plain-function command implementation.  `argv[0]` is the command name
/// and `argv[1..]` are the raw argument tokens; `prior` is the session's
/// last result at the time of dispatch, if any.
pub type CommandFunc =
    fn(&mut Dispatcher, argv: &[Value], prior: Option<&Value>, session: &mut Session) -> DispatchResult;

/// A closure command implementation, for commands that capture state at
/// registration time.
pub type CommandClosure = Box<
    dyn Fn(&mut Dispatcher, &[Value], Option<&Value>, &mut Session) -> DispatchResult,
>;

/// The kinds of error a dispatch can report.  All of them are recovered at
/// the dispatcher boundary: the session remains usable afterward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The command name is not registered.
    UnknownCommand,

    /// A required argument is missing or cannot be parsed as the expected
    /// type.
    Argument,

    /// The prior result does not have the shape the command requires.
    TypeMismatch,

    /// A well-formed offset that falls outside the valid range.
    OutOfRange,
}

/// The disposition carried by an [`Exception`]: a real error, or the
/// terminate signal, which is a documented terminal outcome rather than an
/// error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResultCode {
    /// A recoverable dispatch error.
    Error(ErrorKind),

    /// The host process should exit with the given status.
    Terminate(i32),
}

/// An exceptional return from a command: either a recoverable error with a
/// message for the user, or the terminate signal raised by `abort`.
///
/// The dispatcher propagates exceptions untouched; the caller's read-loop
/// reports errors and keeps going, and honors `Terminate` by shutting the
/// host down with the carried status.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Exception {
    code: ResultCode,
    message: String,
}

impl Exception {
    /// Creates an error exception of the given kind with a message for the
    /// user.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code: ResultCode::Error(kind),
            message: message.into(),
        }
    }

    /// Creates the error raised when a command name has no registry entry.
    pub fn unknown_command(name: &str) -> Self {
        Self::error(
            ErrorKind::UnknownCommand,
            format!("invalid command name \"{}\"", name),
        )
    }

    /// Creates the terminate signal: the host process should exit with
    /// `status` once the signal reaches its main loop.
    pub fn terminate(status: i32) -> Self {
        Self {
            code: ResultCode::Terminate(status),
            message: String::new(),
        }
    }

    /// The exception's result code.
    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// The error kind, if this exception is an error.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.code {
            ResultCode::Error(kind) => Some(kind),
            ResultCode::Terminate(_) => None,
        }
    }

    /// The message to report to the user.  Empty for the terminate signal.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this exception is a recoverable error.
    pub fn is_error(&self) -> bool {
        matches!(self.code, ResultCode::Error(_))
    }

    /// Returns true if this exception is the terminate signal.
    pub fn is_terminate(&self) -> bool {
        matches!(self.code, ResultCode::Terminate(_))
    }

    /// The exit status carried by the terminate signal, if that's what this
    /// exception is.
    pub fn terminate_status(&self) -> Option<i32> {
        match self.code {
            ResultCode::Terminate(status) => Some(status),
            ResultCode::Error(_) => None,
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ResultCode::Error(_) => write!(f, "{}", self.message),
            ResultCode::Terminate(status) => write!(f, "terminated with status {}", status),
        }
    }
}
