//! The console session state.
//!
//! A [`Session`] is the mutable state shared by every command invocation:
//! the variable table, the last result produced by dispatch, and the call
//! stack populated by the host's stepped-execution machinery.  One `Session`
//! is created per console session and is owned exclusively by the dispatch
//! loop until the session ends.

use crate::types::{ErrorKind, Exception, ValueMap};
use crate::value::Value;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A record of one in-progress or completed operation on the call stack:
/// the operation's identifier and its argument values.
#[derive(Clone, Debug, PartialEq)]
pub struct CallFrame {
    target: String,
    args: Vec<Value>,
}

impl CallFrame {
    /// Creates a frame for the given operation and arguments.
    pub fn new(target: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            target: target.into(),
            args,
        }
    }

    /// The identifier of the operation this frame records.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The argument values the operation was invoked with.
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.target)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// The mutable state a command reads and writes.  See the
/// [module level documentation](index.html) for an overview.
///
/// # Example
///
/// ```
/// use burrow::{Session, Value};
/// # use burrow::types::DispatchResult;
/// # let _ = dummy();
/// # fn dummy() -> DispatchResult {
/// let mut session = Session::new();
///
/// session.set_var("greeting", Value::from("hello"));
/// assert_eq!(session.var("greeting")?, Value::from("hello"));
/// # burrow::burrow_ok!()
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Session {
    // Variable table.  Mutated only by commands that explicitly assign.
    variables: ValueMap,

    // The value produced by the most recently executed command; None
    // before any command runs.
    last_result: Option<Value>,

    // Call-frame stack, top of stack last.  Populated by the host's
    // stepped-execution machinery, never by the commands themselves.
    call_stack: Vec<CallFrame>,
}

impl Session {
    /// Creates a new, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    //--------------------------------------------------------------------------------------------
    // Variables

    /// Retrieves the value of the named variable.  Returns an error if the
    /// variable is not bound.
    pub fn var(&self, name: &str) -> Result<Value, Exception> {
        self.variables.get(name).cloned().ok_or_else(|| {
            Exception::error(
                ErrorKind::Argument,
                format!("can't read \"{}\": no such variable", name),
            )
        })
    }

    /// Returns true if the named variable is bound.
    pub fn var_exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds the named variable to the given value, creating the variable if
    /// necessary.
    pub fn set_var(&mut self, name: &str, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Unbinds the named variable.  It is _not_ an error to unset a variable
    /// that doesn't exist.
    pub fn unset_var(&mut self, name: &str) {
        self.variables.shift_remove(name);
    }

    /// The names of the bound variables, in binding order.
    pub fn var_names(&self) -> Vec<&str> {
        self.variables.keys().map(String::as_str).collect()
    }

    //--------------------------------------------------------------------------------------------
    // Last result

    /// The value produced by the most recently executed command, if any.
    pub fn last_result(&self) -> Option<&Value> {
        self.last_result.as_ref()
    }

    /// Replaces the last result.  The dispatcher calls this after every
    /// successful dispatch that produces a value; hosts call it to seed the
    /// session with a value for the next command to drill into.
    pub fn set_last_result(&mut self, value: Value) {
        self.last_result = Some(value);
    }

    //--------------------------------------------------------------------------------------------
    // Call stack

    /// Pushes a frame onto the call stack.  Called by the host's
    /// stepped-execution machinery as operations begin.
    pub fn push_frame(&mut self, frame: CallFrame) {
        self.call_stack.push(frame);
    }

    /// Pops the most recent frame off the call stack, if any.  Calls to
    /// `push_frame` and `pop_frame` must exist in pairs.
    pub fn pop_frame(&mut self) -> Option<CallFrame> {
        self.call_stack.pop()
    }

    /// The call stack, oldest frame first; the last frame is the top of the
    /// stack.
    pub fn frames(&self) -> &[CallFrame] {
        &self.call_stack
    }
}
