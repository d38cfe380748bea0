//! The Burrow value type.
//!
//! [`Value`] is the type of everything a command can produce or consume: the
//! entries in a command's `argv`, the session's variables, and the last
//! result threaded from one command to the next.  It is a tagged enum, so
//! shape checks ("is the prior result a sequence?") are ordinary pattern
//! matches rather than runtime type probes, and the "wrong shape" paths are
//! exhaustive at compile time.
//!
//! Compound payloads are reference-counted, so cloning a `Value` is cheap
//! regardless of its size.  Like the rest of Burrow, `Value` is intended for
//! use in a single thread and is not `Sync`.
//!
//! # Conversions
//!
//! `Value` implements `From` for the usual primitives, string types, vectors
//! of values, and [`ValueMap`]; the accessor methods go the other way.
//! [`Value::as_int`] accepts both the `Int` tag and `Str` tokens that parse
//! as integers, since command arguments arrive as raw tokens:
//!
//! ```
//! use burrow::Value;
//! # use burrow::types::DispatchResult;
//! # let _ = dummy();
//! # fn dummy() -> DispatchResult {
//! assert_eq!(Value::from("12").as_int()?, 12);
//! assert_eq!(Value::from(12).as_int()?, 12);
//! assert!(Value::from("abc").as_int().is_err());
//! # burrow::burrow_ok!()
//! # }
//! ```

use crate::types::{BurrowFloat, BurrowInt, ErrorKind, Exception, ValueMap};
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A Burrow value: the tagged, cheaply clonable datum passed between
/// commands.  See the [module level documentation](index.html) for an
/// overview.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),

    /// A signed integer.
    Int(BurrowInt),

    /// A floating-point number.
    Float(BurrowFloat),

    /// A string.
    Str(Rc<str>),

    /// A fixed-size ordered sequence of values.
    List(Rc<[Value]>),

    /// An insertion-ordered mapping from string keys to values.
    Dict(Rc<ValueMap>),
}

impl Value {
    /// Returns the value as an integer.  `Int` values are returned directly;
    /// `Str` values are parsed, which is how raw argument tokens become
    /// offsets and counts.  Anything else is an `Argument` error.
    pub fn as_int(&self) -> Result<BurrowInt, Exception> {
        match self {
            Value::Int(int) => Ok(*int),
            Value::Str(string) => string.trim().parse().map_err(|_| {
                Exception::error(
                    ErrorKind::Argument,
                    format!("expected integer but got \"{}\"", string),
                )
            }),
            _ => Err(Exception::error(
                ErrorKind::Argument,
                format!("expected integer but got \"{}\"", self),
            )),
        }
    }

    /// Returns the value as a string slice, if it has the `Str` tag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the value's elements if it is a sequence, and a
    /// `TypeMismatch` error otherwise.
    pub fn as_list(&self) -> Result<&[Value], Exception> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(Exception::error(
                ErrorKind::TypeMismatch,
                format!("expected sequence but got \"{}\"", self),
            )),
        }
    }

    /// Returns the value's entries if it is a mapping, and a `TypeMismatch`
    /// error otherwise.
    pub fn as_dict(&self) -> Result<&ValueMap, Exception> {
        match self {
            Value::Dict(map) => Ok(map),
            _ => Err(Exception::error(
                ErrorKind::TypeMismatch,
                format!("expected mapping but got \"{}\"", self),
            )),
        }
    }

    /// Returns true if the value is a sequence.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(flag) => write!(f, "{}", flag),
            Value::Int(int) => write!(f, "{}", int),
            Value::Float(float) => write!(f, "{}", float),
            Value::Str(string) => write!(f, "{}", string),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Dict(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<BurrowInt> for Value {
    fn from(int: BurrowInt) -> Self {
        Value::Int(int)
    }
}

impl From<BurrowFloat> for Value {
    fn from(float: BurrowFloat) -> Self {
        Value::Float(float)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Value::Str(Rc::from(string))
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Value::Str(Rc::from(string.as_str()))
    }
}

impl From<&String> for Value {
    fn from(string: &String) -> Self {
        Value::Str(Rc::from(string.as_str()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Rc::from(items))
    }
}

impl From<&[Value]> for Value {
    fn from(items: &[Value]) -> Self {
        Value::List(Rc::from(items))
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Dict(Rc::new(map))
    }
}
