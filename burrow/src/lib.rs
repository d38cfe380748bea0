//! Burrow: an embeddable command console engine.
//!
//! Burrow provides the dispatch core for interactive, debugger-style consoles:
//! a [`Dispatcher`] resolves a command name to a registered implementation,
//! invokes it with its arguments and the shared [`Session`] state, and threads
//! the command's result forward as implicit input to the next command.  The
//! outer read-loop that gathers and tokenizes user input lives in the
//! `burrow-shell` crate; the `burrow-app` crate assembles both into the
//! `burrowsh` binary.
//!
//! The crate is `no_std` (plus `alloc`): nothing in the core touches the
//! OS.  Even process termination is modelled as a result code that flows out
//! of [`Dispatcher::dispatch`] for the host to honor, rather than as a direct
//! `process::exit` call buried in library code.
//!
//! See the [`dispatch`] module for an overview of the dispatch model and for
//! examples of defining and registering commands.

#![no_std]

extern crate alloc;

pub mod commands;
pub mod dispatch;
mod macros;
pub mod session;
pub mod types;
pub mod util;
pub mod value;

pub use dispatch::Dispatcher;
pub use session::{CallFrame, Session};
pub use types::*;
pub use util::check_args;
pub use value::Value;
