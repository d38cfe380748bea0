//! The Burrow Dispatcher
//!
//! The [`Dispatcher`] struct is the primary API for embedding Burrow into a
//! Rust application.  Given a `Dispatcher` and a [`Session`], the application
//! may:
//!
//! * Dispatch parsed command lines and report their results
//! * Extend the console by registering new commands in Rust
//! * Inspect and manage the command registry
//!
//! # Dispatcher is not Sync!
//!
//! The `Dispatcher` (and the rest of Burrow) is intended for use in a single
//! thread: one command runs to completion before the next is dispatched, and
//! the `Session` is owned exclusively by the dispatch loop.  In particular,
//! [`Value`] is not `Sync`.
//!
//! # Creating a Dispatcher
//!
//! There are two ways to create a dispatcher.  The usual way is to call
//! [`Dispatcher::new`], which creates a dispatcher pre-populated with the
//! standard command set; the application then registers any
//! application-specific commands.  Alternatively, [`Dispatcher::empty`]
//! creates a dispatcher with no commands at all, as the basis for a custom
//! console command set.
//!
//! # Dispatching Commands
//!
//! The outer read-loop tokenizes each input line into a command name plus
//! argument strings and calls [`Dispatcher::dispatch`] once per line.  The
//! dispatcher resolves the name in its registry and invokes the command with
//! the arguments, the session, and the session's last result.  When the
//! command produces a value, that value is recorded as the new last result,
//! so the next command can drill into it.
//!
//! ```
//! use burrow::{Dispatcher, Session, Value};
//! use burrow::types::DispatchResult;
//!
//! # let _ = dummy();
//! # fn dummy() -> DispatchResult {
//! let mut dispatcher = Dispatcher::new();
//! let mut session = Session::new();
//!
//! // A previous command produced a sequence...
//! session.set_last_result(Value::from(vec![
//!     Value::from(10), Value::from(20), Value::from(30),
//! ]));
//!
//! // ...and `index 1` drills into it.
//! let value = dispatcher.dispatch("index", &["1".into()], &mut session)?;
//! assert_eq!(value, Some(Value::from(20)));
//! assert_eq!(session.last_result(), Some(&Value::from(20)));
//! # burrow::burrow_ok!()
//! # }
//! ```
//!
//! A dispatch has three possible outcomes.  `Ok(Some(value))` is a computed
//! result, which has already been recorded as the session's last result.
//! `Ok(None)` means the command had nothing to say; the last result is left
//! unchanged.  `Err(exception)` is either a recoverable error, in which case
//! the last result is untouched and the session remains usable (report it
//! and keep reading input), or the terminate signal raised by `abort`, which
//! the host honors by exiting with [`Exception::terminate_status`].  Failed
//! dispatches are never retried automatically.
//!
//! # Defining New Commands
//!
//! The usual way to add a command is to define a [`CommandFunc`] and register
//! it with [`Dispatcher::add_command`].  A `CommandFunc` is a plain function
//! that receives the dispatcher, the argument vector (`argv[0]` is the
//! command name), the prior result, and the session:
//!
//! ```
//! use burrow::{check_args, Dispatcher, Session, Value};
//! use burrow::burrow_ok;
//! use burrow::types::DispatchResult;
//!
//! # let _ = dummy();
//! # fn dummy() -> DispatchResult {
//! let mut dispatcher = Dispatcher::new();
//! let mut session = Session::new();
//! dispatcher.add_command("square", cmd_square);
//!
//! let value = dispatcher.dispatch("square", &["5".into()], &mut session)?;
//! assert_eq!(value, Some(Value::from(25)));
//! # burrow_ok!()
//! # }
//!
//! // The command: square intValue
//! fn cmd_square(
//!     _: &mut Dispatcher,
//!     argv: &[Value],
//!     _prior: Option<&Value>,
//!     _session: &mut Session,
//! ) -> DispatchResult {
//!     check_args(1, argv, 2, 2, "intValue")?;
//!
//!     let int_value = argv[1].as_int()?;
//!     burrow_ok!(int_value * int_value)
//! }
//! ```
//!
//! Commands that need to capture state at registration time are registered
//! with [`Dispatcher::add_command_closure`] instead.
//!
//! [`Value`]: ../value/index.html
//! [`CommandFunc`]: ../types/type.CommandFunc.html
//! [`Exception::terminate_status`]: ../types/struct.Exception.html#method.terminate_status

use crate::commands;
use crate::session::Session;
use crate::types::*;
use crate::value::Value;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use indexmap::IndexMap;

/// The Burrow dispatcher: the command registry plus the dispatch entry
/// point.  See the [module level documentation](index.html) for an overview
/// and examples.
#[derive(Default)]
pub struct Dispatcher {
    // Command registry.  Populated before the first dispatch; read-only
    // during dispatch.
    commands: IndexMap<String, Rc<Command>, BurrowHasher>,
}

/// A command registered with the dispatcher.
enum Command {
    /// A command implemented as a plain Rust function.
    Native(CommandFunc),

    /// A command implemented as a closure.
    Closure(CommandClosure),
}

impl Command {
    /// Executes the command according to its kind.
    fn execute(
        &self,
        dispatcher: &mut Dispatcher,
        argv: &[Value],
        prior: Option<&Value>,
        session: &mut Session,
    ) -> DispatchResult {
        match self {
            Command::Native(func) => func(dispatcher, argv, prior, session),
            Command::Closure(func) => func(dispatcher, argv, prior, session),
        }
    }
}

impl Dispatcher {
    //--------------------------------------------------------------------------------------------
    // Constructors

    /// Creates a new dispatcher with no commands registered.  Use this when
    /// crafting console command sets that shouldn't include the standard
    /// commands.
    ///
    /// # Example
    ///
    /// ```
    /// # use burrow::Dispatcher;
    /// let dispatcher = Dispatcher::empty();
    /// assert!(dispatcher.command_names().is_empty());
    /// ```
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new dispatcher pre-populated with the standard command set.
    /// Use [`command_names`](#method.command_names) (or the `commands`
    /// console command) to retrieve the full list, and the
    /// [`add_command`](#method.add_command) family of methods to extend the
    /// dispatcher with new commands.
    pub fn new() -> Self {
        let mut dispatcher = Dispatcher::empty();

        let std_commands: &[(&'static str, CommandFunc)] = &[
            ("abort", commands::cmd_abort),
            ("commands", commands::cmd_commands),
            ("get", commands::cmd_get),
            ("index", commands::cmd_index),
            ("keys", commands::cmd_keys),
            ("length", commands::cmd_length),
            ("quit", commands::cmd_abort),
            ("set", commands::cmd_set),
            ("stack", commands::cmd_stack),
            ("vars", commands::cmd_vars),
        ];

        for &(name, func) in std_commands {
            dispatcher.add_command(name, func);
        }

        dispatcher
    }

    //--------------------------------------------------------------------------------------------
    // Dispatch

    /// Dispatches one parsed command line: `name` plus its raw argument
    /// tokens, against the given session.
    ///
    /// The command is resolved in the registry and invoked with an argument
    /// vector holding the name and the tokens, and with the session's last
    /// result as its prior value.  If the command produces a value, that
    /// value becomes the session's new last result; if it produces nothing,
    /// the last result is left unchanged.  On error the last result is
    /// untouched and the session remains usable; the terminate signal is
    /// propagated untouched for the host to honor.
    pub fn dispatch(
        &mut self,
        name: &str,
        args: &[String],
        session: &mut Session,
    ) -> DispatchResult {
        let cmd = match self.commands.get(name) {
            Some(cmd) => Rc::clone(cmd),
            None => return Err(Exception::unknown_command(name)),
        };

        let mut argv: BurrowList = Vec::with_capacity(args.len() + 1);
        argv.push(Value::from(name));
        argv.extend(args.iter().map(Value::from));

        let prior = session.last_result().cloned();
        let result = cmd.execute(self, &argv, prior.as_ref(), session)?;

        if let Some(value) = &result {
            session.set_last_result(value.clone());
        }

        Ok(result)
    }

    //--------------------------------------------------------------------------------------------
    // Command Definition and Handling

    /// Registers a command implemented as a plain Rust function.  This is
    /// the normal way to add most commands.
    ///
    /// Registering a name that is already taken silently replaces the old
    /// command; this is how applications redefine or alias standard
    /// commands.
    pub fn add_command(&mut self, name: &str, func: CommandFunc) {
        self.commands
            .insert(name.into(), Rc::new(Command::Native(func)));
    }

    /// Registers a command implemented as a closure, for commands that
    /// capture state at registration time.  The replacement policy is the
    /// same as for [`add_command`](#method.add_command).
    pub fn add_command_closure(
        &mut self,
        name: &str,
        func: impl (Fn(&mut Self, &[Value], Option<&Value>, &mut Session) -> DispatchResult) + 'static,
    ) {
        self.commands
            .insert(name.into(), Rc::new(Command::Closure(Box::new(func))));
    }

    /// Determines whether or not the dispatcher contains a command with the
    /// given name.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Removes the command with the given name.
    ///
    /// # Example
    ///
    /// ```
    /// use burrow::Dispatcher;
    ///
    /// let mut dispatcher = Dispatcher::new();
    ///
    /// dispatcher.remove_command("quit");  // You'll be sorry....
    ///
    /// assert!(!dispatcher.has_command("quit"));
    /// ```
    pub fn remove_command(&mut self, name: &str) {
        self.commands.shift_remove(name);
    }

    /// Gets a vector of the names of the registered commands, in
    /// registration order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burrow_ok;
    use alloc::string::ToString;
    use alloc::vec;

    // Dispatches against a fresh standard dispatcher/session pair seeded
    // with the given last result.
    fn dispatch_with_prior(name: &str, args: &[&str], prior: Value) -> (DispatchResult, Session) {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();
        session.set_last_result(prior);

        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let result = dispatcher.dispatch(name, &args, &mut session);
        (result, session)
    }

    #[test]
    fn test_empty() {
        let dispatcher = Dispatcher::empty();
        assert!(dispatcher.command_names().is_empty());
    }

    #[test]
    fn test_new() {
        let dispatcher = Dispatcher::new();

        for name in ["abort", "index", "quit", "set", "get", "vars", "stack"] {
            assert!(dispatcher.has_command(name), "missing {}", name);
        }
    }

    #[test]
    fn test_lookup_returns_registered_command() {
        let mut dispatcher = Dispatcher::empty();
        let mut session = Session::new();

        fn cmd_one(
            _: &mut Dispatcher,
            _: &[Value],
            _: Option<&Value>,
            _: &mut Session,
        ) -> DispatchResult {
            burrow_ok!(1)
        }
        fn cmd_two(
            _: &mut Dispatcher,
            _: &[Value],
            _: Option<&Value>,
            _: &mut Session,
        ) -> DispatchResult {
            burrow_ok!(2)
        }

        dispatcher.add_command("one", cmd_one);
        dispatcher.add_command("two", cmd_two);

        // Lookup resolves to exactly the command registered under the name.
        assert_eq!(
            dispatcher.dispatch("one", &[], &mut session),
            Ok(Some(Value::from(1)))
        );
        assert_eq!(
            dispatcher.dispatch("two", &[], &mut session),
            Ok(Some(Value::from(2)))
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        let exception = dispatcher
            .dispatch("bogus", &[], &mut session)
            .unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::UnknownCommand));
        assert_eq!(exception.message(), "invalid command name \"bogus\"");

        // The session stays usable.
        assert!(dispatcher.dispatch("vars", &[], &mut session).is_ok());
    }

    #[test]
    fn test_registration_replaces() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        dispatcher.add_command_closure("index", |_, _, _, _| burrow_ok!("shadowed"));

        assert_eq!(
            dispatcher.dispatch("index", &[], &mut session),
            Ok(Some(Value::from("shadowed")))
        );
    }

    #[test]
    fn test_result_piping() {
        let list = Value::from(vec![Value::from(10), Value::from(20), Value::from(30)]);
        let (result, session) = dispatch_with_prior("index", &["1"], list);

        assert_eq!(result, Ok(Some(Value::from(20))));
        assert_eq!(session.last_result(), Some(&Value::from(20)));
    }

    #[test]
    fn test_failure_leaves_last_result() {
        let list = Value::from(vec![Value::from(10), Value::from(20), Value::from(30)]);
        let (result, session) = dispatch_with_prior("index", &["5"], list.clone());

        let exception = result.unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::OutOfRange));
        assert_eq!(session.last_result(), Some(&list));
    }

    #[test]
    fn test_no_result_leaves_last_result() {
        // `index` against a non-sequence prior result is a silent no-op.
        let (result, session) = dispatch_with_prior("index", &["1"], Value::from("scalar"));

        assert_eq!(result, Ok(None));
        assert_eq!(session.last_result(), Some(&Value::from("scalar")));
    }

    #[test]
    fn test_terminate_signal() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        let exception = dispatcher.dispatch("quit", &[], &mut session).unwrap_err();
        assert!(exception.is_terminate());
        assert_eq!(exception.terminate_status(), Some(0));
    }

    #[test]
    fn test_remove_command() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        dispatcher.remove_command("index");
        assert!(!dispatcher.has_command("index"));

        let exception = dispatcher
            .dispatch("index", &["0".to_string()], &mut session)
            .unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::UnknownCommand));
    }
}
