//! The standard command set.
//!
//! These are the commands a [`Dispatcher::new`](crate::dispatch::Dispatcher)
//! starts with.  Each is an ordinary [`CommandFunc`](crate::types::CommandFunc)
//! and can be removed, replaced, or registered under other names by the
//! application.
//!
//! The drill-down commands (`index`, `length`, `keys`) share one policy: a
//! prior result of the wrong shape makes the command not applicable, and it
//! returns no value rather than an error.  A missing or malformed argument
//! is still an error.

use crate::burrow_err;
use crate::burrow_ok;
use crate::check_args;
use crate::dispatch::Dispatcher;
use crate::session::Session;
use crate::types::*;
use crate::value::Value;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::ToString;

/// The commands: abort, quit
///
/// Raises the terminate signal with the success status.  The dispatcher
/// propagates the signal to the host's main loop, which performs the actual
/// process exit; control never returns to the console, so any partially
/// built session state is simply discarded.
pub fn cmd_abort(
    _: &mut Dispatcher,
    _argv: &[Value],
    _prior: Option<&Value>,
    _session: &mut Session,
) -> DispatchResult {
    Err(Exception::terminate(0))
}

/// The command: index offset
///
/// Returns the element at `offset` in the prior result, which must be a
/// sequence.  A prior result of any other shape makes the command a silent
/// no-op; the shape is checked before the arguments are.
pub fn cmd_index(
    _: &mut Dispatcher,
    argv: &[Value],
    prior: Option<&Value>,
    _session: &mut Session,
) -> DispatchResult {
    let items = match prior {
        Some(Value::List(items)) => Rc::clone(items),
        _ => return burrow_ok!(),
    };

    check_args(1, argv, 2, 2, "offset")?;
    let offset = argv[1].as_int()?;

    if offset < 0 || offset as usize >= items.len() {
        return burrow_err!(
            ErrorKind::OutOfRange,
            "offset {} is out of range for sequence of length {}",
            offset,
            items.len()
        );
    }

    Ok(Some(items[offset as usize].clone()))
}

/// The command: length
///
/// Returns the element count of the prior result, which must be a sequence;
/// any other shape makes the command a silent no-op.
pub fn cmd_length(
    _: &mut Dispatcher,
    argv: &[Value],
    prior: Option<&Value>,
    _session: &mut Session,
) -> DispatchResult {
    let items = match prior {
        Some(Value::List(items)) => items,
        _ => return burrow_ok!(),
    };

    check_args(1, argv, 1, 1, "")?;
    burrow_ok!(items.len() as BurrowInt)
}

/// The command: keys
///
/// Returns the keys of the prior result, which must be a mapping, as a
/// sequence of strings in insertion order; any other shape makes the
/// command a silent no-op.
pub fn cmd_keys(
    _: &mut Dispatcher,
    argv: &[Value],
    prior: Option<&Value>,
    _session: &mut Session,
) -> DispatchResult {
    let map = match prior {
        Some(Value::Dict(map)) => map,
        _ => return burrow_ok!(),
    };

    check_args(1, argv, 1, 1, "")?;
    let keys: BurrowList = map.keys().map(Value::from).collect();
    burrow_ok!(keys)
}

/// The command: set name
///
/// Binds the prior result to `name` in the session's variable table and
/// returns it, so the drill-down chain continues from the same value.
pub fn cmd_set(
    _: &mut Dispatcher,
    argv: &[Value],
    prior: Option<&Value>,
    session: &mut Session,
) -> DispatchResult {
    check_args(1, argv, 2, 2, "name")?;

    let Some(value) = prior else {
        return burrow_err!(ErrorKind::TypeMismatch, "no result to bind");
    };

    session.set_var(&argv[1].to_string(), value.clone());
    Ok(Some(value.clone()))
}

/// The command: get name
///
/// Recalls the named variable as the new last result.
pub fn cmd_get(
    _: &mut Dispatcher,
    argv: &[Value],
    _prior: Option<&Value>,
    session: &mut Session,
) -> DispatchResult {
    check_args(1, argv, 2, 2, "name")?;

    Ok(Some(session.var(&argv[1].to_string())?))
}

/// The command: vars
///
/// Returns the bound variable names as a sequence, in binding order.
pub fn cmd_vars(
    _: &mut Dispatcher,
    argv: &[Value],
    _prior: Option<&Value>,
    session: &mut Session,
) -> DispatchResult {
    check_args(1, argv, 1, 1, "")?;

    let names: BurrowList = session.var_names().iter().copied().map(Value::from).collect();
    burrow_ok!(names)
}

/// The command: stack
///
/// Returns the session's call stack as a sequence of rendered frames, most
/// recent first.  Read-only; the stack is populated by the host, not by
/// commands.
pub fn cmd_stack(
    _: &mut Dispatcher,
    argv: &[Value],
    _prior: Option<&Value>,
    session: &mut Session,
) -> DispatchResult {
    check_args(1, argv, 1, 1, "")?;

    let frames: BurrowList = session
        .frames()
        .iter()
        .rev()
        .map(|frame| Value::from(frame.to_string()))
        .collect();
    burrow_ok!(frames)
}

/// The command: commands
///
/// Returns the registered command names as a sequence, in registration
/// order.
pub fn cmd_commands(
    dispatcher: &mut Dispatcher,
    argv: &[Value],
    _prior: Option<&Value>,
    _session: &mut Session,
) -> DispatchResult {
    check_args(1, argv, 1, 1, "")?;

    let names: BurrowList = dispatcher
        .command_names()
        .iter()
        .copied()
        .map(Value::from)
        .collect();
    burrow_ok!(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CallFrame;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    fn dispatch(
        dispatcher: &mut Dispatcher,
        session: &mut Session,
        name: &str,
        args: &[&str],
    ) -> DispatchResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        dispatcher.dispatch(name, &args, session)
    }

    fn sample_list() -> Value {
        Value::from(vec![Value::from(10), Value::from(20), Value::from(30)])
    }

    #[test]
    fn test_index_in_range() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();
        session.set_last_result(sample_list());

        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "index", &["0"]),
            Ok(Some(Value::from(10)))
        );

        session.set_last_result(sample_list());
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "index", &["2"]),
            Ok(Some(Value::from(30)))
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();
        session.set_last_result(sample_list());

        let exception = dispatch(&mut dispatcher, &mut session, "index", &["5"]).unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::OutOfRange));
        assert_eq!(
            exception.message(),
            "offset 5 is out of range for sequence of length 3"
        );

        // Negative offsets parse fine, but are out of range, not malformed.
        let exception = dispatch(&mut dispatcher, &mut session, "index", &["-1"]).unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn test_index_bad_argument() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();
        session.set_last_result(sample_list());

        let exception = dispatch(&mut dispatcher, &mut session, "index", &["abc"]).unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::Argument));
        assert_eq!(exception.message(), "expected integer but got \"abc\"");

        let exception = dispatch(&mut dispatcher, &mut session, "index", &[]).unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::Argument));
        assert_eq!(
            exception.message(),
            "wrong # args: should be \"index offset\""
        );
    }

    #[test]
    fn test_index_not_applicable() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        // No prior result at all.
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "index", &["1"]),
            Ok(None)
        );

        // A non-sequence prior result, even with a malformed argument: the
        // shape check comes first.
        session.set_last_result(Value::from("scalar"));
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "index", &["abc"]),
            Ok(None)
        );
        assert_eq!(session.last_result(), Some(&Value::from("scalar")));
    }

    #[test]
    fn test_length() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();
        session.set_last_result(sample_list());

        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "length", &[]),
            Ok(Some(Value::from(3)))
        );

        session.set_last_result(Value::from("scalar"));
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "length", &[]),
            Ok(None)
        );
    }

    #[test]
    fn test_keys() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        let mut map = ValueMap::default();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        session.set_last_result(Value::from(map));

        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "keys", &[]),
            Ok(Some(Value::from(vec![Value::from("a"), Value::from("b")])))
        );

        session.set_last_result(sample_list());
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "keys", &[]),
            Ok(None)
        );
    }

    #[test]
    fn test_set_get_vars() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();
        session.set_last_result(Value::from(42));

        // `set` binds the prior result and returns it.
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "set", &["answer"]),
            Ok(Some(Value::from(42)))
        );

        // Overwrite the last result, then recall the variable.
        session.set_last_result(Value::from("other"));
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "get", &["answer"]),
            Ok(Some(Value::from(42)))
        );
        assert_eq!(session.last_result(), Some(&Value::from(42)));

        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "vars", &[]),
            Ok(Some(Value::from(vec![Value::from("answer")])))
        );
    }

    #[test]
    fn test_set_without_prior() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        let exception = dispatch(&mut dispatcher, &mut session, "set", &["name"]).unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::TypeMismatch));
    }

    #[test]
    fn test_get_unknown_variable() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        let exception = dispatch(&mut dispatcher, &mut session, "get", &["missing"]).unwrap_err();
        assert_eq!(exception.error_kind(), Some(ErrorKind::Argument));
        assert_eq!(
            exception.message(),
            "can't read \"missing\": no such variable"
        );
    }

    #[test]
    fn test_stack() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "stack", &[]),
            Ok(Some(Value::from(Vec::new())))
        );

        session.push_frame(CallFrame::new("outer", vec![Value::from(1)]));
        session.push_frame(CallFrame::new("inner", vec![]));

        // Rendered most recent frame first.
        assert_eq!(
            dispatch(&mut dispatcher, &mut session, "stack", &[]),
            Ok(Some(Value::from(vec![
                Value::from("inner()"),
                Value::from("outer(1)"),
            ])))
        );
    }

    #[test]
    fn test_commands() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        let result = dispatch(&mut dispatcher, &mut session, "commands", &[]).unwrap();
        let names = result.expect("commands returns a value");
        let names = names.as_list().expect("commands returns a sequence");

        assert!(names.contains(&Value::from("abort")));
        assert!(names.contains(&Value::from("index")));
        assert!(names.contains(&Value::from("quit")));
    }

    #[test]
    fn test_abort() {
        let mut dispatcher = Dispatcher::new();
        let mut session = Session::new();

        // `abort` and `quit` share one implementation: both raise the
        // terminate signal with the success status.
        for name in ["abort", "quit"] {
            let exception = dispatch(&mut dispatcher, &mut session, name, &[]).unwrap_err();
            assert!(exception.is_terminate());
            assert_eq!(exception.terminate_status(), Some(0));
        }
    }
}
