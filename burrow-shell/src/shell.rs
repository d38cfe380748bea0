use burrow::{Dispatcher, Session, Value};
use rustyline::{error::ReadlineError, history::MemHistory, Config, Editor};
use std::fs;

/// Invokes an interactive REPL for the given dispatcher and session, using
/// `rustyline` line editing.
///
/// Each input line is tokenized into a command name plus argument strings
/// and dispatched; results are echoed and errors are reported, and the
/// session remains usable after a failed command.  Press `^C` or `^D` to
/// leave the REPL, returning control to the caller.
///
/// If a command raises the terminate signal (the standard `abort` and `quit`
/// commands do), the REPL stops reading input and returns `Some(status)`;
/// the caller should exit the process with that status once it has done any
/// teardown of its own.  Otherwise the return value is `None`.
///
/// See [`burrow::dispatch`] for details on how to configure and add commands
/// to a dispatcher.
///
/// # Example
///
/// ```no_run
/// use burrow::{Dispatcher, Session};
///
/// // FIRST, create and initialize the dispatcher and session.
/// let mut dispatcher = Dispatcher::new();
/// let mut session = Session::new();
///
/// // NOTE: commands can be added to the dispatcher here.
///
/// // NEXT, invoke the REPL.
/// if let Some(status) = burrow_shell::repl(&mut dispatcher, &mut session) {
///     std::process::exit(status);
/// }
/// ```
pub fn repl(dispatcher: &mut Dispatcher, session: &mut Session) -> Option<i32> {
    let mut rl = Editor::<(), MemHistory>::with_history(Config::default(), MemHistory::new())
        .expect("failed to init rustyline");

    loop {
        match rl.readline("% ") {
            Ok(line) => {
                let Some((name, args)) = split_command(&line) else {
                    continue;
                };

                if let Err(e) = rl.add_history_entry(line.trim()) {
                    eprintln!("History error: {e}");
                }

                match dispatcher.dispatch(name, &args, session) {
                    Ok(Some(value)) => println!("{}", value),
                    Ok(None) => (),
                    Err(exception) => {
                        if let Some(status) = exception.terminate_status() {
                            return Some(status);
                        }
                        println!("{}", exception);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("I/O Error: {:?}", err);
                break;
            }
        }
    }

    None
}

/// Executes a script from a set of command line arguments.
///
/// `args[0]` is presumed to be the name of a script file containing one
/// command per line, with any subsequent arguments being arguments to pass
/// to the script.  Blank lines and lines starting with `#` are skipped.
/// The first command that fails stops the run with an error report and a
/// `Some(1)` status; the terminate signal stops it with the carried status.
/// A script that runs to completion returns `None`.
///
/// # Session Variables
///
/// The calling information is passed to the script in the form of session
/// variables:
///
/// * The variable `arg0` is set to the script file name.
/// * The variable `argv` is set to a sequence holding the remainder of the
///   `args` array.
pub fn script(dispatcher: &mut Dispatcher, session: &mut Session, args: &[String]) -> Option<i32> {
    let arg0 = &args[0];
    let argv = &args[1..];
    match fs::read_to_string(arg0) {
        Ok(text) => execute_script(dispatcher, session, &text, arg0, argv),
        Err(e) => {
            eprintln!("{}", e);
            Some(1)
        }
    }
}

/// Executes the text of a script, line by line, in the context of the given
/// dispatcher and session.
fn execute_script(
    dispatcher: &mut Dispatcher,
    session: &mut Session,
    text: &str,
    arg0: &str,
    argv: &[String],
) -> Option<i32> {
    let argv: Vec<Value> = argv.iter().map(Value::from).collect();
    session.set_var("arg0", Value::from(arg0));
    session.set_var("argv", Value::from(argv));

    for line in text.lines() {
        let Some((name, args)) = split_command(line) else {
            continue;
        };

        match dispatcher.dispatch(name, &args, session) {
            Ok(_) => (),
            Err(exception) => {
                if let Some(status) = exception.terminate_status() {
                    return Some(status);
                }
                eprintln!("{}", exception);
                return Some(1);
            }
        }
    }

    None
}

/// Splits an input line into a command name and its argument strings.
/// Tokens are separated by whitespace; there is no quoting.  Returns `None`
/// for blank lines and `#` comment lines.
fn split_command(line: &str) -> Option<(&str, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut words = line.split_whitespace();
    let name = words.next()?;
    let args: Vec<String> = words.map(String::from).collect();
    Some((name, args))
}
