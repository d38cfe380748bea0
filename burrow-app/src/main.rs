//! The burrowsh application: an interactive console built on the burrow
//! dispatch engine and the burrow-shell frontend.  With no arguments it
//! runs the REPL; given a file name it runs the file as a script.
//!
//! The terminate signal raised by `abort`/`quit` flows out of the frontend
//! as an exit status; the actual `process::exit` happens here, after the
//! frontend has returned, so this is the place to add any host teardown.

use burrow::{Dispatcher, Session};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut dispatcher = Dispatcher::new();
    let mut session = Session::new();

    let status = if args.len() > 1 {
        burrow_shell::script(&mut dispatcher, &mut session, &args[1..])
    } else {
        burrow_shell::repl(&mut dispatcher, &mut session)
    };

    if let Some(status) = status {
        std::process::exit(status);
    }
}
