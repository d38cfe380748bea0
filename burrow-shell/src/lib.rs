//! Console frontends for the burrow dispatch engine: an interactive REPL
//! and a line-oriented script runner.  Both read input, tokenize each line
//! into a command name plus argument strings, hand the pair to the
//! dispatcher, and report the outcome; neither performs the process exit
//! itself.  See [`repl`] and [`script`].

mod shell;

pub use shell::{repl, script};
