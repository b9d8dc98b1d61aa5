//! A small interactive shell that answers in a typewriter style.
//!
//! Each line read from the terminal is echoed back dimmed and then handled as one
//! of three things: a builtin (`help`, `version`, `exit`/`quit`), a re-typed program
//! invocation such as `interactive_cli -p "$ "` whose flags are parsed like the
//! real command line, or free text that the session simply repeats.
//!
//! The main entry point is [`Session`]. Input comes through the [`input::LineReader`]
//! trait so that sessions can be driven from a terminal or from a script.

pub mod command;
pub mod config;
pub mod input;
mod interpreter;
mod lexer;
pub mod logging;
pub mod output;
pub mod parser;

pub use config::Config;
pub use interpreter::{Session, respond};
pub use lexer::{LexingError, split_into_words};
