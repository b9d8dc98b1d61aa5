use crate::command::{Builtin, Command, InvocationPrefix};
use crate::config::Config;
use crate::input::LineReader;
use crate::output::Typewriter;
use crate::parser::{self, FlagAction, ParseError};
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use std::io::Write;

const FAREWELL: &str = "Goodbye!";
const INTERRUPT_HINT: &str = "Use 'exit' or 'quit' to end the session.";

/// One interactive session: owns the prompt and the running flag, reads lines
/// and answers them through a [`Typewriter`].
///
/// Example
/// ```
/// use interactive_cli::{Config, Session};
/// use std::time::Duration;
///
/// let config = Config { delay: Duration::ZERO, ..Config::default() };
/// let mut session = Session::new(config, Vec::new());
/// session.handle_line("  hello  ").unwrap();
/// let out = String::from_utf8(session.into_output()).unwrap();
/// assert!(out.ends_with("System: You said 'hello'\n"));
/// ```
pub struct Session<W: Write> {
    prompt: String,
    version: String,
    running: bool,
    invocation: InvocationPrefix,
    out: Typewriter<W>,
}

impl<W: Write> Session<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            prompt: config.prompt,
            version: config.version,
            running: false,
            invocation: config.invocation,
            out: Typewriter::new(out, config.delay),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_output(self) -> W {
        self.out.into_inner()
    }

    /// Greet, then read and answer lines until `exit`/`quit` or end of input.
    ///
    /// Interrupts while waiting for input only print a hint. Errors are returned
    /// only when the output itself can't be written.
    pub fn run(&mut self, input: &mut dyn LineReader) -> Result<()> {
        self.running = true;
        tracing::info!(version = %self.version, "session started");
        self.say(&format!("Interactive CLI (Version {})", self.version))?;
        self.say("Type 'help' for available commands.")?;

        while self.running {
            match input.read_line(&self.prompt) {
                Ok(line) => self.handle_line(&line)?,
                Err(ReadlineError::Interrupted) => self.say(INTERRUPT_HINT)?,
                Err(ReadlineError::Eof) => self.stop()?,
                Err(err) => {
                    tracing::error!("failed to read input: {err}");
                    self.stop()?;
                }
            }
        }

        tracing::info!("session finished");
        Ok(())
    }

    /// Process one raw input line. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        self.out.echo(line).context("failed to echo input")?;

        let command = Command::classify(line, &self.invocation);
        tracing::debug!(?command, "dispatching");
        match command {
            Command::Invocation(text) => self.handle_invocation(text),
            Command::Builtin(Builtin::Exit) => self.stop(),
            Command::Builtin(Builtin::Version) => self.say(&self.version_text()),
            Command::Builtin(Builtin::Help) => self.say(&self.help_text()),
            Command::FreeText(text) => self.say(&respond(text)),
        }
    }

    /// Re-parse a typed program invocation and apply the one action it asks for.
    ///
    /// # Arguments
    /// * `line` - The whole trimmed line, invocation words included.
    ///
    /// # Returns
    /// `Ok` even when the flags are malformed; those are reported to the user.
    /// Only a failed write to the output is an error.
    fn handle_invocation(&mut self, line: &str) -> Result<()> {
        let parsed = self
            .invocation
            .flag_words(line)
            .map_err(ParseError::from)
            .and_then(|words| parser::parse(self.invocation.program_name(), &words));

        let flags = match parsed {
            Ok(flags) => flags,
            Err(err) => {
                tracing::warn!("rejected invocation {line:?}: {err}");
                return self.say(&format!("Error parsing arguments: {err}"));
            }
        };

        match flags.action() {
            Some(FlagAction::ShowHelp) => self.say(&self.help_text()),
            Some(FlagAction::ShowVersion) => self.say(&self.version_text()),
            Some(FlagAction::SetPrompt(new_prompt)) => {
                let old_prompt = std::mem::replace(&mut self.prompt, new_prompt);
                tracing::info!(old = %old_prompt, new = %self.prompt, "prompt changed");
                self.say(&format!(
                    "Prompt changed from '{old_prompt}' to '{}'",
                    self.prompt
                ))
            }
            None => Ok(()),
        }
    }

    /// Say goodbye and end the loop after this iteration.
    fn stop(&mut self) -> Result<()> {
        self.running = false;
        self.say(FAREWELL)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.out.type_out(text).context("failed to write response")
    }

    fn version_text(&self) -> String {
        format!("Interactive CLI Version {}", self.version)
    }

    fn help_text(&self) -> String {
        let invocation = format!("{} [options]", self.invocation.text());
        format!(
            "
Available commands:
  help                  - Show this help message
  version               - Show program version
  exit/quit             - Exit the program
  {invocation:<21} - Execute as command line args
Options:
  -h, --help            - Show help
  -v, --version         - Show version
  -p PROMPT, --prompt PROMPT - Change prompt
"
        )
    }
}

/// Response to anything that isn't a command.
pub fn respond(input: &str) -> String {
    format!("System: You said '{input}'")
}
