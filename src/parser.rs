//! Flag parsing shared by process startup and in-session invocations.

use crate::lexer::LexingError;
use argh::{EarlyExit, FromArgs};
use thiserror::Error;

#[derive(FromArgs, Debug, Default, PartialEq)]
#[argh(help_triggers("-h", "--help"))]
/// An interactive command-line program with typewriter effect.
struct Flags {
    #[argh(switch, short = 'v')]
    /// show program's version number and exit
    version: bool,

    #[argh(option, short = 'p')]
    /// change the command prompt (default: '> ')
    prompt: Option<String>,
}

/// Errors produced while turning words into [`ParsedFlags`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The command line could not be split into words.
    #[error(transparent)]
    Tokenize(#[from] LexingError),
    /// Unknown flag, missing option value, stray positional argument.
    #[error("{0}")]
    Invalid(String),
}

/// Options recognized on one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlags {
    pub help: bool,
    pub version: bool,
    pub prompt: Option<String>,
}

/// The single effect a parsed command line has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagAction {
    ShowHelp,
    ShowVersion,
    SetPrompt(String),
}

impl ParsedFlags {
    /// Resolve which action fires. Help wins over version, version wins over prompt.
    ///
    /// An empty prompt value counts as not given.
    pub fn action(&self) -> Option<FlagAction> {
        if self.help {
            Some(FlagAction::ShowHelp)
        } else if self.version {
            Some(FlagAction::ShowVersion)
        } else {
            self.prompt
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| FlagAction::SetPrompt(p.to_string()))
        }
    }
}

/// Words that request help. They may appear anywhere among the flags.
const HELP_SWITCHES: [&str; 2] = ["-h", "--help"];

/// Parse `args` (without the program name) as flags of `program`.
///
/// Help switches are taken out before argh sees the rest, so `-h -v` and `-v -h`
/// both resolve to help while `-h --bogus` is still rejected.
pub fn parse<S: AsRef<str>>(program: &str, args: &[S]) -> Result<ParsedFlags, ParseError> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let (help, rest) = take_help_switches(&args);
    match Flags::from_args(&[program], &rest) {
        Ok(Flags { version, prompt }) => Ok(ParsedFlags {
            help,
            version,
            prompt,
        }),
        Err(EarlyExit {
            status: Ok(()), ..
        }) => Ok(ParsedFlags {
            help: true,
            ..ParsedFlags::default()
        }),
        Err(EarlyExit {
            output,
            status: Err(()),
        }) => Err(ParseError::Invalid(output.trim().to_string())),
    }
}

/// Separates the help switches from the other words.
///
/// # Arguments
/// * `args` - The words following the program name.
///
/// # Returns
/// `(help, rest)`: whether any help switch appeared before a `--` terminator, and
/// every other word in its original order.
fn take_help_switches<'a>(args: &[&'a str]) -> (bool, Vec<&'a str>) {
    let mut help = false;
    let mut rest = Vec::with_capacity(args.len());
    let mut options_ended = false;
    for &arg in args {
        if !options_ended && HELP_SWITCHES.contains(&arg) {
            help = true;
            continue;
        }
        if arg == "--" {
            options_ended = true;
        }
        rest.push(arg);
    }
    (help, rest)
}

/// The generated usage text for `program`.
pub fn usage(program: &str) -> String {
    match Flags::from_args(&[program], &["--help"]) {
        Err(EarlyExit { output, .. }) => output,
        Ok(_) => format!("Usage: {program} [-v] [-p <prompt>]\n"),
    }
}
