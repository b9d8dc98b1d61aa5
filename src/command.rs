use crate::lexer::{self, LexingError};

/// Built-in session commands, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    Version,
    /// `exit` or `quit`.
    Exit,
}

impl Builtin {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "help" => Some(Builtin::Help),
            "version" => Some(Builtin::Version),
            "exit" | "quit" => Some(Builtin::Exit),
            _ => None,
        }
    }
}

/// The words that introduce a re-typed program invocation, e.g. `interactive_cli -p "$ "`.
///
/// `skip` is how many leading words are dropped before the rest is parsed as flags.
/// It defaults to the word count of the prefix itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPrefix {
    text: String,
    skip: usize,
}

impl InvocationPrefix {
    pub fn new(text: impl Into<String>) -> Result<Self, LexingError> {
        let text = text.into();
        let skip = lexer::split_into_words(&text)?.len();
        Ok(Self { text, skip })
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    /// The first word of the prefix, used as the program name in messages.
    pub fn program_name(&self) -> &str {
        self.text.split_whitespace().next().unwrap_or(&self.text)
    }

    /// True when `line` is the prefix alone or the prefix followed by whitespace.
    pub fn matches(&self, line: &str) -> bool {
        if self.text.is_empty() {
            return false;
        }
        match line.strip_prefix(self.text.as_str()) {
            Some(rest) => rest.chars().next().is_none_or(char::is_whitespace),
            None => false,
        }
    }

    /// Split `line` and drop the invocation words.
    pub fn flag_words(&self, line: &str) -> Result<Vec<String>, LexingError> {
        Ok(lexer::split_into_words(line)?
            .into_iter()
            .skip(self.skip)
            .collect())
    }
}

impl Default for InvocationPrefix {
    fn default() -> Self {
        Self {
            text: env!("CARGO_PKG_NAME").to_string(),
            skip: 1,
        }
    }
}

/// One classified line of input. Lives for a single loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Builtin(Builtin),
    /// A line that re-types the program invocation; holds the whole line.
    Invocation(&'a str),
    FreeText(&'a str),
}

impl<'a> Command<'a> {
    /// Classify an already trimmed, non-empty line.
    ///
    /// The invocation prefix is checked before the builtins.
    pub fn classify(line: &'a str, prefix: &InvocationPrefix) -> Self {
        if prefix.matches(line) {
            Command::Invocation(line)
        } else if let Some(builtin) = Builtin::from_input(line) {
            Command::Builtin(builtin)
        } else {
            Command::FreeText(line)
        }
    }
}
