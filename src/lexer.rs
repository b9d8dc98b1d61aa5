//! Shell-style splitting of a command line into words.
//!
//! The rules follow POSIX shells closely enough for re-parsing a typed command line:
//! - unquoted whitespace separates words;
//! - single quotes preserve everything up to the next single quote;
//! - double quotes preserve everything except `\"` and `\\` escapes;
//! - a backslash outside quotes escapes the following character.

use thiserror::Error;

/// Errors that can occur while splitting a line into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    /// A closing quote (single or double) was not found.
    #[error("No closing quotation")]
    UnfinishedQuote,
    /// The line ended right after an unquoted backslash.
    #[error("No escaped character")]
    TrailingEscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
    ReadingSingleQuote,
    ReadingDoubleQuote,
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
}

impl LexingFSM {
    /// Creates a machine positioned at the start of `line`.
    ///
    /// # Arguments
    /// * `line` - The command line to split.
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            buffer: String::new(),
        }
    }

    /// Runs the machine over the whole input.
    ///
    /// A word is emitted whenever unquoted whitespace follows it, so `''` yields an
    /// empty word while plain runs of spaces yield nothing.
    ///
    /// # Returns
    /// The words in order, or a `LexingError` if the input stops inside a quote or
    /// right after an escaping backslash.
    fn make_words(&mut self) -> Result<Vec<String>, LexingError> {
        let mut out = Vec::new();

        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Start => self.handle_start(ch)?,
                LexingState::ReadingWord => self.handle_word(ch, &mut out)?,
                LexingState::ReadingSingleQuote => self.handle_single_quote(ch),
                LexingState::ReadingDoubleQuote => self.handle_double_quote(ch),
            }
        }

        match self.state {
            LexingState::ReadingSingleQuote | LexingState::ReadingDoubleQuote => {
                return Err(LexingError::UnfinishedQuote);
            }
            LexingState::ReadingWord => out.push(std::mem::take(&mut self.buffer)),
            LexingState::Start => {}
        }

        Ok(out)
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn handle_start(&mut self, ch: char) -> Result<(), LexingError> {
        if ch.is_whitespace() {
            return Ok(());
        }
        self.state = LexingState::ReadingWord;
        self.consume_word_char(ch)
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<String>) -> Result<(), LexingError> {
        if ch.is_whitespace() {
            out.push(std::mem::take(&mut self.buffer));
            self.state = LexingState::Start;
            return Ok(());
        }
        self.consume_word_char(ch)
    }

    /// Handles one unquoted, non-blank character inside a word.
    ///
    /// # Arguments
    /// * `ch` - The character just read. Quotes switch state, a backslash pulls in
    ///   the next character verbatim, anything else is appended.
    ///
    /// # Returns
    /// `LexingError::TrailingEscape` when a backslash is the last character.
    fn consume_word_char(&mut self, ch: char) -> Result<(), LexingError> {
        match ch {
            '\'' => self.state = LexingState::ReadingSingleQuote,
            '"' => self.state = LexingState::ReadingDoubleQuote,
            '\\' => match self.read_char() {
                Some(escaped) => self.buffer.push(escaped),
                None => return Err(LexingError::TrailingEscape),
            },
            c => self.buffer.push(c),
        }
        Ok(())
    }

    fn handle_single_quote(&mut self, ch: char) {
        match ch {
            '\'' => self.state = LexingState::ReadingWord,
            c => self.buffer.push(c),
        }
    }

    fn handle_double_quote(&mut self, ch: char) {
        match ch {
            '"' => self.state = LexingState::ReadingWord,
            '\\' if matches!(self.peek_char(), Some('"' | '\\')) => {
                if let Some(escaped) = self.read_char() {
                    self.buffer.push(escaped);
                }
            }
            c => self.buffer.push(c),
        }
    }
}

/// Splits `line` into words, honoring quotes and backslash escapes.
///
/// # Arguments
/// * `line` - The text to split, e.g. `interactive_cli -p "NEW> "`.
///
/// # Returns
/// `Result<Vec<String>, LexingError>`: the words on success, or a [`LexingError`]
/// on an unbalanced quote or a dangling backslash.
pub fn split_into_words(line: &str) -> Result<Vec<String>, LexingError> {
    LexingFSM::new(line).make_words()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        split_into_words(line).unwrap()
    }

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(words("  a  b\tc "), vec!["a", "b", "c"]);
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_double_quotes_keep_spaces() {
        assert_eq!(
            words(r#"interactive_cli -p "NEW> ""#),
            vec!["interactive_cli", "-p", "NEW> "]
        );
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(words(r#"'a "b" \c'"#), vec![r#"a "b" \c"#]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        assert_eq!(words(r#"pre"mid dle"'post'"#), vec!["premid dlepost"]);
    }

    #[test]
    fn test_empty_quotes_yield_empty_word() {
        assert_eq!(words(r#"-p """#), vec!["-p", ""]);
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(words(r"a\ b"), vec!["a b"]);
        assert_eq!(words(r#""say \"hi\"""#), vec![r#"say "hi""#]);
        assert_eq!(words(r#""keep \n""#), vec![r"keep \n"]);
    }

    #[test]
    fn test_unbalanced_quotes_fail() {
        assert_eq!(split_into_words(r#"-p "oops"#), Err(LexingError::UnfinishedQuote));
        assert_eq!(split_into_words("it's"), Err(LexingError::UnfinishedQuote));
    }

    #[test]
    fn test_trailing_backslash_fails() {
        assert_eq!(split_into_words(r"abc\"), Err(LexingError::TrailingEscape));
    }
}
