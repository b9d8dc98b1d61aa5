use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Source of input lines for a session.
///
/// `Err(ReadlineError::Interrupted)` and `Err(ReadlineError::Eof)` carry the
/// interrupt and end-of-input conditions.
pub trait LineReader {
    /// Show `prompt` and block until one line is read.
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;
}

/// Interactive terminal input with line editing and history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            self.editor.add_history_entry(line.as_str())?;
        }
        Ok(line)
    }
}
