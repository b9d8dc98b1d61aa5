use console::style;
use std::io::{Result as IoResult, Write};
use std::thread;
use std::time::Duration;

/// Terminal writer for session responses.
///
/// Responses are "typed" one character at a time; echoed user input is printed
/// at once in a dim italic style.
pub struct Typewriter<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> Typewriter<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    /// Print `text` character by character, flushing and pausing after each one,
    /// then end the line.
    pub fn type_out(&mut self, text: &str) -> IoResult<()> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print what the user typed, instantly.
    ///
    /// The style is always applied, whether or not stdout is a terminal.
    pub fn echo(&mut self, input: &str) -> IoResult<()> {
        let styled = style(format!("User: {input}"))
            .italic()
            .black()
            .bright()
            .force_styling(true);
        writeln!(self.out, "{styled}")?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
