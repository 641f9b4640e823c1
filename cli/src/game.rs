use std::io::{self, BufRead, Write};

/// Result of a finished game. Each game defines its own scale.
pub type Score = u32;

/// The capability every console game in the parlor offers to the menu.
pub trait Game {
    /// Display name shown by the menu.
    fn name(&self) -> &str;

    /// Runs one full game to completion. `None` means the player quit before winning or losing.
    fn play(&mut self, console: &mut Console<'_>) -> io::Result<Option<Score>>;
}

/// Line-oriented terminal a game talks through.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one trimmed, lower-cased line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}

impl Write for Console<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
