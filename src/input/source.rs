use std::io::BufRead;
use std::path::Path;

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use super::ShellCompleter;
use crate::error::ShellError;

/// Result of asking for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Something the command loop can pull lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Called before each prompt so completion can follow `cd`.
    fn set_cwd(&mut self, _cwd: &Path) {}
}

impl LineSource for Editor<ShellCompleter, DefaultHistory> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn set_cwd(&mut self, cwd: &Path) {
        if let Some(helper) = self.helper_mut() {
            helper.set_cwd(cwd);
        }
    }
}

/// Non-interactive input: lines come from any reader, prompts are dropped.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome, ShellError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        if let Some(pos) = line.find('\n') {
            line.truncate(pos);
        }
        Ok(ReadOutcome::Line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_script_input_lines_then_eof() {
        let mut input = ScriptInput::new(Cursor::new("ls\n\ncd /tmp\npwd"));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("ls".into()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line(String::new()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("cd /tmp".into()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("pwd".into()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn test_script_input_keeps_carriage_return() {
        let mut input = ScriptInput::new(Cursor::new("ls\r\n"));
        assert_eq!(input.read_line("").unwrap(), ReadOutcome::Line("ls\r".into()));
    }
}
