use std::io::Write;

use tracing::debug;

use super::executor::CommandHandler;
use crate::core::commands::{CommandExecutor, Flow, HELP_TEXT};
use crate::core::session::Session;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;
use crate::input::{LineSource, ReadOutcome};

pub const BANNER: &str = "=== Simple File Explorer ===";
pub const FAREWELL: &str = "Goodbye!";

/// The read-eval-print loop, independent of where lines come from.
pub struct Repl {
    pub(crate) session: Session,
    pub(crate) executor: CommandExecutor,
    highlighter: SyntaxHighlighter,
    quiet: bool,
}

impl Repl {
    pub fn new(session: Session, highlighter: SyntaxHighlighter, quiet: bool) -> Self {
        Self {
            session,
            executor: CommandExecutor::new(),
            highlighter,
            quiet,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn print_banner(&self, out: &mut dyn Write) -> Result<(), ShellError> {
        if !self.quiet {
            writeln!(out, "\n{}", BANNER)?;
            write!(out, "\n{}", HELP_TEXT)?;
        }
        Ok(())
    }

    /// Runs one line. Command failures are written to `err`; only failures
    /// of the output streams themselves are returned.
    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, ShellError> {
        match self.execute_line(line, out) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                writeln!(err, "{}", self.highlighter.highlight_error(&e.to_string()))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Prompts and dispatches until `exit` or end-of-input.
    pub fn run(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            input.set_cwd(self.session.current_dir());
            writeln!(out)?;
            out.flush()?;

            match input.read_line(&self.session.prompt())? {
                ReadOutcome::Line(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    if self.handle_line(&line, out, err)? == Flow::Exit {
                        break;
                    }
                }
                ReadOutcome::Interrupted => {
                    if !self.quiet {
                        writeln!(out, "CTRL-C")?;
                    }
                }
                ReadOutcome::Eof => {
                    debug!("end of input");
                    break;
                }
            }
        }

        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        Ok(())
    }
}
