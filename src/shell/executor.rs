use std::io::Write;

use crate::core::commands::{CommandError, CommandExecutor, Flow};
use crate::core::session::Session;

/// Tokens kept per line, command name included. Extras are dropped.
pub const MAX_TOKENS: usize = 15;

/// Splits on single spaces only: no quoting, no escaping, runs of spaces
/// collapse, anything past [`MAX_TOKENS`] is discarded.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|token| !token.is_empty())
        .take(MAX_TOKENS)
        .map(String::from)
        .collect()
}

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, CommandError>;
}

impl CommandHandler for super::Repl {
    fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, CommandError> {
        let tokens = tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };
        dispatch(&self.executor, &mut self.session, command, args, out)
    }
}

fn dispatch(
    executor: &CommandExecutor,
    session: &mut Session,
    command: &str,
    args: &[String],
    out: &mut dyn Write,
) -> Result<Flow, CommandError> {
    tracing::debug!(command, ?args, "dispatch");
    executor.execute(session, command, args, out)
}
