use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path = args
            .first()
            .ok_or(CommandError::Usage("cd: missing argument"))?;

        let new_dir = session.change_dir(path)?;
        writeln!(out, "Now in: {}", new_dir.display())?;
        Ok(Flow::Continue)
    }
}
