use std::fs::File;
use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateCommand;

impl Command for CreateCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path = args.first().ok_or(CommandError::Usage("create: missing path"))?;
        let target = session.resolve(path);

        File::create(&target)
            .map_err(|e| CommandError::failed("Create", CommandError::io("fopen", e)))?;
        writeln!(out, "Created.")?;
        Ok(Flow::Continue)
    }
}
