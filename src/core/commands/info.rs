use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::metadata::FileSnapshot;
use crate::core::session::Session;

#[derive(Debug, Clone, Copy, Default)]
pub struct InfoCommand;

impl Command for InfoCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path = args.first().ok_or(CommandError::Usage("info: missing path"))?;
        let snapshot =
            FileSnapshot::query(&session.resolve(path)).map_err(|e| CommandError::io("stat", e))?;

        writeln!(out, "Path: {}", path)?;
        writeln!(out, "Size: {} bytes", snapshot.size)?;
        writeln!(out, "Type: {}", snapshot.type_name())?;
        writeln!(out, "Permissions: {}", snapshot.permission_string())?;
        writeln!(out, "Modified: {}", snapshot.full_time())?;
        Ok(Flow::Continue)
    }
}
