use std::fs;
use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

/// Removes a single file. Directories are refused outright; there is no
/// recursive delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path = args.first().ok_or(CommandError::Usage("delete: missing path"))?;
        let target = session.resolve(path);

        if fs::metadata(&target).map(|m| m.is_dir()).unwrap_or(false) {
            return Err(CommandError::DirectoryDelete);
        }

        fs::remove_file(&target)
            .map_err(|e| CommandError::failed("Delete", CommandError::io("remove", e)))?;
        writeln!(out, "Deleted.")?;
        Ok(Flow::Continue)
    }
}
