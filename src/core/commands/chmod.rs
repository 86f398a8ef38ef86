use std::fs::{self, Permissions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;

use tracing::debug;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChmodCommand;

impl ChmodCommand {
    /// Parses an octal mode. The value is not range-checked.
    pub fn parse_mode(text: &str) -> Result<u32, CommandError> {
        u32::from_str_radix(text, 8).map_err(|_| CommandError::InvalidMode(text.to_string()))
    }
}

impl Command for ChmodCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [mode, path, ..] = args else {
            return Err(CommandError::Usage("chmod: usage chmod 644 file"));
        };

        let mode = Self::parse_mode(mode)?;
        let target = session.resolve(path);
        debug!(path = %target.display(), "chmod {:o}", mode);
        fs::set_permissions(&target, Permissions::from_mode(mode))
            .map_err(|e| CommandError::io("chmod", e))?;
        writeln!(out, "Permissions updated.")?;
        Ok(Flow::Continue)
    }
}
