use std::fs;
use std::io::Write;

use tracing::warn;

use super::{Command, CommandError, Flow};
use crate::core::metadata::{FileSnapshot, UNKNOWN_PERMISSIONS};
use crate::core::session::Session;

#[derive(Debug, Clone, Copy, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn format_row(name: &str, snapshot: &FileSnapshot) -> String {
        format!(
            "{} {:>8} {} {}{}",
            snapshot.permission_string(),
            snapshot.size,
            snapshot.listing_time(),
            name,
            if snapshot.is_dir { "/" } else { "" }
        )
    }
}

impl Command for LsCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path = args.first().map(String::as_str).unwrap_or(".");
        let dir = session.resolve(path);
        let entries = fs::read_dir(&dir).map_err(|e| CommandError::io("opendir", e))?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), "unreadable directory entry: {}", e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();

            match FileSnapshot::query(&entry.path()) {
                Ok(snapshot) => writeln!(out, "{}", Self::format_row(&name, &snapshot))?,
                Err(_) => writeln!(out, "{} {}", UNKNOWN_PERMISSIONS, name)?,
            }
        }
        Ok(Flow::Continue)
    }
}
