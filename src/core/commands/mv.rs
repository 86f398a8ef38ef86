use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::{copy_file, Command, CommandError, Flow};
use crate::core::session::Session;

/// How a successful move was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    Rename,
    CopyThenRemove,
}

/// Renames `src` to `dst`, falling back to copy-then-delete when the rename
/// fails (e.g. across filesystems).
///
/// The source is only removed after a complete copy. The fallback is not
/// atomic: if the copy fails, a partial `dst` may be left behind.
pub fn move_file(src: &Path, dst: &Path) -> Result<MoveStrategy, CommandError> {
    move_with(src, dst, |s, d| fs::rename(s, d))
}

fn move_with<F>(src: &Path, dst: &Path, rename: F) -> Result<MoveStrategy, CommandError>
where
    F: FnOnce(&Path, &Path) -> std::io::Result<()>,
{
    match rename(src, dst) {
        Ok(()) => Ok(MoveStrategy::Rename),
        Err(e) => {
            debug!(src = %src.display(), dst = %dst.display(), "rename failed ({}), copying", e);
            copy_file(src, dst)?;
            fs::remove_file(src).map_err(|e| CommandError::io("remove", e))?;
            Ok(MoveStrategy::CopyThenRemove)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveCommand;

impl Command for MoveCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [src, dst, ..] = args else {
            return Err(CommandError::Usage("move: need src dst"));
        };

        let src = session.resolve(src);
        let dst = session.resolve(dst);
        move_file(&src, &dst).map_err(|e| CommandError::failed("Move", e))?;
        writeln!(out, "Moved.")?;
        Ok(Flow::Continue)
    }
}
