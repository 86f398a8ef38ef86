use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

/// Walks `root` depth-first, pre-order, in directory-read order, yielding the
/// path (relative to `root`) of every entry whose name contains `pattern`.
///
/// Directories that cannot be read are skipped without error, the root
/// included. Symbolic links are reported by name but never descended into.
pub fn search_recursive<'a>(
    root: &'a Path,
    pattern: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("search: skipping unreadable directory: {}", e);
                None
            }
        })
        .filter(move |entry| entry.file_name().to_string_lossy().contains(pattern))
        .map(move |entry| match entry.path().strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => entry.path().to_path_buf(),
        })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCommand;

impl Command for SearchCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let pattern = args.first().ok_or(CommandError::Usage("search: missing pattern"))?;
        let root_arg = args.get(1).map(String::as_str).unwrap_or(".");
        let root = session.resolve(root_arg);

        // Report paths the way the user spelled the root.
        let display_root = Path::new(root_arg);
        for relative in search_recursive(&root, pattern) {
            writeln!(out, "FOUND: {}", display_root.join(relative).display())?;
        }
        Ok(Flow::Continue)
    }
}
