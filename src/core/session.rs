use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::commands::CommandError;

/// Per-session state: the directory relative paths resolve against.
///
/// The process working directory is only read once, at startup. After that
/// `cd` moves the session, not the process.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
}

impl Session {
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_dir(env::current_dir()?))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: dir.into(),
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.current_dir.display())
    }

    /// Anchors relative paths at the session directory. The text is taken
    /// literally: `~` is an ordinary file name.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.current_dir.join(path)
    }

    /// Moves the session to `path`. On failure the current directory is
    /// left as it was.
    pub fn change_dir(&mut self, path: &str) -> Result<&Path, CommandError> {
        let target = self.resolve(path);
        let canonical = fs::canonicalize(&target).map_err(|e| CommandError::io("chdir", e))?;

        // Stat through "<dir>/." so a directory without search permission
        // is rejected the same way chdir(2) would reject it.
        let meta = fs::metadata(canonical.join(".")).map_err(|e| CommandError::io("chdir", e))?;
        if !meta.is_dir() {
            return Err(CommandError::io(
                "chdir",
                io::Error::from_raw_os_error(libc::ENOTDIR),
            ));
        }

        debug!(from = %self.current_dir.display(), to = %canonical.display(), "changing directory");
        self.current_dir = canonical;
        Ok(&self.current_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let session = Session::with_dir("/srv/data");
        assert_eq!(session.resolve("a.txt"), PathBuf::from("/srv/data/a.txt"));
        assert_eq!(session.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
        assert_eq!(session.resolve("."), PathBuf::from("/srv/data/."));
    }

    #[test]
    fn test_resolve_tilde_is_literal() {
        let session = Session::with_dir("/srv/data");
        assert_eq!(session.resolve("~"), PathBuf::from("/srv/data/~"));
        assert_eq!(session.resolve("~/notes"), PathBuf::from("/srv/data/~/notes"));
    }

    #[test]
    fn test_prompt_shows_directory() {
        let session = Session::with_dir("/srv/data");
        assert_eq!(session.prompt(), "/srv/data> ");
    }

    #[test]
    fn test_change_dir_relative() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let mut session = Session::with_dir(tmp.path());

        let new_dir = session.change_dir("sub").unwrap().to_path_buf();
        assert_eq!(new_dir, fs::canonicalize(tmp.path().join("sub")).unwrap());
        assert_eq!(session.current_dir(), new_dir);

        session.change_dir("..").unwrap();
        assert_eq!(session.current_dir(), fs::canonicalize(tmp.path()).unwrap());
    }

    #[test]
    fn test_change_dir_missing_leaves_state() {
        let tmp = tempdir().unwrap();
        let mut session = Session::with_dir(tmp.path());
        let before = session.current_dir().to_path_buf();

        assert!(session.change_dir("does-not-exist").is_err());
        assert_eq!(session.current_dir(), before);
    }

    #[test]
    fn test_change_dir_into_file_rejected() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("plain"), b"x").unwrap();
        let mut session = Session::with_dir(tmp.path());

        assert!(session.change_dir("plain").is_err());
        assert_eq!(session.current_dir(), tmp.path());
    }

    #[test]
    fn test_change_dir_does_not_touch_process_cwd() {
        let tmp = tempdir().unwrap();
        let process_cwd = env::current_dir().unwrap();
        let mut session = Session::with_dir(&process_cwd);

        session.change_dir(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(env::current_dir().unwrap(), process_cwd);
    }
}
