use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes path arguments against the session directory rather than the
/// process working directory.
#[derive(Debug, Clone)]
pub struct PathCompleter {
    base: PathBuf,
}

impl PathCompleter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn set_base(&mut self, base: &Path) {
        self.base = base.to_path_buf();
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = Self::parse_path_input(incomplete);
        let dir_to_search = match &typed_dir {
            Some(dir) => self.base.join(dir),
            None => self.base.clone(),
        };

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(String::from) else {
                    continue;
                };
                if !name.starts_with(&file_prefix) {
                    continue;
                }
                let typed = match &typed_dir {
                    Some(dir) => format!("{}{}", dir, name),
                    None => name,
                };
                matches.push(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", typed),
                        replacement: format!("{}/", typed),
                    }
                } else {
                    Pair {
                        display: typed.clone(),
                        replacement: format!("{} ", typed),
                    }
                });
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    /// Splits typed text into the directory part (kept verbatim, with its
    /// trailing `/`) and the file-name prefix.
    fn parse_path_input(incomplete: &str) -> (Option<String>, String) {
        match incomplete.rfind('/') {
            Some(pos) => (
                Some(incomplete[..=pos].to_string()),
                incomplete[pos + 1..].to_string(),
            ),
            None => (None, incomplete.to_string()),
        }
    }
}
