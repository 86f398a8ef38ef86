use std::borrow::Cow;
use std::path::Path;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Editor helper: completion plus line highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(
        commands: impl IntoIterator<Item = &'static str>,
        cwd: &Path,
        highlighter: SyntaxHighlighter,
    ) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands),
            path_completer: PathCompleter::new(cwd),
            highlighter,
        }
    }

    pub fn set_cwd(&mut self, cwd: &Path) {
        self.path_completer.set_base(cwd);
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split(' ').find(|w| !w.is_empty()).unwrap_or("");
        let known = self.command_completer.is_known(first);
        Cow::Owned(self.highlighter.highlight_command(line, known))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        // Tokens are separated by single spaces only, like the dispatcher.
        let word_start = line_up_to_cursor.rfind(' ').map_or(0, |i| i + 1);
        let word = &line_up_to_cursor[word_start..];
        let is_first_word = line_up_to_cursor[..word_start].trim_matches(' ').is_empty();

        let matches = if is_first_word {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };
        Ok((word_start, matches))
    }
}
