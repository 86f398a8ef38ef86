use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

pub const HELP_TEXT: &str = "\
Commands:
 ls [path]             - list directory (default: .)
 cd <path>             - change directory
 info <path>           - show file information
 copy <src> <dst>      - copy file
 move <src> <dst>      - move/rename file
 delete <path>         - delete file (no recursive dir delete)
 create <path>         - create empty file
 search <pattern> [p]  - search names (recursive) in path (default .)
 chmod <oct> <path>    - change permissions (e.g., chmod 644 file)
 pwd                   - print current directory
 help                  - this help
 exit                  - quit
";

#[derive(Debug, Clone, Copy, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        session: &mut Session,
        _args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        writeln!(out, "{}", session.current_dir().display())?;
        Ok(Flow::Continue)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(
        &self,
        _session: &mut Session,
        _args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        writeln!(out)?;
        write!(out, "{}", HELP_TEXT)?;
        Ok(Flow::Continue)
    }
}

/// Ends the session. The farewell is printed by the loop, which also says
/// goodbye on end-of-input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(
        &self,
        _session: &mut Session,
        _args: &[String],
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}
