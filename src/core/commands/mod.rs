use std::collections::BTreeMap;
use std::io::{self, Write};

use thiserror::Error;

mod builtin;
mod cd;
mod chmod;
mod copy;
mod create;
mod delete;
mod info;
mod ls;
mod mv;
mod search;

pub use builtin::{ExitCommand, HelpCommand, PwdCommand, HELP_TEXT};
pub use cd::CdCommand;
pub use chmod::ChmodCommand;
pub use copy::{copy_file, CopyCommand, COPY_BUFFER_SIZE};
pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use info::InfoCommand;
pub use ls::LsCommand;
pub use mv::{move_file, MoveCommand, MoveStrategy};
pub use search::{search_recursive, SearchCommand};

use super::session::Session;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
    #[error("Unknown command: {0}")]
    NotFound(String),
    #[error("{op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{action} failed: {source}")]
    Failed {
        action: &'static str,
        #[source]
        source: Box<CommandError>,
    },
    #[error("delete: directory deletion not implemented (use system rm -r or implement recursion)")]
    DirectoryDelete,
    #[error("chmod: invalid octal mode: {0}")]
    InvalidMode(String),
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    pub fn io(op: &'static str, source: io::Error) -> Self {
        CommandError::Io { op, source }
    }

    pub fn failed(action: &'static str, source: CommandError) -> Self {
        CommandError::Failed {
            action,
            source: Box::new(source),
        }
    }
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Info(InfoCommand),
    Copy(CopyCommand),
    Move(MoveCommand),
    Delete(DeleteCommand),
    Create(CreateCommand),
    Search(SearchCommand),
    Chmod(ChmodCommand),
    Pwd(PwdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(session, args, out),
            CommandType::Cd(cmd) => cmd.execute(session, args, out),
            CommandType::Info(cmd) => cmd.execute(session, args, out),
            CommandType::Copy(cmd) => cmd.execute(session, args, out),
            CommandType::Move(cmd) => cmd.execute(session, args, out),
            CommandType::Delete(cmd) => cmd.execute(session, args, out),
            CommandType::Create(cmd) => cmd.execute(session, args, out),
            CommandType::Search(cmd) => cmd.execute(session, args, out),
            CommandType::Chmod(cmd) => cmd.execute(session, args, out),
            CommandType::Pwd(cmd) => cmd.execute(session, args, out),
            CommandType::Help(cmd) => cmd.execute(session, args, out),
            CommandType::Exit(cmd) => cmd.execute(session, args, out),
        }
    }
}

/// Name-to-handler table for the built-in commands.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("ls", CommandType::Ls(LsCommand));
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("info", CommandType::Info(InfoCommand));
        commands.insert("copy", CommandType::Copy(CopyCommand));
        commands.insert("move", CommandType::Move(MoveCommand));
        commands.insert("delete", CommandType::Delete(DeleteCommand));
        commands.insert("create", CommandType::Create(CreateCommand));
        commands.insert("search", CommandType::Search(SearchCommand));
        commands.insert("chmod", CommandType::Chmod(ChmodCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("help", CommandType::Help(HelpCommand));
        commands.insert("exit", CommandType::Exit(ExitCommand));
        Self { commands }
    }

    pub fn execute(
        &self,
        session: &mut Session,
        command: &str,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(session, args, out),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
