mod completer;
mod source;

pub use completer::ShellCompleter;
pub use source::{LineSource, ReadOutcome, ScriptInput};
