use thiserror::Error;

/// Session-level failures. Command failures never surface here; they are
/// reported by the loop and the session carries on.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ctrl-C error: {0}")]
    CtrlC(#[from] ctrlc::Error),
    #[error("Logging error: {0}")]
    Logging(String),
}
