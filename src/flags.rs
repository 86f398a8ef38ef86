use clap::Parser;
use tracing::Level;

/// Launch options for the explorer shell.
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "fexplore",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive command shell over basic filesystem operations"
)]
pub struct Flags {
    /// Suppress the banner and the Ctrl-C / Ctrl-D notices
    #[clap(short, long)]
    pub quiet: bool,

    /// Enable debug output
    #[clap(short, long)]
    pub debug: bool,

    /// Disable coloured output
    #[clap(long)]
    pub no_color: bool,
}

/// Settings the shell runs with, folded from the launch flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub quiet: bool,
    pub log_level: Level,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            log_level: Level::WARN,
            color: true,
        }
    }
}

impl From<&Flags> for ShellConfig {
    fn from(flags: &Flags) -> Self {
        Self {
            quiet: flags.quiet,
            log_level: if flags.debug { Level::DEBUG } else { Level::WARN },
            color: !flags.no_color,
        }
    }
}
