use clap::Parser;
use fexplore::error::ShellError;
use fexplore::flags::{Flags, ShellConfig};
use fexplore::shell::Shell;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ShellError> {
    let flags = Flags::parse();
    let config = ShellConfig::from(&flags);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.as_str().to_lowercase()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))?;

    let mut shell = Shell::new(config)?;
    shell.run()
}
