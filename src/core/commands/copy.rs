use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::os::unix::fs::{MetadataExt, OpenOptionsExt};
use std::path::Path;

use tracing::debug;

use super::{Command, CommandError, Flow};
use crate::core::session::Session;

pub const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Mode bits for newly created destinations (before umask).
const DESTINATION_MODE: u32 = 0o644;

/// Copies `src` to `dst` byte for byte, creating or truncating `dst`.
///
/// Returns the number of bytes copied. A failure part-way leaves whatever was
/// already written in `dst`. Only regular files are copied, and a file is
/// never copied onto itself (the truncating open would empty it first).
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, CommandError> {
    let mut input = File::open(src).map_err(|e| CommandError::io("open src", e))?;
    let src_meta = input.metadata().map_err(|e| CommandError::io("open src", e))?;
    if !src_meta.is_file() {
        let errno = if src_meta.is_dir() { libc::EISDIR } else { libc::EINVAL };
        return Err(CommandError::io("open src", io::Error::from_raw_os_error(errno)));
    }
    if let Ok(dst_meta) = fs::metadata(dst) {
        if dst_meta.dev() == src_meta.dev() && dst_meta.ino() == src_meta.ino() {
            return Err(CommandError::io(
                "open dst",
                io::Error::new(
                    ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ),
            ));
        }
    }

    let mut output = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(DESTINATION_MODE)
        .open(dst)
        .map_err(|e| CommandError::io("open dst", e))?;

    let copied = copy_stream(&mut input, &mut output)?;
    debug!(src = %src.display(), dst = %dst.display(), bytes = copied, "copied file");
    Ok(copied)
}

/// Pumps `input` into `output` through a fixed buffer until end-of-input.
fn copy_stream(input: &mut dyn Read, output: &mut dyn Write) -> Result<u64, CommandError> {
    let mut buf = [0u8; COPY_BUFFER_SIZE];
    let mut copied = 0u64;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CommandError::io("read", e)),
        };
        output
            .write_all(&buf[..n])
            .map_err(|e| CommandError::io("write", e))?;
        copied += n as u64;
    }
    Ok(copied)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyCommand;

impl Command for CopyCommand {
    fn execute(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [src, dst, ..] = args else {
            return Err(CommandError::Usage("copy: need src dst"));
        };

        let src = session.resolve(src);
        let dst = session.resolve(dst);
        copy_file(&src, &dst).map_err(|e| CommandError::failed("Copy", e))?;
        writeln!(out, "Copied.")?;
        Ok(Flow::Continue)
    }
}
