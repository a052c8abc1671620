//! The external generate command
//!
//! Wraps the host code-generation tool as a subprocess whose combined
//! stdout and stderr are streamed to a caller-supplied writer while it runs.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

const DEFAULT_PROGRAM: &str = "go";
const DEFAULT_ARGS: &[&str] = &["generate"];
const CHUNK_SIZE: usize = 8 * 1024;

/// Program and arguments launched once per generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for GenerateCommand {
    /// `go generate`
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS.iter().copied())
    }
}

impl fmt::Display for GenerateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl GenerateCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the command in `dir` and block until it exits.
    ///
    /// The child inherits the current environment with `environment`
    /// overlaid on top, so overlay entries win on collision. Its stdout and
    /// stderr share a single pipe, so `out` receives both streams in the
    /// exact order the child wrote them, chunk by chunk as they arrive.
    ///
    /// # Errors
    ///
    /// Returns an error if the pipe cannot be created, if the process cannot
    /// be spawned or waited on, if reading its output fails, or if writing
    /// to `out` fails.
    pub fn run(
        &self,
        dir: &Path,
        environment: &BTreeMap<String, String>,
        out: &mut dyn Write,
    ) -> io::Result<ExitStatus> {
        let (mut reader, writer) = io::pipe()?;
        let mut child = {
            let mut command = Command::new(&self.program);
            command
                .args(&self.args)
                .current_dir(dir)
                .envs(environment)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            // dropping `command` closes our copies of the write end, so the
            // reader sees EOF once the child exits
            command.spawn()?
        };

        let (read_result, write_result) = forward(&mut reader, out);
        drop(reader);

        let status = child.wait()?;
        read_result?;
        write_result?;
        Ok(status)
    }
}

/// Copy `reader` into `out` until EOF.
///
/// A failed write stops forwarding but the pipe is still drained so the
/// child never blocks on a full buffer.
fn forward(reader: &mut impl Read, out: &mut dyn Write) -> (io::Result<()>, io::Result<()>) {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut write_result = Ok(());
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return (Ok(()), write_result),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return (Err(e), write_result),
        };
        if write_result.is_ok() {
            write_result = out.write_all(&buf[..n]).and_then(|()| out.flush());
        }
    }
}
