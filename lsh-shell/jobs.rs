// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Foreground execution of external programs
use std::io::Write;
use std::process::{Child, Command, ExitStatus};

use tracing::{debug, warn};

use crate::error::{ShellError, ShellResult};

/// A running child that is killed and reaped if dropped before `wait` finishes.
#[derive(Debug)]
struct ForegroundJob {
    program: String,
    child: Child,
    reaped: bool,
}

impl ForegroundJob {
    fn spawn(tokens: &[&str]) -> ShellResult<Self> {
        let program = tokens[0];
        let child = Command::new(program)
            .args(&tokens[1..])
            .spawn()
            .map_err(|source| ShellError::Spawn {
                program: program.to_string(),
                source,
            })?;
        debug!(program, pid = child.id(), "spawned");
        Ok(Self {
            program: program.to_string(),
            child,
            reaped: false,
        })
    }

    /// Block until the child exits or is killed by a signal. Stops do not end the wait.
    fn wait(&mut self) -> ShellResult<ExitStatus> {
        let status = self.child.wait().map_err(|source| ShellError::Wait {
            program: self.program.clone(),
            source,
        })?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ForegroundJob {
    fn drop(&mut self) {
        if !self.reaped {
            warn!(program = %self.program, pid = self.child.id(), "killing unreaped child");
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Run `tokens[0]` with the remaining tokens as arguments and wait for it.
///
/// The child inherits the shell's standard streams. Failures are written to
/// `err`; the shell always keeps going, so this always returns `true`.
pub fn launch(tokens: &[&str], err: &mut dyn Write) -> bool {
    if tokens.is_empty() {
        return true;
    }
    if let Err(e) = run_foreground(tokens) {
        let _ = writeln!(err, "lsh: {e}");
    }
    true
}

fn run_foreground(tokens: &[&str]) -> ShellResult<ExitStatus> {
    let mut job = ForegroundJob::spawn(tokens)?;
    let status = job.wait()?;
    debug!(program = %job.program, %status, "exited");
    Ok(status)
}
