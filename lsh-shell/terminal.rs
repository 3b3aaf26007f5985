// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Raw-mode toggling for one read session
#[cfg(unix)]
use nix::sys::termios::{LocalFlags, SetArg, Termios, tcgetattr, tcsetattr};
use tracing::debug;

/// Switches stdin between canonical and raw (non-canonical, non-echoing) mode.
///
/// When the terminal attributes can't be read or written (stdin is a pipe or a
/// file) the controller degrades to a no-op and the editor keeps working on
/// plain bytes. Dropping the controller restores the saved attributes.
#[derive(Debug)]
pub struct TerminalMode {
    enabled: bool,
    #[cfg(unix)]
    original: Option<Termios>,
}

impl TerminalMode {
    /// Controller bound to the process's stdin.
    pub fn stdin() -> Self {
        Self {
            enabled: true,
            #[cfg(unix)]
            original: None,
        }
    }

    /// Controller that never touches the terminal.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            #[cfg(unix)]
            original: None,
        }
    }

    pub fn is_raw(&self) -> bool {
        #[cfg(unix)]
        {
            self.original.is_some()
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    /// Capture the current attributes and install raw mode. Returns whether raw mode is active.
    #[cfg(unix)]
    pub fn enter_raw_mode(&mut self) -> bool {
        if !self.enabled || self.original.is_some() {
            return self.is_raw();
        }
        let stdin = std::io::stdin();
        let original = match tcgetattr(&stdin) {
            Ok(termios) => termios,
            Err(errno) => {
                debug!(error = %errno, "terminal attributes unavailable, reading without raw mode");
                return false;
            }
        };
        let mut raw = original.clone();
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        if let Err(errno) = tcsetattr(&stdin, SetArg::TCSANOW, &raw) {
            debug!(error = %errno, "failed to enter raw mode, reading without it");
            return false;
        }
        self.original = Some(original);
        true
    }

    #[cfg(not(unix))]
    pub fn enter_raw_mode(&mut self) -> bool {
        debug!("raw mode is not supported on this platform");
        false
    }

    /// Reapply the attributes captured by [`TerminalMode::enter_raw_mode`]. No-op when not raw.
    pub fn restore_mode(&mut self) {
        #[cfg(unix)]
        {
            if let Some(original) = self.original.take() {
                if let Err(errno) = tcsetattr(std::io::stdin(), SetArg::TCSANOW, &original) {
                    debug!(error = %errno, "failed to restore terminal attributes");
                }
            }
        }
    }
}

impl Drop for TerminalMode {
    fn drop(&mut self) {
        self.restore_mode();
    }
}
