// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Interactive line editing: one byte in, one state transition
//
// Escape handling is minimal. After ESC exactly two more bytes are
// read and only `[A` (up) and `[B` (down) mean anything; every other sequence
// is dropped. Terminals that send longer sequences (function keys, modified
// arrows) will leak their trailing bytes into the line.
use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use crate::completion::{CompletionEngine, render_matches};
use crate::error::ShellResult;
use crate::history::{HistoryCursor, HistoryStore};
use crate::line_buffer::LineBuffer;
use crate::terminal::TerminalMode;
use crate::ui::{ERASE_CHAR, repaint_line};

const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;
const CTRL_H: u8 = 0x08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Normal,
    /// Saw ESC.
    EscapeSeq1,
    /// Saw ESC and one payload byte; `bracket` records whether it was `[`.
    EscapeSeq2 { bracket: bool },
}

pub struct LineEditor<R, W> {
    input: R,
    output: W,
    prompt: String,
    terminal: TerminalMode,
    completion: CompletionEngine,
}

/// State of one `read_line` call.
struct Session {
    buffer: LineBuffer,
    cursor: HistoryCursor,
    state: KeyState,
}

impl<R: Read, W: Write> LineEditor<R, W> {
    pub fn new(
        input: R,
        output: W,
        prompt: impl Into<String>,
        terminal: TerminalMode,
        completion: CompletionEngine,
    ) -> Self {
        Self {
            input,
            output,
            prompt: prompt.into(),
            terminal,
            completion,
        }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print the prompt and edit one line.
    ///
    /// Returns `Ok(None)` when input ends before a newline. A non-empty finished
    /// line is appended to `history` after the terminal is back in normal mode.
    pub fn read_line(&mut self, history: &mut HistoryStore) -> ShellResult<Option<String>> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        self.terminal.enter_raw_mode();
        let result = self.edit(history);
        self.terminal.restore_mode();
        result
    }

    fn edit(&mut self, history: &mut HistoryStore) -> ShellResult<Option<String>> {
        let mut session = Session {
            buffer: LineBuffer::new()?,
            cursor: HistoryCursor::new(history),
            state: KeyState::Normal,
        };

        while let Some(byte) = self.read_byte()? {
            let state = session.state;
            session.state = match state {
                KeyState::Normal => match byte {
                    b'\n' => {
                        self.output.write_all(b"\n")?;
                        self.output.flush()?;
                        self.terminal.restore_mode();
                        let line = session.buffer.to_string_lossy().into_owned();
                        if !line.is_empty() {
                            history.add(line.clone());
                        }
                        return Ok(Some(line));
                    }
                    ESC => KeyState::EscapeSeq1,
                    b'\t' => {
                        self.complete(&mut session.buffer)?;
                        KeyState::Normal
                    }
                    DEL | CTRL_H => {
                        if session.buffer.pop_char() {
                            self.output.write_all(ERASE_CHAR)?;
                        }
                        KeyState::Normal
                    }
                    printable if printable >= b' ' => {
                        session.buffer.push(printable)?;
                        self.output.write_all(&[printable])?;
                        KeyState::Normal
                    }
                    _ => KeyState::Normal,
                },
                KeyState::EscapeSeq1 => KeyState::EscapeSeq2 {
                    bracket: byte == b'[',
                },
                KeyState::EscapeSeq2 { bracket } => {
                    if bracket {
                        match byte {
                            b'A' => self.history_up(&mut session, history)?,
                            b'B' => self.history_down(&mut session, history)?,
                            _ => {}
                        }
                    }
                    KeyState::Normal
                }
            };
            self.output.flush()?;
        }

        Ok(None)
    }

    fn read_byte(&mut self) -> ShellResult<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn history_up(&mut self, session: &mut Session, history: &HistoryStore) -> ShellResult<()> {
        let current = session.buffer.to_string_lossy().into_owned();
        if let Some(entry) = session.cursor.up(history, &current) {
            session.buffer.set(entry)?;
            repaint_line(&mut self.output, &self.prompt, session.buffer.as_bytes())?;
        }
        Ok(())
    }

    fn history_down(&mut self, session: &mut Session, history: &HistoryStore) -> ShellResult<()> {
        if let Some(entry) = session.cursor.down(history) {
            session.buffer.set(&entry)?;
            repaint_line(&mut self.output, &self.prompt, session.buffer.as_bytes())?;
        }
        Ok(())
    }

    /// Replace the whole buffer with the first completion candidate for it.
    fn complete(&mut self, buffer: &mut LineBuffer) -> ShellResult<()> {
        let Ok(partial) = std::str::from_utf8(buffer.as_bytes()) else {
            debug!("line is not valid UTF-8, nothing to complete");
            return Ok(());
        };
        let matches = self.completion.complete(partial);
        let Some(first) = matches.first() else {
            return Ok(());
        };
        render_matches(&mut self.output, &self.prompt, partial, &matches)?;
        buffer.set(first)?;
        repaint_line(&mut self.output, &self.prompt, buffer.as_bytes())?;
        Ok(())
    }
}
