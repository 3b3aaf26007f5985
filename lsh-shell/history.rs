// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Bounded command history with line-oriented persistence
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ShellError, ShellResult};

pub const HISTORY_MAX: usize = 1000;

/// Past command lines, oldest first. Adding past capacity evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(HISTORY_MAX)),
            capacity,
        }
    }

    pub fn add(&mut self, command: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Load entries from `path`, appending them in file order.
    ///
    /// A missing or unreadable file means there is no history yet; that is not an error.
    /// Returns the number of lines read.
    pub fn load(&mut self, path: &Path) -> usize {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no history loaded");
                return 0;
            }
        };
        match self.load_from(BufReader::new(file)) {
            Ok(count) => {
                debug!(path = %path.display(), count, "history loaded");
                count
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "history load stopped early");
                0
            }
        }
    }

    pub fn load_from<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<usize> {
        let mut count = 0;
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
            }
            if line.is_empty() {
                continue;
            }
            self.add(String::from_utf8_lossy(&line).into_owned());
            count += 1;
        }
        Ok(count)
    }

    /// Overwrite `path` with the current entries, one per line.
    pub fn save(&self, path: &Path) -> ShellResult<()> {
        let to_save_error = |source| ShellError::HistorySave {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(to_save_error)?;
        let mut writer = BufWriter::new(file);
        self.save_to(&mut writer).map_err(to_save_error)?;
        writer.flush().map_err(to_save_error)?;
        debug!(path = %path.display(), count = self.len(), "history saved");
        Ok(())
    }

    pub fn save_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        Ok(())
    }
}

/// Position of the user while browsing history during one read session.
///
/// Ranges over `0..=count`; `count` stands for the line being typed, which is
/// stashed when the user first moves away from it.
#[derive(Debug, Clone)]
pub struct HistoryCursor {
    position: usize,
    count: usize,
    in_progress: Option<String>,
}

impl HistoryCursor {
    pub fn new(history: &HistoryStore) -> Self {
        Self {
            position: history.len(),
            count: history.len(),
            in_progress: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Step towards older entries. Returns the text to show, or `None` at the oldest entry.
    pub fn up<'h>(&mut self, history: &'h HistoryStore, current: &str) -> Option<&'h str> {
        if self.position == 0 {
            return None;
        }
        if self.position == self.count {
            self.in_progress = Some(current.to_string());
        }
        self.position -= 1;
        history.get(self.position)
    }

    /// Step towards newer entries. Past the newest entry the stashed in-progress line comes back.
    pub fn down(&mut self, history: &HistoryStore) -> Option<String> {
        if self.position + 1 < self.count {
            self.position += 1;
            history.get(self.position).map(str::to_string)
        } else if self.position + 1 == self.count {
            self.position = self.count;
            Some(self.in_progress.take().unwrap_or_default())
        } else {
            None
        }
    }
}
