// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Tab completion over builtin names and the working directory
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

pub struct CompletionEngine {
    builtins: Vec<String>,
    directory: Option<PathBuf>,
}

impl CompletionEngine {
    /// Complete against `builtins` and whatever is in the current working directory at call time.
    pub fn new<I, S>(builtins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            builtins: builtins.into_iter().map(Into::into).collect(),
            directory: None,
        }
    }

    /// Complete filenames from `directory` instead of the working directory.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Every builtin and directory entry starting with `partial`.
    ///
    /// Builtins come first in declared order, then directory entries in the
    /// order the OS lists them. The directory is read fresh on every call.
    pub fn complete(&self, partial: &str) -> Vec<String> {
        let mut matches: Vec<String> = self
            .builtins
            .iter()
            .filter(|name| name.starts_with(partial))
            .cloned()
            .collect();

        let directory = self.directory.clone().unwrap_or_else(|| PathBuf::from("."));
        match fs::read_dir(&directory) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let name = entry.file_name();
                    let Some(name) = name.to_str() else {
                        debug!(name = ?name, "skipping non-UTF-8 directory entry");
                        continue;
                    };
                    if name.starts_with(partial) && !matches.iter().any(|m| m == name) {
                        matches.push(name.to_string());
                    }
                }
            }
            Err(e) => {
                debug!(directory = %directory.display(), error = %e, "can't list directory for completion");
            }
        }

        matches
    }
}

/// Print every candidate above the prompt, then redraw the prompt with the text typed so far.
///
/// Only does something when there is more than one candidate.
pub fn render_matches<W: Write>(
    out: &mut W,
    prompt: &str,
    typed: &str,
    matches: &[String],
) -> io::Result<()> {
    if matches.len() < 2 {
        return Ok(());
    }
    writeln!(out)?;
    for candidate in matches {
        write!(out, "{candidate} ")?;
    }
    write!(out, "\n{prompt}{typed}")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_commands::BUILTIN_NAMES;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn engine_in(dir: &TempDir) -> CompletionEngine {
        CompletionEngine::new(BUILTIN_NAMES.iter().copied()).with_directory(dir.path())
    }

    #[test]
    fn test_h_matches_help_and_history() {
        let dir = TempDir::new().unwrap();
        assert_eq!(engine_in(&dir).complete("h"), vec!["help", "history"]);
    }

    #[test]
    fn test_empty_partial_matches_everything() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        let matches = engine_in(&dir).complete("");
        assert_eq!(matches.len(), BUILTIN_NAMES.len() + 1);
        assert_eq!(
            matches[..BUILTIN_NAMES.len()].to_vec(),
            BUILTIN_NAMES.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
        assert_eq!(matches.last().map(String::as_str), Some("notes.txt"));
    }

    #[test]
    fn test_filenames_follow_builtins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cargo.lock"), "").unwrap();
        assert_eq!(engine_in(&dir).complete("ca"), vec!["cat", "cargo.lock"]);
    }

    #[test]
    fn test_filesystem_is_read_fresh() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir);
        assert!(engine.complete("rea").is_empty());
        std::fs::write(dir.path().join("readme.md"), "").unwrap();
        assert_eq!(engine.complete("rea"), vec!["readme.md"]);
    }

    #[test]
    fn test_file_named_like_builtin_listed_once() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pwd"), "").unwrap();
        assert_eq!(engine_in(&dir).complete("pw"), vec!["pwd"]);
    }

    #[rstest]
    #[case("zzz")]
    #[case("cdx")]
    #[case("help me")]
    fn test_no_match_is_empty(#[case] partial: &str) {
        let dir = TempDir::new().unwrap();
        assert!(engine_in(&dir).complete(partial).is_empty());
    }

    #[test]
    fn test_unreadable_directory_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        let engine = CompletionEngine::new(["exit"]).with_directory(dir.path().join("gone"));
        assert_eq!(engine.complete("e"), vec!["exit"]);
    }

    #[test]
    fn test_render_lists_candidates_then_prompt() {
        let mut out = Vec::new();
        render_matches(&mut out, "> ", "h", &["help".into(), "history".into()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nhelp history \n> h");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_non_utf8_entry_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"ca\xff")), "").unwrap();
        std::fs::write(dir.path().join("cargo.toml"), "").unwrap();
        assert_eq!(engine_in(&dir).complete("ca"), vec!["cat", "cargo.toml"]);
    }

    #[test]
    fn test_render_single_match_is_silent() {
        let mut out = Vec::new();
        render_matches(&mut out, "> ", "pw", &["pwd".into()]).unwrap();
        assert!(out.is_empty());
    }
}
