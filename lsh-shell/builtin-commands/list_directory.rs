// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// ls [-a] [DIR]
use std::fs;

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

pub fn execute(args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let mut show_hidden = false;
    let mut directory = ".";
    for &arg in &args[1..] {
        if arg == "-a" {
            show_hidden = true;
        } else {
            directory = arg;
        }
    }

    let mut names: Vec<String> = fs::read_dir(directory)
        .map_err(|e| ShellError::fs(directory, e))?
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| show_hidden || !name.starts_with('.'))
        .collect();
    names.sort();

    for name in names {
        writeln!(ctx.out, "{name}")?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_commands::test_support::run;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn populated() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", ".hidden"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();
        dir
    }

    #[test]
    fn test_lists_sorted_without_hidden() {
        let dir = populated();
        let output = run(execute, &["ls", dir.path().to_str().unwrap()]);
        assert_eq!(output.out, "a.txt\nb.txt\nsub\n");
    }

    #[test]
    fn test_all_flag_shows_hidden() {
        let dir = populated();
        let output = run(execute, &["ls", "-a", dir.path().to_str().unwrap()]);
        assert_eq!(output.out, ".hidden\na.txt\nb.txt\nsub\n");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let output = run(execute, &["ls", missing.to_str().unwrap()]);
        let message = output.result.unwrap_err().to_string();
        assert!(message.starts_with(missing.to_str().unwrap()));
        assert!(output.out.is_empty());
    }
}
