// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// echo [WORDS...] [> FILE]
use std::fs;

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

pub fn execute(args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let words = &args[1..];
    match words.iter().position(|&word| word == ">") {
        None => {
            writeln!(ctx.out, "{}", words.join(" "))?;
        }
        Some(redirect) => {
            let Some(&path) = words.get(redirect + 1) else {
                return Err(ShellError::missing_argument("echo requires a filename after >"));
            };
            let text = format!("{}\n", words[..redirect].join(" "));
            fs::write(path, text).map_err(|e| ShellError::fs(path, e))?;
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_commands::test_support::run;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(&["echo"], "\n")]
    #[case(&["echo", "hello"], "hello\n")]
    #[case(&["echo", "hello", "world"], "hello world\n")]
    fn test_prints_words(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(run(execute, args).out, expected);
    }

    #[test]
    fn test_redirect_truncates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous contents that are longer").unwrap();
        let output = run(execute, &["echo", "hi", "there", ">", path.to_str().unwrap()]);
        output.result.unwrap();
        assert!(output.out.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi there\n");
    }

    #[test]
    fn test_redirect_without_filename() {
        let output = run(execute, &["echo", "hi", ">"]);
        assert!(output.result.is_err());
        assert!(output.out.is_empty());
    }
}
