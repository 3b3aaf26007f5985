// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fs;

use tracing::debug;

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

pub fn execute(args: &[&str], _ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let Some(&path) = args.get(1) else {
        return Err(ShellError::missing_argument("rm requires a filename"));
    };
    fs::remove_file(path).map_err(|e| ShellError::fs(path, e))?;
    debug!(path, "removed");
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_commands::test_support::run;
    use tempfile::TempDir;

    #[test]
    fn test_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doomed.txt");
        fs::write(&path, "").unwrap();
        run(execute, &["rm", path.to_str().unwrap()]).result.unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = run(execute, &["rm", "/nonexistent/file"]).result.unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/file: "));
    }

    #[test]
    fn test_missing_argument() {
        let err = run(execute, &["rm"]).result.unwrap_err();
        assert_eq!(err.to_string(), "rm requires a filename");
    }
}
