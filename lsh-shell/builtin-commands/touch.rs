// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fs::OpenOptions;

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

/// Create the file if it is missing. Existing contents are left alone.
pub fn execute(args: &[&str], _ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let Some(&path) = args.get(1) else {
        return Err(ShellError::missing_argument("touch requires a filename"));
    };
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| ShellError::fs(path, e))?;
    Ok(Flow::Continue)
}
