// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::env;

use tracing::debug;

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

pub fn execute(args: &[&str], _ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let Some(&path) = args.get(1) else {
        return Err(ShellError::missing_argument("expected argument to \"cd\""));
    };
    env::set_current_dir(path).map_err(|e| ShellError::fs(path, e))?;
    debug!(path, "changed directory");
    Ok(Flow::Continue)
}
