// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fs::File;
use std::io;

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

pub fn execute(args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let Some(&path) = args.get(1) else {
        return Err(ShellError::missing_argument("expected argument to \"cat\""));
    };
    let mut file = File::open(path).map_err(|e| ShellError::fs(path, e))?;
    io::copy(&mut file, &mut *ctx.out).map_err(|e| ShellError::fs(path, e))?;
    Ok(Flow::Continue)
}
