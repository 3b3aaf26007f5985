// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::env;

use crate::error::ShellResult;
use crate::execution::{Flow, ShellContext};

pub fn execute(_args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let cwd = env::current_dir()?;
    writeln!(ctx.out, "{}", cwd.display())?;
    Ok(Flow::Continue)
}
