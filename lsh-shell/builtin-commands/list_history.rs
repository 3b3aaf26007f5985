// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::error::ShellResult;
use crate::execution::{Flow, ShellContext};

/// Print every history entry with its 1-based position.
pub fn execute(_args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    for (i, command) in ctx.history.iter().enumerate() {
        writeln!(ctx.out, "{} {command}", i + 1)?;
    }
    Ok(Flow::Continue)
}
