// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::error::ShellResult;
use crate::execution::{Flow, ShellContext};
use crate::ui::print_help;

pub fn execute(_args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    print_help(&mut *ctx.out, ctx.builtins)?;
    Ok(Flow::Continue)
}
