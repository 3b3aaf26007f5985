// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::error::ShellResult;
use crate::execution::{Flow, ShellContext};
use crate::ui::CLEAR_SCREEN;

pub fn execute(_args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    ctx.out.write_all(CLEAR_SCREEN.as_bytes())?;
    Ok(Flow::Continue)
}
