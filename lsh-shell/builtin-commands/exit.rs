// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::error::ShellResult;
use crate::execution::{Flow, ShellContext};

pub fn execute(_args: &[&str], _ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    Ok(Flow::Exit)
}
