// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// grep PATTERN FILE: plain substring match, no regular expressions
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{ShellError, ShellResult};
use crate::execution::{Flow, ShellContext};

pub fn execute(args: &[&str], ctx: &mut ShellContext<'_>) -> ShellResult<Flow> {
    let (Some(&pattern), Some(&path)) = (args.get(1), args.get(2)) else {
        return Err(ShellError::missing_argument("grep requires pattern and filename"));
    };
    let file = File::open(path).map_err(|e| ShellError::fs(path, e))?;
    let mut reader = BufReader::new(file);

    let mut line = Vec::new();
    let mut number = 0;
    loop {
        line.clear();
        if reader
            .read_until(b'\n', &mut line)
            .map_err(|e| ShellError::fs(path, e))?
            == 0
        {
            break;
        }
        number += 1;
        let text = String::from_utf8_lossy(&line);
        if text.contains(pattern) {
            write!(ctx.out, "{number}: {text}")?;
            if !text.ends_with('\n') {
                writeln!(ctx.out)?;
            }
        }
    }
    Ok(Flow::Continue)
}
