// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Prompt, banner and terminal control sequences
use std::io::{self, Write};

use crate::VERSION;

pub const DEFAULT_PROMPT: &str = "> ";

/// Erase from the cursor to the end of the line.
pub const CLEAR_TO_EOL: &str = "\x1b[K";
/// Clear the screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
/// Step back over one character, blank it, step back again.
pub const ERASE_CHAR: &[u8] = b"\x08 \x08";

pub fn print_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "lsh {VERSION}")?;
    writeln!(out, "Type 'help' for usage, 'exit' to quit")?;
    writeln!(out, "Use Tab for completion, Up/Down for history\n")?;
    Ok(())
}

pub fn print_help<W: Write + ?Sized>(out: &mut W, builtins: &[&str]) -> io::Result<()> {
    writeln!(out, "lsh, based off Stephen Brennan's LSH")?;
    writeln!(out, "Type program names and arguments, and hit enter.")?;
    writeln!(out, "The following are built in:")?;
    for name in builtins {
        writeln!(out, " {name}")?;
    }
    writeln!(out, "Use the man command for information on other programs.")?;
    Ok(())
}

/// Redraw the whole input line: carriage return, prompt, text, clear leftovers.
pub fn repaint_line<W: Write + ?Sized>(out: &mut W, prompt: &str, text: &[u8]) -> io::Result<()> {
    write!(out, "\r{prompt}")?;
    out.write_all(text)?;
    out.write_all(CLEAR_TO_EOL.as_bytes())?;
    Ok(())
}
