// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// The read-eval loop
use std::io::{Read, Write};

use tracing::debug;

use crate::error::ShellResult;
use crate::execution::Dispatcher;
use crate::history::HistoryStore;
use crate::line_editor::LineEditor;
use crate::parsing::tokenize;

/// Read, tokenize and execute lines until `exit` or end of input.
///
/// Command failures are reported on `err` and never end the loop. An error
/// from the editor itself (a failed read or an allocation failure) does, and
/// is returned to the caller.
pub fn run<R: Read, W: Write>(
    editor: &mut LineEditor<R, W>,
    dispatcher: &Dispatcher,
    history: &mut HistoryStore,
    err: &mut dyn Write,
) -> ShellResult<()> {
    loop {
        let Some(line) = editor.read_line(history)? else {
            debug!("end of input");
            return Ok(());
        };
        let tokens = tokenize(&line);
        if !dispatcher.execute(&tokens, history, editor.output_mut(), err) {
            debug!("exit requested");
            return Ok(());
        }
    }
}
