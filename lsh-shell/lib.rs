// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! An interactive shell with a hand-written line editor, bounded persistent
//! history, tab completion, a builtin command table and foreground process
//! launching.

pub mod completion;
pub mod config;
pub mod error;
pub mod execution;
pub mod history;
pub mod jobs;
pub mod line_buffer;
pub mod line_editor;
pub mod parsing;
pub mod repl;
pub mod terminal;
pub mod ui;

#[path = "builtin-commands/mod.rs"]
pub mod builtin_commands;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
