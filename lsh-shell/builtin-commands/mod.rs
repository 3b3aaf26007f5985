// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Built-in shell commands
pub mod cat;
pub mod cd;
pub mod clear;
pub mod echo;
pub mod exit;
pub mod grep;
pub mod help;
pub mod list_directory;
pub mod list_history;
pub mod pwd;
pub mod rm;
pub mod touch;

use crate::error::ShellResult;
use crate::execution::{Flow, ShellContext};

pub type BuiltinFn = fn(&[&str], &mut ShellContext<'_>) -> ShellResult<Flow>;

/// Builtin names in lookup order.
pub const BUILTIN_NAMES: [&str; 12] = [
    "cd", "help", "exit", "ls", "pwd", "clear", "history", "cat", "grep", "touch", "echo", "rm",
];

/// The standard builtins paired with their handlers, in `BUILTIN_NAMES` order.
pub fn standard() -> [(&'static str, BuiltinFn); 12] {
    [
        ("cd", cd::execute),
        ("help", help::execute),
        ("exit", exit::execute),
        ("ls", list_directory::execute),
        ("pwd", pwd::execute),
        ("clear", clear::execute),
        ("history", list_history::execute),
        ("cat", cat::execute),
        ("grep", grep::execute),
        ("touch", touch::execute),
        ("echo", echo::execute),
        ("rm", rm::execute),
    ]
}
