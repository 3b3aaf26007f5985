// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Command dispatch: builtins first, external programs otherwise
use std::io::Write;

use tracing::debug;

use crate::builtin_commands;
use crate::error::ShellResult;
use crate::history::HistoryStore;
use crate::jobs;

/// What the read-eval loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a builtin may touch while it runs.
pub struct ShellContext<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub history: &'a HistoryStore,
    /// Registered builtin names, in lookup order.
    pub builtins: &'a [&'a str],
}

pub type BuiltinHandler = Box<dyn Fn(&[&str], &mut ShellContext<'_>) -> ShellResult<Flow>>;

pub struct Dispatcher {
    builtins: Vec<(String, BuiltinHandler)>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher with the standard builtins registered.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        for (name, handler) in builtin_commands::standard() {
            dispatcher.register(name, handler);
        }
        dispatcher
    }

    pub fn empty() -> Self {
        Self {
            builtins: Vec::new(),
        }
    }

    /// Add a builtin. An existing builtin with the same name keeps its slot but gets the new handler.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[&str], &mut ShellContext<'_>) -> ShellResult<Flow> + 'static,
    {
        let name = name.into();
        let handler: BuiltinHandler = Box::new(handler);
        match self.builtins.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = handler,
            None => self.builtins.push((name, handler)),
        }
    }

    pub fn builtin_names(&self) -> Vec<&str> {
        self.builtins.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Run one tokenized command. Returns `false` only when the shell should stop.
    pub fn execute(
        &self,
        tokens: &[&str],
        history: &HistoryStore,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> bool {
        let Some(&program) = tokens.first() else {
            return true;
        };

        let Some((_, handler)) = self.builtins.iter().find(|(name, _)| name == program) else {
            let _ = out.flush();
            return jobs::launch(tokens, err);
        };

        debug!(builtin = program, "running builtin");
        let names = self.builtin_names();
        let mut ctx = ShellContext {
            out,
            err,
            history,
            builtins: &names,
        };
        let flow = handler(tokens, &mut ctx);
        let _ = ctx.out.flush();
        match flow {
            Ok(Flow::Continue) => true,
            Ok(Flow::Exit) => false,
            Err(e) => {
                let _ = writeln!(ctx.err, "lsh: {e}");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_commands::BUILTIN_NAMES;
    use crate::error::ShellError;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    struct Captured {
        keep_going: bool,
        out: String,
        err: String,
    }

    fn run(dispatcher: &Dispatcher, tokens: &[&str]) -> Captured {
        let history = HistoryStore::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let keep_going = dispatcher.execute(tokens, &history, &mut out, &mut err);
        Captured {
            keep_going,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_standard_builtins_in_declared_order() {
        assert_eq!(Dispatcher::new().builtin_names(), BUILTIN_NAMES.to_vec());
    }

    #[test]
    fn test_exit_stops() {
        let result = run(&Dispatcher::new(), &["exit"]);
        assert!(!result.keep_going);
        assert!(result.out.is_empty());
    }

    #[test]
    fn test_exit_ignores_arguments() {
        assert!(!run(&Dispatcher::new(), &["exit", "3"]).keep_going);
    }

    #[test]
    fn test_empty_command_does_nothing() {
        let result = run(&Dispatcher::new(), &[]);
        assert!(result.keep_going);
        assert!(result.out.is_empty());
        assert!(result.err.is_empty());
    }

    #[test]
    #[serial]
    fn test_cd_to_missing_directory_reports_and_continues() {
        let before = std::env::current_dir().unwrap();
        let result = run(&Dispatcher::new(), &["cd", "/nonexistent"]);
        assert!(result.keep_going);
        assert!(result.err.starts_with("lsh: /nonexistent: "));
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_builtin_error_is_prefixed() {
        let result = run(&Dispatcher::new(), &["rm"]);
        assert!(result.keep_going);
        assert_eq!(result.err, "lsh: rm requires a filename\n");
    }

    #[test]
    fn test_help_lists_registered_builtins() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("greet", |_: &[&str], _: &mut ShellContext<'_>| Ok(Flow::Continue));
        let result = run(&dispatcher, &["help"]);
        assert!(result.out.contains(" rm\n greet\n"));
    }

    #[test]
    fn test_custom_builtin_sees_all_tokens() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("greet", |args: &[&str], ctx: &mut ShellContext<'_>| {
            writeln!(ctx.out, "hello {}", args[1..].join(","))?;
            Ok(Flow::Continue)
        });
        let result = run(&dispatcher, &["greet", "a", "b"]);
        assert_eq!(result.out, "hello a,b\n");
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("pwd", |_: &[&str], ctx: &mut ShellContext<'_>| {
            ctx.out.write_all(b"nowhere\n")?;
            Ok(Flow::Continue)
        });
        assert_eq!(dispatcher.builtin_names(), BUILTIN_NAMES.to_vec());
        assert_eq!(run(&dispatcher, &["pwd"]).out, "nowhere\n");
    }

    #[test]
    fn test_custom_error_is_reported() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.register("fail", |_: &[&str], _: &mut ShellContext<'_>| {
            Err(ShellError::missing_argument("fail always fails"))
        });
        let result = run(&dispatcher, &["fail"]);
        assert!(result.keep_going);
        assert_eq!(result.err, "lsh: fail always fails\n");
    }

    #[test]
    fn test_unknown_command_goes_to_launcher() {
        let result = run(&Dispatcher::new(), &["definitely_not_a_real_binary_xyz"]);
        assert!(result.keep_going);
        assert!(result.err.starts_with("lsh: definitely_not_a_real_binary_xyz: "));
    }
}
