// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lsh::completion::CompletionEngine;
use lsh::config::Config;
use lsh::execution::Dispatcher;
use lsh::history::HistoryStore;
use lsh::line_editor::LineEditor;
use lsh::repl;
use lsh::terminal::TerminalMode;
use lsh::ui::print_banner;

const LOG_ENV: &str = "LSH_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging();
    debug!(?config, "starting");

    let mut history = HistoryStore::with_capacity(config.history_size);
    history.load(&config.history_file);

    let mut stdout = io::stdout();
    if io::stdin().is_terminal() && !config.no_banner {
        let _ = print_banner(&mut stdout);
    }

    let dispatcher = Dispatcher::new();
    let completion = CompletionEngine::new(dispatcher.builtin_names());
    let mut editor = LineEditor::new(
        io::stdin(),
        stdout,
        config.prompt.as_str(),
        TerminalMode::stdin(),
        completion,
    );

    let result = repl::run(&mut editor, &dispatcher, &mut history, &mut io::stderr());
    drop(editor);

    if let Err(e) = result {
        eprintln!("lsh: {e}");
        if e.is_fatal() {
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = history.save(&config.history_file) {
        eprintln!("lsh: {e}");
    }
    ExitCode::SUCCESS
}
