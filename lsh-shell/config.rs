// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Command-line and environment configuration
use std::path::PathBuf;

use clap::Parser;

use crate::history::HISTORY_MAX;
use crate::ui::DEFAULT_PROMPT;

pub const DEFAULT_HISTORY_FILE: &str = ".shell_history";

#[derive(Debug, Clone, Parser)]
#[command(name = "lsh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small interactive shell with line editing, history and tab completion", long_about = None)]
pub struct Config {
    /// File the command history is loaded from and saved to
    #[arg(long, env = "LSH_HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history_file: PathBuf,

    /// Maximum number of history entries kept
    #[arg(
        long,
        env = "LSH_HISTORY_SIZE",
        default_value_t = HISTORY_MAX,
        value_parser = parse_history_size
    )]
    pub history_size: usize,

    /// Prompt printed before each line
    #[arg(long, env = "LSH_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Don't print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

fn parse_history_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("history size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            history_size: HISTORY_MAX,
            prompt: DEFAULT_PROMPT.to_string(),
            no_banner: false,
        }
    }
}
