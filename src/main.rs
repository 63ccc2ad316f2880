//! Terminal front-end: replays keypad presses and prints the display.
//!
//! ```text
//! keypad-calc 2 5 0 0 + 5 =
//! keypad-calc --separator "'" 1 0 0 0 0 0 0
//! keypad-calc -vv --trace 1 / 0 =
//! ```

use anyhow::Context;
use clap::Parser;
use keypad_calc::core::DEFAULT_TRAIL_LIMIT;
use keypad_calc::{Calculator, DisplayConfig, Key};
use tracing_subscriber::EnvFilter;

/// Four-function keypad calculator
#[derive(Debug, Parser)]
#[command(name = "keypad-calc", version)]
struct Cli {
    /// Keypad labels to press in order: 0-9 . + - * / AC DEL =
    keys: Vec<Key>,

    /// Separator between groups of three integer digits
    #[arg(long, default_value = ",")]
    separator: String,

    /// Print the recorded transition trail as JSON
    #[arg(long)]
    trace: bool,

    /// Maximum number of transitions kept in the trail
    #[arg(long, default_value_t = DEFAULT_TRAIL_LIMIT)]
    trail_limit: usize,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Replay the keys and render the output: preview line, main line, then the
/// JSON trail when `--trace` is set.
fn run(cli: Cli) -> anyhow::Result<String> {
    let mut calculator = Calculator::with_config(DisplayConfig {
        group_separator: cli.separator,
    })
    .with_trail_limit(cli.trail_limit);
    calculator.press_all(cli.keys);

    let display = calculator.display();
    let mut output = format!("{}\n{}\n", display.preview, display.main);

    if cli.trace {
        let trail = serde_json::to_string_pretty(calculator.history())
            .context("failed to encode transition trail")?;
        output.push_str(&trail);
        output.push('\n');
    }

    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    print!("{}", run(cli)?);
    Ok(())
}
