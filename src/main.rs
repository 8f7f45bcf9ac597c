use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medbook_core::{CoreConfig, InterpreterService};

#[derive(Parser)]
#[command(name = "medbook")]
#[command(about = "Interactive patient record book")]
struct Cli {
    /// YAML file of records to load at startup
    #[arg(long, env = "MEDBOOK_SEED_FILE")]
    seed: Option<PathBuf>,
    /// Prompt shown before each command line
    #[arg(long, env = "MEDBOOK_PROMPT")]
    prompt: Option<String>,
}

/// Main entry point for the medbook interpreter
///
/// Reads one command line at a time from stdin, executes it against the in-memory record
/// book and prints the result. Failures are printed and the loop continues; `exit` or end of
/// input stops it.
///
/// # Environment Variables
/// - `MEDBOOK_SEED_FILE`: YAML seed records (overridden by `--seed`)
/// - `MEDBOOK_PROMPT`: prompt text (overridden by `--prompt`)
/// - `RUST_LOG`: log filter, logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medbook=info".parse()?)
                .add_directive("medbook_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = Arc::new(CoreConfig::new(cli.seed, cli.prompt)?);
    let mut interpreter = InterpreterService::new(cfg)?;

    tracing::info!("++ medbook ready with {} patients", interpreter.model().len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", interpreter.config().prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match interpreter.execute(&line) {
            Ok(outcome) => {
                writeln!(stdout, "{}", outcome.feedback)?;
                if outcome.exit {
                    break;
                }
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    Ok(())
}
