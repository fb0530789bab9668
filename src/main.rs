use std::io::IsTerminal;

use crate::command::Format;
use crate::error::SortError;

mod collection;
mod command;
mod error;
mod sort;

fn main() {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_ansi(std::io::stdin().is_terminal())
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Panics crossing the driver boundary land on the same error path as
    // typed failures.
    let result = std::panic::catch_unwind(|| Format { output: None }.run())
        .unwrap_or(Err(SortError::Unknown));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
