use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use key_levels::{BinanceProvider, Cli, ConsoleReport, LogReporter, normalize_symbol, run};

fn prompt_for_symbol() -> Result<String> {
    print!("Enter ticker symbol: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read symbol from stdin")?;
    Ok(line)
}

fn try_main(args: Cli) -> Result<()> {
    let period = args.period();
    let raw_symbol = match args.symbol {
        Some(s) => s,
        None => prompt_for_symbol()?,
    };
    let symbol = normalize_symbol(&raw_symbol)?;

    let provider = BinanceProvider::new()?;
    let mut reporter = LogReporter;
    let mut sink = ConsoleReport::new(io::stdout().lock());
    run(&symbol, &period, &provider, &mut reporter, &mut sink)?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Analyse and report
    match try_main(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("⚠️  Analysis aborted: {:#}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
