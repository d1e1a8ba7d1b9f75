/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for calc-benefits

use calc_benefits::cli::{self, Cli};
use calc_benefits::report::{error_text, hint_text};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Cli::parse();
    let config = args.run_config();
    install_panic_hook(config.exit_delay);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match cli::run(&args.partial_input(), &config, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("Fatal error: {err:?}");
            eprintln!("{}", error_text(&format!("{err:#}")));
            eprintln!();
            eprintln!(
                "{}",
                hint_text("Press CMD + C or CTRL + C to exit and start again.")
            );
            eprintln!();
            std::thread::sleep(config.exit_delay);
            ExitCode::from(1)
        }
    }
}

/// Report any unhandled failure the same way, then wait before exiting
fn install_panic_hook(exit_delay: Duration) {
    std::panic::set_hook(Box::new(move |info| {
        let reason = match info.payload().downcast_ref::<&str>() {
            Some(s) => (*s).to_string(),
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.clone(),
                None => info.to_string(),
            },
        };
        eprintln!("{}", error_text(&format!("Error: {reason}")));
        std::thread::sleep(exit_delay);
    }));
}
