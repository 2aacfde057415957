use anyhow::Result;
use asset_tools::component::UnitConverter;
use asset_tools::init;
use asset_tools::signal::setup_shutdown_signal;
use console::{Term, style};
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal();

    let converter = UnitConverter::new(Arc::clone(&shutdown_signal));
    let run_result = converter.run(&term);
    let interrupted = shutdown_signal.load(Ordering::SeqCst);

    match run_result {
        // ^C during an open prompt surfaces as an I/O error, still a clean exit
        Ok(()) | Err(_) if interrupted => {
            println!("\n{}", style(t!("common.goodbye")).green().bold());
            info!("Interrupted by user, exited cleanly");
        }
        Ok(()) => {
            info!("Program exited normally");
        }
        Err(e) => {
            warn!("Program error: {e}");
            eprintln!("{} {e}", style(t!("common.error_prefix")).red().bold());
        }
    }

    Ok(())
}
