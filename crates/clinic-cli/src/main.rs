use std::io;

use anyhow::Context;
use clap::Parser;
use clinic_cli::{logger, CliArgs, ClinicApp};
use clinic_core::SystemClock;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    let config = args.resolve().context("failed to load configuration")?;
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = ClinicApp::new(&config, stdin.lock(), stdout.lock(), SystemClock);
    app.run().context("console session failed")?;

    let (clinic, _) = app.into_parts();
    tracing::info!(
        owners = clinic.owner_count(),
        pets = clinic.pet_count(),
        "session ended, records discarded"
    );
    Ok(())
}
