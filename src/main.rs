//=========================================================================
// SuperMotor: Binary Entry Point
//
// Logging is configured through `RUST_LOG` (defaults to `info`), e.g.
//   RUST_LOG=core::sim=debug,platform=info supermotor
//
//=========================================================================

use std::process::ExitCode;

use env_logger::Env;
use log::error;

use supermotor::EngineBuilder;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = EngineBuilder::new().build().run() {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
