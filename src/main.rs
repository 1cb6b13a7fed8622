//! Command Center access-control service
//!
//! Binds the guard middleware onto the HTTP surface and serves until
//! shutdown. Logging is initialized from the loaded configuration inside
//! `run_server`.

use command_center::server;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match server::builder::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
