include!("../../lib.rs");

use std::io;
use tracing::error;
use crate::core::domain::Configuration;
use crate::inventory::controller::run_shell;
use crate::inventory::factory::create_catalog_service;
use crate::utils::telemetry::setup_tracing;

fn main() {
    setup_tracing();

    // optional first argument overrides the storage path
    let storage_path = std::env::args().nth(1);
    let config = Configuration::new(storage_path.as_deref());
    let mut service = create_catalog_service(&config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(err) = run_shell(service.as_mut(), &mut input, &mut output) {
        error!("shell terminated: {}", err);
    }
}
