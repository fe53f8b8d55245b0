//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::{RosterConfig, RosterService, StatusFilter};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let mut service = match RosterService::seeded(RosterConfig::default()) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("roster_core seed failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("roster_core users={}", service.list_all().len());

    service.set_status_filter(StatusFilter::Active);
    for record in service.visible_records() {
        println!(
            "roster_core active id={} city={} status={}",
            record.id,
            record.country,
            record.status_label()
        );
    }
    ExitCode::SUCCESS
}
