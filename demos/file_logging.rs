//! File logging example
//!
//! Demonstrates mirroring log lines to a file sink with an independent
//! severity threshold, then reading the file back.
//!
//! Run with: cargo run --example file_logging

use debuglog::prelude::*;
use debuglog::{log_debug, log_error, log_info, log_trace, log_warn};

fn main() -> std::io::Result<()> {
    println!("=== DebugLog - File Logging Example ===\n");

    // Console shows INFO and up; the file captures everything.
    let mut manager = LogManager::builder()
        .console_level(LogLevel::Info)
        .storage_level(LogLevel::Trace)
        .build();

    let mut storage = FsStorage::new();
    if !manager.attach_storage(&mut storage, "application.log", OpenMode::Truncate, false) {
        println!("could not open application.log, continuing on console only");
    }

    println!("1. Logging to both console and file:");
    log_info!(manager, "application started");
    log_debug!(manager, "loading configuration (file only)");
    log_info!(manager, "configuration loaded");
    log_warn!(manager, "using default settings for some options");
    log_trace!(manager, "probe sequence begins (file only)");
    log_error!(manager, "failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        log_info!(manager, "processing item", i, "of", 5);
        if i == 3 {
            log_warn!(manager, "item", i, "took longer than expected");
        }
    }
    log_info!(manager, "all operations completed");

    // Release the file handle before reading it back.
    manager.close_storage();

    println!("\n3. Contents of application.log:");
    let contents = std::fs::read_to_string("application.log")?;
    print!("{contents}");

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
