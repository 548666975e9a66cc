//! Basic logging example
//!
//! Demonstrates leveled macros, free-form printing, container rendering,
//! and numeric base directives on the console sink.
//!
//! Run with: cargo run --example basic_usage

use debuglog::prelude::*;
use debuglog::{
    log_assert, log_debug, log_error, log_info, log_print, log_println, log_trace, log_warn,
};

use std::collections::{BTreeMap, VecDeque};

fn main() {
    println!("=== DebugLog - Basic Usage Example ===\n");

    // Console-only manager; both thresholds default to INFO.
    let mut manager = LogManager::new();

    println!("1. Free-form printing (no header, no filtering):");
    log_print!(manager, "print takes");
    log_print!(manager, " any number of arguments: ");
    log_println!(manager, 1, 2.2, "three");

    let level = manager.console_level();
    log_println!(manager, "current console level:", AsText(level));

    println!("\n2. Leveled macros at the default INFO threshold:");
    log_error!(manager, "error message");
    log_warn!(manager, "warning message");
    log_info!(manager, "info message");
    log_debug!(manager, "debug message (hidden)");
    log_trace!(manager, "trace message (hidden)");

    println!("\n3. Raising the threshold to TRACE shows everything:");
    manager.set_console_level(LogLevel::Trace);
    log_debug!(manager, "debug message (now visible)");
    log_trace!(manager, "trace message (now visible)");
    manager.set_console_level(LogLevel::Info);

    println!("\n4. Slices and containers render with their elements:");
    let readings = [1.1f32, 2.2, 3.3];
    log_info!(manager, "readings:", readings);

    let ids = vec![10, 20, 30];
    let mut recent: VecDeque<&str> = VecDeque::new();
    recent.push_back("boot");
    recent.push_back("probe");
    let mut limits = BTreeMap::new();
    limits.insert("high", 90);
    limits.insert("low", 10);
    log_info!(manager, "ids:", ids, "recent:", recent, "limits:", limits);

    println!("\n5. Base directives affect the integers that follow:");
    log_info!(manager, "status:", LogBase::Hex, 255u8, LogBase::Bin, 5u8);
    log_info!(manager, "back to decimal:", 255u8);

    println!("\n6. Header fields and delimiter are configurable:");
    manager.set_delimiter(" | ");
    log_info!(manager, "piped", "fields");
    manager.set_header_fields(false, false, false);
    log_info!(manager, "bare line, tag only");
    manager.set_header_fields(true, true, true);
    manager.set_delimiter(" ");

    println!("\n7. Assertions halt on failure; this one passes:");
    let sensors = readings.len();
    log_assert!(manager, sensors > 0, "at least one sensor required");
    log_println!(manager, "assertion passed,", sensors, "sensors attached");

    println!("\n=== Example completed successfully! ===");
}
