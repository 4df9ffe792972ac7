//! Basic logger usage example
//!
//! Demonstrates the default factory, threshold changes, and the quiet
//! switch.
//!
//! Run with: cargo run --example basic_usage

use templog::{info, warn, Level, Logger};

fn main() {
    println!("=== Templog - Basic Usage Example ===\n");

    let logger = Logger::default();

    println!("1. Default threshold is Warn - debug stays silent:");
    logger.debug("this debug message is hidden");
    logger.warn("this warning is visible");
    logger.error("this error is visible");

    println!("\n2. Lowering the threshold to Debug:");
    logger.set_level(Level::Debug);
    logger.debug("now debug shows up");

    println!("\n3. Formatted payloads via macros:");
    info!(logger, "processed {} records in {}ms", 1200, 34);
    warn!(logger, "retry {} of {}", 1, 3);

    println!("\n4. Quiet silences everything:");
    logger.set_quiet(true);
    logger.error("not even errors get through");
    logger.set_quiet(false);
    println!("   (nothing was printed)");

    println!("\n=== Example completed successfully! ===");
}
