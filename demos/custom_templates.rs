//! Custom templates, decorators, and the observer hook
//!
//! Run with: cargo run --example custom_templates

use templog::{Level, Logger, MemorySink, TemplateTable};

fn main() {
    println!("=== Templog - Custom Templates Example ===\n");

    let sink = MemorySink::new();
    let logger = Logger::builder()
        .level(Level::Debug)
        .sink(sink.clone())
        .templates(
            TemplateTable::builtin()
                .with(Level::Warn, "{{prefix}} [wrn] %s {{suffix}}\n")
                .with(Level::Error, "{{prefix}} [err] %s!!\n"),
        )
        .prefix(|| "api".to_string())
        .suffix(|| ", see docs".to_string())
        .observer(|level, line| {
            eprint!("observer saw {}: {}", level, line);
        })
        .build();

    logger.warn("rate limit approaching");
    logger.error("rate limit exceeded");
    logger.info("requests served");

    println!("captured output:\n{}", sink.contents_string());
    println!("emitted {} lines", logger.metrics().emitted());

    println!("\n=== Example completed successfully! ===");
}
