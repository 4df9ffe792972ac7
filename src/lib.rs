//! # Templog
//!
//! A small, embeddable leveled logger: per-level line templates, decorator
//! hooks, and pluggable sinks.
//!
//! ## Features
//!
//! - **Leveled**: four severities with a strict threshold filter
//! - **Templated**: each level renders through its own format string
//! - **Decorated**: caller-supplied prefix/suffix fragments per line
//! - **Observable**: a hook sees every emitted line after the sink write
//! - **Thread Safe**: one logger may be shared across threads
//!
//! ## Quick start
//!
//! ```
//! use templog::{Level, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .sink(sink.clone())
//!     .suffix(|| ", t0".to_string())
//!     .build();
//!
//! logger.warn("hello");
//! logger.info("world");
//! assert_eq!(
//!     sink.contents_string(),
//!     "[wrn] hello \n[inf] world , t0\n"
//! );
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global, init_global, Decorator, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        Observer, Result, TemplateTable, PREFIX_TOKEN, SUFFIX_TOKEN,
    };
    pub use crate::sinks::{MemorySink, SharedSink};
}

pub use crate::core::{
    global, init_global, Decorator, Level, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    Observer, Result, TemplateTable, PREFIX_TOKEN, SUFFIX_TOKEN,
};
pub use crate::sinks::{MemorySink, SharedSink};
