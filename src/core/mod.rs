//! Core logger types

pub mod decorator;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod observer;
pub mod template;

pub use decorator::Decorator;
pub use error::{LoggerError, Result};
pub use global::{global, init_global};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use observer::Observer;
pub use template::{TemplateTable, PREFIX_TOKEN, SUFFIX_TOKEN};
