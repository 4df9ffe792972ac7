//! Logging macros for ergonomic message formatting.
//!
//! These macros pre-format the payload with `format!` and hand it to the
//! logger, mirroring the method surface: `log!` for an explicit level,
//! per-level shorthands, `*_to!` variants for a caller-supplied sink, and
//! `logln!` for space-joined arguments.
//!
//! # Examples
//!
//! ```
//! use templog::prelude::*;
//! use templog::{info, warn};
//!
//! let logger = Logger::default();
//!
//! // Basic logging
//! warn!(logger, "low disk space");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// use templog::log;
/// log!(logger, Level::Info, "simple message");
/// log!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// # logger.set_level(Level::Debug);
/// use templog::debug;
/// debug!(logger, "cache warmed");
/// debug!(logger, "counter value: {}", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// use templog::warn;
/// warn!(logger, "low disk space");
/// warn!(logger, "retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// use templog::info;
/// info!(logger, "application started");
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// use templog::error;
/// error!(logger, "failed to connect");
/// error!(logger, "code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a formatted message to a caller-supplied sink.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// use templog::log_to;
/// let mut sink = MemorySink::new();
/// log_to!(logger, &mut sink, Level::Warn, "n={}", 7);
/// assert_eq!(sink.contents_string(), "[wrn] n=7 \n");
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $sink:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_to($sink, $level, format!($($arg)+))
    };
}

/// Log a formatted debug-level message to a caller-supplied sink.
#[macro_export]
macro_rules! debug_to {
    ($logger:expr, $sink:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $sink, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a formatted warning-level message to a caller-supplied sink.
#[macro_export]
macro_rules! warn_to {
    ($logger:expr, $sink:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $sink, $crate::Level::Warn, $($arg)+)
    };
}

/// Log a formatted info-level message to a caller-supplied sink.
#[macro_export]
macro_rules! info_to {
    ($logger:expr, $sink:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $sink, $crate::Level::Info, $($arg)+)
    };
}

/// Log a formatted error-level message to a caller-supplied sink.
#[macro_export]
macro_rules! error_to {
    ($logger:expr, $sink:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $sink, $crate::Level::Error, $($arg)+)
    };
}

/// Log space-joined arguments with a trailing newline to a caller-supplied
/// sink.
///
/// The newline is part of the payload; the level's template may then append
/// its own, producing a blank line. This matches the historical behavior of
/// line-print loggers and is kept for output compatibility.
///
/// # Examples
///
/// ```
/// # use templog::prelude::*;
/// # let logger = Logger::default();
/// use templog::logln;
/// let mut sink = MemorySink::new();
/// logln!(logger, &mut sink, Level::Warn, "copy", 3, "files");
/// assert_eq!(sink.contents_string(), "[wrn] copy 3 files\n \n");
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr, $sink:expr, $level:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let mut payload = ::std::format!("{}", $first);
        $(
            {
                use ::std::fmt::Write as _;
                payload.push(' ');
                let _ = ::std::write!(payload, "{}", $rest);
            }
        )*
        payload.push('\n');
        $logger.log_to($sink, $level, payload)
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};
    use crate::sinks::MemorySink;

    fn capture() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(Level::Debug)
            .sink(sink.clone())
            .suffix(|| ", T".to_string())
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = capture();
        log!(logger, Level::Info, "formatted: {}", 42);
        assert_eq!(sink.contents_string(), "[inf] formatted: 42 , T\n");
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = capture();
        debug!(logger, "d={}", 1);
        warn!(logger, "w={}", 2);
        info!(logger, "i={}", 3);
        error!(logger, "e={}", 4);
        assert_eq!(
            sink.contents_string(),
            "[dbg] d=1 \n[wrn] w=2 \n[inf] i=3 , T\n[err] e=4 , T\n"
        );
    }

    #[test]
    fn test_sink_macros() {
        let (logger, own) = capture();
        let mut sink = MemorySink::new();
        debug_to!(logger, &mut sink, "d");
        warn_to!(logger, &mut sink, "w");
        info_to!(logger, &mut sink, "i");
        error_to!(logger, &mut sink, "e");
        assert_eq!(
            sink.contents_string(),
            "[dbg] d \n[wrn] w \n[inf] i , T\n[err] e , T\n"
        );
        assert!(own.is_empty());
    }

    #[test]
    fn test_logln_joins_and_doubles_newline() {
        let (logger, _own) = capture();
        let mut sink = MemorySink::new();
        logln!(logger, &mut sink, Level::Debug, "a", 1, true);
        assert_eq!(sink.contents_string(), "[dbg] a 1 true\n \n");
    }

    #[test]
    fn test_logln_respects_threshold() {
        let (logger, _own) = capture();
        logger.set_level(Level::Error);
        let mut sink = MemorySink::new();
        logln!(logger, &mut sink, Level::Info, "hidden");
        assert!(sink.is_empty());
    }
}
