//! Main logger implementation

use super::{
    decorator::{self, Decorator},
    error::Result,
    level::Level,
    metrics::LoggerMetrics,
    observer::Observer,
    template::{self, TemplateTable},
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// A leveled line logger.
///
/// Every emission runs the same pipeline: quiet check, threshold check,
/// render, one sink write, observer. Render, write, and observer share one
/// critical section, so rendered-line order matches sink-write order per
/// logger even under concurrent use.
///
/// # Example
///
/// ```
/// use templog::{Level, Logger};
///
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .suffix(|| ", ready".to_string())
///     .build();
///
/// assert_eq!(logger.format(Level::Info, "hello"), "[inf] hello , ready\n");
/// logger.warn("low disk space");
/// ```
pub struct Logger {
    level: RwLock<Level>,
    quiet: AtomicBool,
    inner: Mutex<Inner>,
    metrics: LoggerMetrics,
}

struct Inner {
    sink: Box<dyn Write + Send>,
    templates: TemplateTable,
    prefix: Decorator,
    suffix: Decorator,
    observer: Option<Observer>,
}

impl Inner {
    fn render(&self, level: Level, payload: &dyn fmt::Display) -> String {
        let tmpl = self.templates.resolve(level);
        template::render(tmpl, &payload.to_string(), &*self.prefix, &*self.suffix)
    }
}

impl Logger {
    /// Create a logger with the given threshold and the stock defaults:
    /// stdout sink, built-in templates, empty prefix, timestamp suffix.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level: RwLock::new(level),
            quiet: AtomicBool::new(false),
            inner: Mutex::new(Inner {
                sink: Box::new(io::stdout()),
                templates: TemplateTable::builtin(),
                prefix: decorator::empty(),
                suffix: decorator::timestamp(),
                observer: None,
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The current threshold.
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Set the threshold; strictly lower levels are filtered out.
    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// Whether all emissions are currently suppressed.
    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Suppress (or re-enable) all emissions regardless of level.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    /// Redirect the logger's own output. The logger only writes to the
    /// sink, never closes it.
    pub fn set_output(&self, sink: impl Write + Send + 'static) {
        self.inner.lock().sink = Box::new(sink);
    }

    /// Replace the whole template table.
    pub fn set_templates(&self, templates: TemplateTable) {
        self.inner.lock().templates = templates;
    }

    /// Replace the prefix decorator (spliced into `{{prefix}}` tokens).
    pub fn set_prefix(&self, prefix: impl Fn() -> String + Send + 'static) {
        self.inner.lock().prefix = Box::new(prefix);
    }

    /// Replace the suffix decorator (spliced into `{{suffix}}` tokens).
    pub fn set_suffix(&self, suffix: impl Fn() -> String + Send + 'static) {
        self.inner.lock().suffix = Box::new(suffix);
    }

    /// Install an observer, invoked with `(level, rendered_line)` after
    /// every sink write. The observer must not call back into this logger.
    pub fn set_observer(&self, observer: impl FnMut(Level, &str) + Send + 'static) {
        self.inner.lock().observer = Some(Box::new(observer));
    }

    /// Dispatch counters for this logger.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Render a line without filtering, writing, or notifying the observer.
    ///
    /// Pure with respect to logger state at call time; decorators run as
    /// they would for a real emission.
    pub fn format(&self, level: Level, payload: impl fmt::Display) -> String {
        self.inner.lock().render(level, &payload)
    }

    /// Emit a payload at the given level through the logger's own sink.
    pub fn log(&self, level: Level, payload: impl fmt::Display) {
        self.emit(None, level, &payload);
    }

    /// Emit a payload at the given level through a caller-supplied sink.
    /// Filtering, rendering, and the observer behave exactly as in [`log`].
    ///
    /// [`log`]: Logger::log
    pub fn log_to(&self, sink: &mut dyn Write, level: Level, payload: impl fmt::Display) {
        self.emit(Some(sink), level, &payload);
    }

    #[inline]
    pub fn debug(&self, payload: impl fmt::Display) {
        self.log(Level::Debug, payload);
    }

    #[inline]
    pub fn warn(&self, payload: impl fmt::Display) {
        self.log(Level::Warn, payload);
    }

    #[inline]
    pub fn info(&self, payload: impl fmt::Display) {
        self.log(Level::Info, payload);
    }

    #[inline]
    pub fn error(&self, payload: impl fmt::Display) {
        self.log(Level::Error, payload);
    }

    #[inline]
    pub fn debug_to(&self, sink: &mut dyn Write, payload: impl fmt::Display) {
        self.log_to(sink, Level::Debug, payload);
    }

    #[inline]
    pub fn warn_to(&self, sink: &mut dyn Write, payload: impl fmt::Display) {
        self.log_to(sink, Level::Warn, payload);
    }

    #[inline]
    pub fn info_to(&self, sink: &mut dyn Write, payload: impl fmt::Display) {
        self.log_to(sink, Level::Info, payload);
    }

    #[inline]
    pub fn error_to(&self, sink: &mut dyn Write, payload: impl fmt::Display) {
        self.log_to(sink, Level::Error, payload);
    }

    /// Flush the logger's own sink.
    pub fn flush(&self) -> Result<()> {
        self.inner.lock().sink.flush()?;
        Ok(())
    }

    fn emit(&self, sink: Option<&mut dyn Write>, level: Level, payload: &dyn fmt::Display) {
        if self.quiet.load(Ordering::Relaxed) || level < *self.level.read() {
            self.metrics.record_suppressed();
            return;
        }

        let mut inner = self.inner.lock();
        let line = inner.render(level, payload);

        // One write per line; a failing sink must never fault the host.
        let written = match sink {
            Some(w) => w.write_all(line.as_bytes()),
            None => inner.sink.write_all(line.as_bytes()),
        };
        match written {
            Ok(()) => self.metrics.record_emitted(),
            Err(_) => self.metrics.record_write_error(),
        }

        if let Some(observer) = inner.observer.as_mut() {
            observer(level, &line);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::Warn)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use templog::{Level, Logger, TemplateTable};
///
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .template(Level::Debug, "D> %s\n")
///     .prefix(|| "api".to_string())
///     .suffix(|| ", t0".to_string())
///     .build();
/// ```
pub struct LoggerBuilder {
    level: Level,
    quiet: bool,
    sink: Option<Box<dyn Write + Send>>,
    templates: Option<TemplateTable>,
    prefix: Option<Decorator>,
    suffix: Option<Decorator>,
    observer: Option<Observer>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::Warn,
            quiet: false,
            sink: None,
            templates: None,
            prefix: None,
            suffix: None,
            observer: None,
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Start with all emissions suppressed
    #[must_use = "builder methods return a new value"]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set the output sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replace the whole template table
    #[must_use = "builder methods return a new value"]
    pub fn templates(mut self, templates: TemplateTable) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Override the template for one level, keeping the built-ins for the
    /// rest
    #[must_use = "builder methods return a new value"]
    pub fn template(mut self, level: Level, template: impl Into<String>) -> Self {
        self.templates
            .get_or_insert_with(TemplateTable::builtin)
            .insert(level, template);
        self
    }

    /// Set the prefix decorator
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Fn() -> String + Send + 'static) -> Self {
        self.prefix = Some(Box::new(prefix));
        self
    }

    /// Set the suffix decorator
    #[must_use = "builder methods return a new value"]
    pub fn suffix(mut self, suffix: impl Fn() -> String + Send + 'static) -> Self {
        self.suffix = Some(Box::new(suffix));
        self
    }

    /// Install an observer
    #[must_use = "builder methods return a new value"]
    pub fn observer(mut self, observer: impl FnMut(Level, &str) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            level: RwLock::new(self.level),
            quiet: AtomicBool::new(self.quiet),
            inner: Mutex::new(Inner {
                sink: self.sink.unwrap_or_else(|| Box::new(io::stdout())),
                templates: self.templates.unwrap_or_else(TemplateTable::builtin),
                prefix: self.prefix.unwrap_or_else(decorator::empty),
                suffix: self.suffix.unwrap_or_else(decorator::timestamp),
                observer: self.observer,
            }),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
