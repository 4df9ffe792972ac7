//! Observer hook for emitted lines

use super::level::Level;

/// Callback invoked once per emission that passes filtering, after the sink
/// write returns, with the level and the rendered line.
///
/// Observers run inside the logger's critical section and must not call
/// back into the logger that invoked them.
pub type Observer = Box<dyn FnMut(Level, &str) + Send>;
