//! Sink implementations
//!
//! A sink is any byte-stream write target (`std::io::Write`). These types
//! cover the common case where the host wants to keep a handle on the same
//! writer the logger uses.

pub mod memory;
pub mod shared;

pub use memory::MemorySink;
pub use shared::SharedSink;
