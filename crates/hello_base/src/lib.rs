/* 📖 # Why have hello_base as a core library?
hello_base provides the error handling, tracing setup and platform abstraction used across all crates.
The greeter and the CLI both build on it without depending on each other's internals.
*/

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{HelloError, HelloResult, ResultExt};
pub use pal::{MockPal, Pal, PalHandle, RealPal, Timestamp};
