use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::HelloResult;

/// A point in time together with the UTC offset it was observed in.
///
/// The offset matters for greetings: the calendar date is rendered in the
/// offset of the timestamp, so the same instant can be a different day.
pub type Timestamp = DateTime<FixedOffset>;

/* 📖 # Why is Pal a trait instead of a struct?

Using a trait enables two key benefits:
1. **Testability**: MockPal implements Pal with a fixed clock and captured output
2. **Flexibility**: Code depends on the abstraction, not the concrete implementation

Greeting code never calls `chrono::Local::now()` or `println!` directly.
*/

/// Platform Abstraction Layer (PAL) trait providing the clock and standard output.
///
/// Two implementations are provided:
/// - `RealPal`: the system clock in the local time zone and the process stdout
/// - `MockPal`: a settable clock and an in-memory output buffer for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// The current point in time.
    fn now(&self) -> Timestamp;

    /// Write a single line to standard output.
    ///
    /// The newline is appended by the implementation and the stream is flushed,
    /// so `line` must not contain its own terminator.
    fn write_stdout_line(&self, line: &str) -> HelloResult<()>;
}

/// Handle to a PAL implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Pal>` for cheap cloning and thread-safe sharing.
///
/// # Examples
///
/// ```
/// use hello_base::{MockPal, PalHandle};
///
/// let pal = PalHandle::new(MockPal::new());
/// let pal_clone = pal.clone();
/// pal_clone.write_stdout_line("hi").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
