use std::io;
use std::sync::{Arc, Mutex};

use chrono::{FixedOffset, TimeZone};

use crate::HelloError;
use crate::HelloResult;
use crate::error::ErrorKind;

use super::traits::{Pal, Timestamp};

/* 📖 # Why keep MockPal state behind Arc<Mutex<T>>?

1. **Shared**: a test keeps one clone and hands another to PalHandle, then inspects the output
2. **Isolation**: nothing is written to the real stdout
3. **Control**: the clock can be pinned and write failures injected
4. **Thread-safe**: Pal requires Send + Sync
*/

/// In-memory PAL implementation for testing.
///
/// The clock starts at `2024-01-01T00:00:00+00:00` and only moves when
/// `set_now` is called. Lines written to stdout are captured.
///
/// # Examples
///
/// ```
/// use hello_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.write_stdout_line("Hello").unwrap();
/// assert_eq!(mock.stdout(), "Hello\n");
/// ```
#[derive(Debug, Clone)]
pub struct MockPal {
    now: Arc<Mutex<Timestamp>>,
    stdout: Arc<Mutex<Vec<String>>>,
    output_failure: Arc<Mutex<Option<String>>>,
}

impl MockPal {
    /// Create a new MockPal with the default clock and empty output.
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Self::default_now())),
            stdout: Arc::new(Mutex::new(Vec::new())),
            output_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a new MockPal whose clock reads `now`.
    pub fn at(now: Timestamp) -> Self {
        let mock = Self::new();
        mock.set_now(now);
        mock
    }

    fn default_now() -> Timestamp {
        FixedOffset::east_opt(0)
            .and_then(|utc| utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single())
            .unwrap_or_default()
    }

    /// Pin the clock to `now`.
    pub fn set_now(&self, now: Timestamp) {
        *self.now.lock().unwrap() = now;
    }

    /// Make every following stdout write fail with the given message.
    pub fn fail_output(&self, message: impl Into<String>) {
        *self.output_failure.lock().unwrap() = Some(message.into());
    }

    /// All captured output, each line terminated by a newline.
    pub fn stdout(&self) -> String {
        self.stdout
            .lock()
            .unwrap()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Captured output lines without terminators.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().unwrap().clone()
    }
}

impl Default for MockPal {
    fn default() -> Self {
        Self::new()
    }
}

impl Pal for MockPal {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap()
    }

    fn write_stdout_line(&self, line: &str) -> HelloResult<()> {
        if let Some(message) = self.output_failure.lock().unwrap().as_ref() {
            return Err(Box::new(HelloError::new(ErrorKind::OutputError {
                source: io::Error::other(message.clone()),
            })));
        }
        self.stdout.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
