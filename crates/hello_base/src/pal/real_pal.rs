use std::io::Write;

use chrono::Local;
use tracing::{debug, instrument};

use crate::{HelloError, HelloResult, error::ErrorKind};

use super::traits::{Pal, Timestamp};

/// Concrete PAL implementation backed by the host.
///
/// The clock is the system clock observed in the local time zone and output
/// goes to the process's standard output.
#[derive(Debug, Default)]
pub struct RealPal;

impl RealPal {
    pub fn new() -> Self {
        Self
    }
}

impl Pal for RealPal {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }

    #[instrument(skip(self, line), fields(len = line.len()))]
    fn write_stdout_line(&self, line: &str) -> HelloResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)
            .and_then(|()| stdout.flush())
            .map_err(|e| {
                debug!(error = %e, "failed to write to stdout");
                Box::new(HelloError::new(ErrorKind::OutputError { source: e }))
            })
    }
}
