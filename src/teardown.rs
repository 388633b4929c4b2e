//! Best-effort ordered cleanup with a deferred first error.

use std::io;

/// Runs release steps in order, letting every step run even when an earlier
/// one failed, and reporting the first captured failure.
///
/// Stream `close` implementations use this so that a failing body close can
/// never prevent the connection release behind it, and a failing release can
/// never mask the body-close error that came first.
///
/// ```rust,ignore
/// let mut teardown = Teardown::new();
/// teardown.run(|| flush_body());
/// teardown.run(|| release_connection());
/// teardown.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct Teardown {
    first_error: Option<io::Error>,
}

impl Teardown {
    /// Create an empty teardown chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one step now, capturing its failure without stopping the
    /// chain.
    pub fn run(&mut self, step: impl FnOnce() -> io::Result<()>) {
        if let Err(err) = step() {
            self.record(err);
        }
    }

    /// Record a failure produced outside [`run`](Teardown::run), e.g. when a
    /// step's success value feeds the next step.
    ///
    /// Only the first recorded failure is kept.
    pub fn record(&mut self, err: io::Error) {
        if self.first_error.is_none() {
            self.first_error = Some(err);
        }
    }

    /// Finish the chain, reporting the first captured failure if any step
    /// failed.
    pub fn finish(self) -> io::Result<()> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
