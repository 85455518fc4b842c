//! Time source injected into rendering.
use chrono::Datelike;

/// Provides the current year, as shown in the footer copyright.
///
/// Rendering never reads the system time directly. The server hands a
/// [`SystemClock`] to every render, tests pin a fixed year so the same inputs
/// always produce the same document.
pub trait Clock {
    fn year(&self) -> i32;
}

/// [`Clock`] backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        chrono::Local::now().year()
    }
}
