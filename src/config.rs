//! Printer configuration.
//!
//! Options are plain values handed to the printer when it is built, so every
//! frame is rendered against a stable snapshot of the verbosity level.

/// How much detail to print, counted like repeated `-v` flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    /// One-line summaries only.
    pub const QUIET: Self = Self(0);
    /// Adds the transport header and moves the endpoints to a second line.
    pub const VERBOSE: Self = Self(1);
    /// Adds a dump of `PAYLOAD` contents.
    pub const PAYLOAD: Self = Self(2);

    /// Wrap a raw verbosity count.
    #[must_use]
    pub const fn new(level: u8) -> Self { Self(level) }

    /// The raw count.
    #[must_use]
    pub const fn level(self) -> u8 { self.0 }

    /// Whether transport details are printed.
    #[must_use]
    pub const fn is_verbose(self) -> bool { self.0 >= Self::VERBOSE.0 }

    /// Whether payload bytes are dumped.
    #[must_use]
    pub const fn dumps_payload(self) -> bool { self.0 >= Self::PAYLOAD.0 }
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self { Self(level) }
}

/// Options controlling how frames are rendered.
///
/// # Examples
///
/// ```
/// use vsockmon::config::{PrintOptions, Verbosity};
///
/// let options = PrintOptions::new().with_verbosity(2);
/// assert_eq!(options.verbosity(), Verbosity::PAYLOAD);
/// assert!(options.verbosity().dumps_payload());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrintOptions {
    verbosity: Verbosity,
}

impl PrintOptions {
    /// Quiet options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verbosity: Verbosity::QUIET,
        }
    }

    /// Set the verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: impl Into<Verbosity>) -> Self {
        self.verbosity = verbosity.into();
        self
    }

    /// The configured verbosity.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity { self.verbosity }
}
