//! Utilities for building AF_VSOCK monitor frames and observing the
//! printer during tests.
//!
//! ```rust
//! use vsockmon_testing::FrameBuilder;
//!
//! let frame = FrameBuilder::generic().src(3, 1024).dst(2, 80).build();
//! assert_eq!(frame.len(), vsockmon::wire::HEADER_SIZE);
//! ```

pub mod dump;
pub mod frame;
pub mod logging;

pub use dump::RecordingDump;
pub use frame::{FrameBuilder, VirtioFields};
pub use logging::{LoggerHandle, logger};
