//! Log output of the printer when its sink fails.

use std::fmt;

use log::Level;
use rstest::rstest;
use vsockmon::{PrintOptions, VsockPrinter};
use vsockmon_testing::{FrameBuilder, LoggerHandle, logger};

/// A sink that rejects every write.
struct BrokenSink;

impl fmt::Write for BrokenSink {
    fn write_str(&mut self, _: &str) -> fmt::Result { Err(fmt::Error) }
}

#[rstest]
fn sink_failure_is_logged_as_warning(mut logger: LoggerHandle) {
    logger.clear();
    let frame = FrameBuilder::generic().op(1).build();
    let printer = VsockPrinter::new(PrintOptions::new());

    assert_eq!(printer.print(&mut BrokenSink, &frame, 99, frame.len()), 99);

    let records = logger.drain_matching("failed to write vsock frame description");
    assert_eq!(records.len(), 1, "unexpected records: {records:?}");
    assert_eq!(records[0].0, Level::Warn);
    assert!(records[0].1.contains("output sink rejected write"));
}
