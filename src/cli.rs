//! Command line interface for the `vsockmon` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command line arguments for the `vsockmon` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vsockmon",
    version,
    about = "Print captured AF_VSOCK monitor frames"
)]
pub struct Cli {
    /// Print transport headers; repeat to dump payload bytes.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// On-wire length of each frame, for captures that were snapped short.
    #[arg(long, value_name = "BYTES")]
    pub wire_len: Option<usize>,

    /// Files each holding one raw captured frame.
    #[arg(required = true, value_name = "FILE")]
    pub frames: Vec<PathBuf>,
}
