//! Print AF_VSOCK monitor frames stored as raw files.
//!
//! Each file holds one captured frame; its description is written to stdout
//! on its own line.

mod cli;

use std::{fs, process::ExitCode};

use clap::Parser;
use vsockmon::{CaptureRecord, PrintOptions, VsockPrinter};

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never interleave with frame output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let printer = VsockPrinter::new(PrintOptions::new().with_verbosity(cli.verbose));

    let mut status = ExitCode::SUCCESS;
    for path in &cli.frames {
        let frame = match fs::read(path) {
            Ok(frame) => frame,
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "failed to read frame");
                status = ExitCode::FAILURE;
                continue;
            }
        };
        let record = CaptureRecord::new(&frame, cli.wire_len.unwrap_or(frame.len()));
        let mut line = String::new();
        printer.print_record(&mut line, &record);
        println!("{line}");
    }
    status
}
