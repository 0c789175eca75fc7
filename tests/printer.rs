//! End-to-end tests for printing captured monitor frames.
//!
//! Frames are built with `vsockmon_testing::FrameBuilder` and handed to the
//! printer the way a capture loop would.

use rstest::{fixture, rstest};
use vsockmon::{CaptureRecord, PrintOptions, TRUNCATION_MARKER, VsockPrinter, wire::HEADER_SIZE};
use vsockmon_testing::{FrameBuilder, RecordingDump, VirtioFields};

#[fixture]
fn credit_update() -> Vec<u8> {
    FrameBuilder::virtio()
        .op(3)
        .src(2, 1024)
        .dst(3, 5000)
        .transport(VirtioFields {
            src_cid: 2,
            dst_cid: 3,
            src_port: 1024,
            dst_port: 5000,
            len: 0,
            kind: 1,
            op: 6,
            flags: 0,
            buf_alloc: 262_144,
            fwd_cnt: 4096,
        })
        .build()
}

fn print_record(verbosity: u8, record: &CaptureRecord<'_>) -> (String, usize) {
    let printer = VsockPrinter::new(PrintOptions::new().with_verbosity(verbosity));
    let mut out = String::new();
    let consumed = printer.print_record(&mut out, record);
    (out, consumed)
}

#[rstest]
fn credit_update_at_each_verbosity(credit_update: Vec<u8>) {
    let record = CaptureRecord::from_bytes(&credit_update);

    let (quiet, consumed) = print_record(0, &record);
    assert_eq!(quiet, "VIRTIO 2.1024 > 3.5000 CONTROL, length 64");
    assert_eq!(consumed, HEADER_SIZE);

    let (verbose, _) = print_record(1, &record);
    assert_eq!(
        verbose,
        "VIRTIO (len 0, type STREAM, op CREDIT_UPDATE, flags 0, buf_alloc 262144, fwd_cnt \
         4096)\n\t2.1024 > 3.5000 CONTROL, length 64"
    );
}

#[rstest]
fn snapped_record_reports_wire_length(credit_update: Vec<u8>) {
    let record = CaptureRecord::new(&credit_update, 1500);
    assert!(record.is_snapped());
    let (out, consumed) = print_record(0, &record);
    assert_eq!(out, "VIRTIO 2.1024 > 3.5000 CONTROL, length 1500");
    assert_eq!(consumed, 1500);
}

#[test]
fn runt_record_prints_marker() {
    let frame = [2u8, 0, 1];
    let (out, consumed) = print_record(2, &CaptureRecord::from_bytes(&frame));
    assert_eq!(out, TRUNCATION_MARKER);
    assert_eq!(consumed, 3);
}

#[test]
fn payload_frames_render_a_hex_dump() {
    let frame = FrameBuilder::generic()
        .op(4)
        .src(3, 40000)
        .dst(2, 22)
        .payload(b"SSH-2.0-OpenSSH_9.6\r\n")
        .build();
    let (out, _) = print_record(2, &CaptureRecord::from_bytes(&frame));

    let expected = [
        "GENERIC".to_owned(),
        "\t3.40000 > 2.22 PAYLOAD, length 85".to_owned(),
        "\t0x0000:  5353 482d 322e 302d 4f70 656e 5353 485f  SSH-2.0-OpenSSH_".to_owned(),
        format!("\t0x0010:  {:<39}  9.6..", "392e 360d 0a"),
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn dump_collaborator_sees_only_trailing_bytes() {
    let body: Vec<u8> = (0..=255).collect();
    let frame = FrameBuilder::virtio().op(4).payload(&body).build();
    let recorder = RecordingDump::new();
    let printer = VsockPrinter::new(PrintOptions::new().with_verbosity(3)).with_dump(&recorder);

    let mut out = String::new();
    printer.print_record(&mut out, &CaptureRecord::from_bytes(&frame));

    assert!(out.ends_with(&format!("length {}\n<dump 256 bytes>", frame.len())));
    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "\t");
    assert_eq!(calls[0].1, body);
}

#[rstest]
#[case::quiet(0)]
#[case::verbose(1)]
fn dump_collaborator_idle_below_payload_verbosity(#[case] verbosity: u8) {
    let frame = FrameBuilder::generic().op(4).payload(b"data").build();
    let recorder = RecordingDump::new();
    let printer =
        VsockPrinter::new(PrintOptions::new().with_verbosity(verbosity)).with_dump(&recorder);

    let mut out = String::new();
    printer.print_record(&mut out, &CaptureRecord::from_bytes(&frame));

    assert!(recorder.calls().is_empty());
    assert!(out.ends_with("PAYLOAD, length 68"));
}
