//! Tests for the item module functionality.
//!
//! This file covers the progress item contract: sticky completion,
//! non-decreasing progress and the rendering of a single line.

use std::sync::Arc;
use std::time::Duration;
use twirl::item::{ItemStatus, MockDownload, ProgressItem, SharedItem};
use twirl::progress::{Spinner, StyleOptions};

mod common;
use common::helpers::*;

#[test]
fn test_completion_is_sticky() {
    let clock = create_manual_clock();
    let download = MockDownload::with_duration(Duration::from_secs(1), clock.clone());
    download.start();

    clock.advance(Duration::from_millis(1200));
    assert!(download.is_completed());
    for _ in 0..10 {
        clock.advance(Duration::from_millis(300));
        assert!(download.is_completed());
        assert_eq!(download.normalized_progress(), 1.0);
    }
}

#[test]
fn test_progress_never_decreases() {
    let clock = create_manual_clock();
    let download = MockDownload::with_duration(Duration::from_secs(3), clock.clone());
    download.start();

    let mut values = Vec::new();
    for _ in 0..100 {
        values.push(download.normalized_progress());
        clock.advance(Duration::from_millis(37));
    }
    assert_non_decreasing(&values);
    assert_eq!(*values.last().unwrap(), 1.0);
    assert!(values.iter().all(|p| (0.0..=1.0).contains(p)));
}

#[test]
fn test_mock_download_duration_from_size_and_bandwidth() {
    let clock = create_manual_clock();
    let download = MockDownload::new(30.0, 10.0, clock.clone()).unwrap();
    assert_eq!(download.expected_duration(), Duration::from_secs(3));
    download.start();
    clock.advance(Duration::from_millis(1500));
    assert_eq!(download.normalized_progress(), 0.5);
    assert_eq!(download.status(), ItemStatus::InProgress);
}

#[test]
fn test_default_title_is_identity() {
    let clock = create_manual_clock();
    let download = MockDownload::with_duration(Duration::from_secs(1), clock);
    assert_eq!(download.display_title(), download.id().to_string());

    let titled = MockDownload::with_duration(Duration::from_secs(1), create_manual_clock())
        .with_title("linux.iso");
    assert_eq!(titled.display_title(), "linux.iso");
}

#[test]
fn test_identities_are_unique() {
    let items = create_mock_items(&create_manual_clock(), &[1.0, 1.0, 1.0]);
    assert_ne!(items[0].id(), items[1].id());
    assert_ne!(items[1].id(), items[2].id());
}

#[test]
fn test_render_line_in_progress() {
    let clock = create_manual_clock();
    let download = MockDownload::with_duration(Duration::from_secs(4), clock.clone())
        .with_title("a.bin");
    download.start();
    clock.advance(Duration::from_secs(2));

    let mut out = Vec::new();
    let mut spinner = Spinner::new();
    download
        .render_line(&mut out, &mut spinner, &StyleOptions::plain())
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "    ◐ 50.00 % [a.bin]\n");
    assert_eq!(spinner.steps(), 1);
}

#[test]
fn test_render_line_done_still_advances_spinner() {
    let clock = create_manual_clock();
    let download = MockDownload::with_duration(Duration::ZERO, clock).with_title("b.bin");
    download.start();

    let mut out = Vec::new();
    let mut spinner = Spinner::new();
    download
        .render_line(&mut out, &mut spinner, &StyleOptions::plain())
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "    ✔ Done! [b.bin]\n");
    assert_eq!(spinner.steps(), 1);
}

#[test]
fn test_shared_spinner_across_items() {
    let clock = create_manual_clock();
    let items = create_mock_items(&clock, &[10.0, 10.0, 10.0]);
    for item in &items {
        item.start();
    }

    let mut out = Vec::new();
    let mut spinner = Spinner::new();
    for item in &items {
        item.render_line(&mut out, &mut spinner, &StyleOptions::plain())
            .unwrap();
    }
    let glyphs: Vec<char> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| l.trim_start().chars().next().unwrap())
        .collect();
    assert_eq!(glyphs, vec!['◐', '◓', '◑']);
}

#[test]
fn test_failed_transfer_renders_reason() {
    let transfers = create_transfers(&["c.bin"], 100);
    transfers[0].start();
    transfers[0].advance(10);
    transfers[0].fail("checksum mismatch");

    let item: SharedItem = transfers[0].clone();
    let mut out = Vec::new();
    item.render_line(&mut out, &mut Spinner::new(), &StyleOptions::plain())
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "    ✘ Failed: checksum mismatch [c.bin]\n"
    );
    assert!(item.is_completed());
}

#[test]
fn test_recording_item_delegates() {
    let clock = create_manual_clock();
    let inner = create_mock_items(&clock, &[2.0]).remove(0);
    let recorder = Arc::new(RecordingItem::new(inner));
    recorder.start();
    clock.advance(Duration::from_secs(1));
    assert_eq!(recorder.normalized_progress(), 0.5);
    assert_eq!(recorder.seen(), vec![0.5]);
}
