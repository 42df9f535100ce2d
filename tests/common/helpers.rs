#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use twirl::clock::{ManualClock, SharedClock};
use twirl::item::{ItemId, ItemStatus, MockDownload, ProgressItem, SharedItem, TransferProgress};
use twirl::renderer::{ProgressRenderer, RendererBuilder};

// Common test constants
pub const TEST_FRAME: Duration = Duration::from_millis(50);
pub const TEST_REFRESH: Duration = Duration::from_millis(200);

// === Clock Helpers ===

/// Creates a virtual clock that only advances on sleep
pub fn create_manual_clock() -> Arc<ManualClock> {
    ManualClock::shared()
}

// === Item Creation Helpers ===

/// Creates one mock download per duration, in seconds
pub fn create_mock_items(clock: &Arc<ManualClock>, durations: &[f64]) -> Vec<SharedItem> {
    durations
        .iter()
        .enumerate()
        .map(|(i, secs)| {
            let clock: SharedClock = clock.clone();
            Arc::new(
                MockDownload::with_duration(Duration::from_secs_f64(*secs), clock)
                    .with_title(format!("item-{i}")),
            ) as SharedItem
        })
        .collect()
}

/// Creates titled transfers of `total` bytes each
pub fn create_transfers(titles: &[&str], total: u64) -> Vec<Arc<TransferProgress>> {
    titles
        .iter()
        .map(|title| Arc::new(TransferProgress::new(total).with_title(*title)))
        .collect()
}

/// Converts concrete transfers into renderer handles
pub fn as_items(transfers: &[Arc<TransferProgress>]) -> Vec<SharedItem> {
    transfers
        .iter()
        .map(|t| t.clone() as SharedItem)
        .collect()
}

// === Renderer Helpers ===

/// Creates a plain renderer with fast test pacing, not yet initialized
pub fn create_test_renderer(clock: &Arc<ManualClock>, items: Vec<SharedItem>) -> ProgressRenderer {
    let clock: SharedClock = clock.clone();
    RendererBuilder::plain()
        .clock(clock)
        .frame_duration(TEST_FRAME)
        .refresh_interval(TEST_REFRESH)
        .build(items)
        .expect("Failed to build renderer")
}

/// Creates an initialized plain renderer with fast test pacing
pub fn create_initialized_renderer(
    clock: &Arc<ManualClock>,
    items: Vec<SharedItem>,
) -> ProgressRenderer {
    let mut renderer = create_test_renderer(clock, items);
    renderer.initialize().expect("Failed to initialize renderer");
    renderer
}

// === Output Helpers ===

/// Output without any escape sequence
pub fn plain_text(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    console::strip_ansi_codes(&text).into_owned()
}

/// Last non-empty visible line of the output
pub fn last_line(output: &[u8]) -> String {
    plain_text(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .last()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Counts the occurrences of `needle` in the raw output
pub fn count(output: &[u8], needle: &str) -> usize {
    String::from_utf8_lossy(output).matches(needle).count()
}

// === Instrumented Items ===

/// An item recording every progress value it reports
pub struct RecordingItem {
    inner: SharedItem,
    seen: Mutex<Vec<f64>>,
}

impl RecordingItem {
    pub fn new(inner: SharedItem) -> Self {
        Self {
            inner,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<f64> {
        self.seen.lock().unwrap().clone()
    }
}

impl ProgressItem for RecordingItem {
    fn id(&self) -> ItemId {
        self.inner.id()
    }

    fn start(&self) {
        self.inner.start();
    }

    fn normalized_progress(&self) -> f64 {
        let progress = self.inner.normalized_progress();
        self.seen.lock().unwrap().push(progress);
        progress
    }

    fn status(&self) -> ItemStatus {
        self.inner.status()
    }

    fn display_title(&self) -> String {
        self.inner.display_title()
    }
}

/// Asserts that recorded values never decrease
pub fn assert_non_decreasing(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "progress regressed from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

/// A sink failing on one specific write call
pub struct FlakyWriter {
    pub buf: Vec<u8>,
    writes: usize,
    fail_at: usize,
}

impl FlakyWriter {
    pub fn failing_at(fail_at: usize) -> Self {
        Self {
            buf: Vec::new(),
            writes: 0,
            fail_at,
        }
    }
}

impl Write for FlakyWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        if self.writes == self.fail_at {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
