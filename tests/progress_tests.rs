//! Tests for the progress module functionality.
//!
//! This file contains tests for the header bar, percentage formatting and
//! styling options.

use twirl::progress::display::{HEADER_BAR_WIDTH, INDENT};
use twirl::progress::{format_percentage, HeaderBar, StyleOptions};

#[test]
fn test_header_none_completed() {
    let header = HeaderBar::new(0, 0, 10);
    assert_eq!(header.filled(), 0);
    let line = header.render(&StyleOptions::plain());
    assert!(line.contains("0 / 10"));
    assert!(!line.contains('='));
}

#[test]
fn test_header_all_completed() {
    let header = HeaderBar::new(10, 0, 10);
    assert_eq!(header.filled(), 30);
    let line = header.render(&StyleOptions::plain());
    assert!(line.contains("10 / 10"));
    assert!(line.contains(&format!("[{}>]", "=".repeat(29))));
}

#[test]
fn test_header_bar_width_is_fixed() {
    for done in 0..=7 {
        let bar = HeaderBar::new(done, 0, 7).bar();
        assert_eq!(bar.chars().count(), HEADER_BAR_WIDTH);
        assert_eq!(bar.matches('>').count(), 1);
    }
}

#[test]
fn test_header_counts_failures() {
    let line = HeaderBar::new(2, 1, 5).render(&StyleOptions::plain());
    assert!(line.contains("[2 / 5 downloaded, 1 failed]"));
}

#[test]
fn test_header_custom_labels() {
    let style = StyleOptions::plain().with_label("Syncing").with_verb("synced");
    let line = HeaderBar::new(1, 0, 2).render(&style);
    assert!(line.starts_with(&format!("{INDENT}Syncing  [")));
    assert!(line.contains("[1 / 2 synced]"));
}

#[test]
fn test_header_colored_label() {
    let line = HeaderBar::new(1, 0, 2).render(&StyleOptions::default());
    assert_ne!(line, HeaderBar::new(1, 0, 2).render(&StyleOptions::plain()));
    assert_eq!(
        console::strip_ansi_codes(&line),
        HeaderBar::new(1, 0, 2).render(&StyleOptions::plain())
    );
}

#[test]
fn test_percentage_formatting() {
    assert_eq!(format_percentage(0.5), "50.00 %");
    assert_eq!(format_percentage(0.04291), "04.29 %");
    assert_eq!(format_percentage(0.999), "99.90 %");
}

#[test]
fn test_percentage_is_clamped() {
    assert_eq!(format_percentage(-0.5), "00.00 %");
    assert_eq!(format_percentage(1.5), "100.00 %");
}

#[test]
fn test_style_setters() {
    let mut style = StyleOptions::default();
    assert!(style.colors());
    style.set_colors(false);
    assert!(!style.colors());
    assert_eq!(style.header_label(), StyleOptions::DEFAULT_LABEL);
    assert_eq!(style.verb(), StyleOptions::DEFAULT_VERB);
}
