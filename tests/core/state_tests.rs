//! Tests for shared UI state: the sticky header and toasts

use std::time::Duration;

use farmsite::state::{StickyHeader, Toast, ToastKind, HEADER_SCROLL_THRESHOLD};

// ============================================
// Sticky Header Tests
// ============================================

#[test]
fn test_many_scroll_events_schedule_one_update_per_frame() {
    let mut header = StickyHeader::default();

    // A burst of raw scroll events between frames.
    let scheduled = (0..50)
        .filter(|i| header.on_scroll(*i as f32))
        .count();
    assert_eq!(scheduled, 1);

    // One frame consumes exactly one update.
    assert!(header.take_update());
    assert!(!header.take_update());

    // The next burst schedules exactly one more.
    let scheduled = (0..50)
        .filter(|i| header.on_scroll(*i as f32))
        .count();
    assert_eq!(scheduled, 1);
}

#[test]
fn test_header_state_reflects_the_latest_offset() {
    let mut header = StickyHeader::default();

    header.on_scroll(500.0);
    header.on_scroll(0.0);
    header.take_update();
    assert!(!header.is_scrolled());

    header.on_scroll(HEADER_SCROLL_THRESHOLD + 1.0);
    header.take_update();
    assert!(header.is_scrolled());
}

#[test]
fn test_header_threshold_is_exclusive() {
    let mut header = StickyHeader::default();
    header.on_scroll(HEADER_SCROLL_THRESHOLD);
    header.take_update();
    assert!(!header.is_scrolled());
}

#[test]
fn test_untouched_header_has_no_pending_update() {
    let mut header = StickyHeader::default();
    assert!(!header.take_update());
    assert!(!header.is_scrolled());
}

// ============================================
// Toast Tests
// ============================================

#[test]
fn test_toast_is_visible_for_its_duration() {
    let toast = Toast::new("Language changed", ToastKind::Success);
    assert!(!toast.is_expired());
    assert_eq!(toast.fade_alpha(), 1.0);
}

#[test]
fn test_toast_expires_after_duration_plus_fade() {
    let toast = Toast::with_duration("gone", ToastKind::Error, Duration::ZERO);
    // Duration elapsed immediately; the fade grace keeps it briefly alive.
    assert!(toast.fade_alpha() <= 1.0);
    std::thread::sleep(Duration::from_millis(350));
    assert!(toast.is_expired());
    assert_eq!(toast.fade_alpha(), 0.0);
}

#[test]
fn test_toast_kinds_have_distinct_colors() {
    assert_ne!(ToastKind::Success.color(), ToastKind::Error.color());
}
