//! Shared constants and small state types.
//!
//! Timing, thresholds, and the cache allow-list live here so the UI and the
//! core modules agree on one set of numbers.

use std::time::{Duration, Instant};

use strum::Display;

// ============================================================================
// Constants
// ============================================================================

/// How long a toast stays fully visible
pub const TOAST_DURATION_MS: u64 = 3000;

/// Fade-out grace period after the visible duration
pub const TOAST_FADE_MS: u64 = 300;

/// Maximum dictionary polls before initialization gives up
pub const DICTIONARY_RETRY_LIMIT: u32 = 10;

/// Delay between dictionary polls
pub const DICTIONARY_RETRY_DELAY_MS: u64 = 100;

/// Scroll offset (in points) above which the header gets its shadow
pub const HEADER_SCROLL_THRESHOLD: f32 = 10.0;

/// Window width below which the hamburger menu replaces the desktop nav
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Version tag for the offline site cache; bumping it orphans the previous
/// bundle, which `activate` then purges
pub const SITE_CACHE_VERSION: &str = "farm-fresh-v1";

/// Fixed allow-list of assets pre-cached for offline use
pub const PRECACHE_PATHS: &[&str] = &[
    "index.html",
    "about.html",
    "products.html",
    "contact.html",
    "css/style.css",
    "js/main.js",
    "manifest.json",
];

/// Base URL of the published site, used when no local bundle is present
pub const SITE_BASE_URL: &str = "https://farmfreshdairy.github.io/FarmProject";

// ============================================================================
// Toasts
// ============================================================================

/// Visual flavor of a toast notification
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Background color for this toast kind
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastKind::Success => [76, 175, 80],
            ToastKind::Error => [211, 47, 47],
        }
    }

    /// Text color for this toast kind
    pub fn text_color(&self) -> [u8; 3] {
        [255, 255, 255]
    }
}

/// A transient, non-blocking notification. Concurrent toasts stack.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self::with_duration(message, kind, Duration::from_millis(TOAST_DURATION_MS))
    }

    pub fn with_duration(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    /// Past the visible duration plus the fade-out grace period.
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.duration + Duration::from_millis(TOAST_FADE_MS)
    }

    /// 1.0 while fully visible, ramping to 0.0 across the fade-out grace.
    pub fn fade_alpha(&self) -> f32 {
        let elapsed = self.shown_at.elapsed();
        if elapsed <= self.duration {
            return 1.0;
        }
        let fade = Duration::from_millis(TOAST_FADE_MS);
        let into_fade = elapsed - self.duration;
        if into_fade >= fade {
            0.0
        } else {
            1.0 - into_fade.as_secs_f32() / fade.as_secs_f32()
        }
    }
}

// ============================================================================
// Sticky header
// ============================================================================

/// Scroll-driven header state with single-flight update coalescing.
///
/// Raw scroll events only mark an update as pending; the pending update is
/// consumed once per rendered frame, so any number of events between frames
/// collapses into at most one visual state change.
#[derive(Clone, Copy, Debug, Default)]
pub struct StickyHeader {
    scrolled: bool,
    update_scheduled: bool,
    pending_offset: f32,
}

impl StickyHeader {
    /// Record a raw scroll event. Returns true if this event scheduled the
    /// pending update (false while one is already scheduled).
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.pending_offset = offset;
        if self.update_scheduled {
            return false;
        }
        self.update_scheduled = true;
        true
    }

    /// Consume the pending update, if any. Called once per frame.
    pub fn take_update(&mut self) -> bool {
        if !self.update_scheduled {
            return false;
        }
        self.update_scheduled = false;
        self.scrolled = self.pending_offset > HEADER_SCROLL_THRESHOLD;
        true
    }

    /// Whether the header currently shows its scrolled treatment.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Whether the background cache warm-up is still running
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Precaching,
}
